pub mod config;
pub mod entry;
pub mod error;
pub mod human;
pub mod paths;
pub mod store;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use entry::Entry;
pub use error::{Result, StoreError};
pub use store::Store;
