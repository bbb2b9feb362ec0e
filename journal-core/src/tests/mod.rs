mod common;

pub use common::mk_config;
