mod editor_utils;
mod input_utils;
mod new_mode;
mod path_mode;
mod since_mode;

pub use new_mode::new_mode;
pub use path_mode::path_mode;
pub use since_mode::since_mode;
