pub mod cases;
pub mod cli;
pub mod config;
pub mod logging;
pub mod text;

pub use cases::Case;
pub use config::Config;
pub use text::{most_frequent_separator, tokenize, DEFAULT_SEPARATORS};
