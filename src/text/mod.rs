pub mod separator;
pub mod tokenizer;

pub use separator::{
    most_frequent_separator, separator_frequencies, split_fields, SeparatorCount,
    DEFAULT_SEPARATORS,
};
pub use tokenizer::tokenize;
