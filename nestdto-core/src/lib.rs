//! Core utilities and types for the nestdto generator.
//!
//! This crate provides the file specification type shared by every stage of
//! the generation pipeline, plus the case conversion helpers used to derive
//! class and file names.

mod file;
mod utils;

// File specifications
pub use file::{FileSpec, GeneratedFile};
// String utilities
pub use utils::{
    split_words, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
    toml_value_to_string,
};
