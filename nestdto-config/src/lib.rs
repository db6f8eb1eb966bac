//! Option parsing and validation for the nestdto generator.
//!
//! The host hands over a loosely-typed bag of textual options. This crate
//! turns it into [`GenerationOptions`] in a single parse/validate step:
//! defaults are applied, boolean-like text is coerced, and the file naming
//! style is checked before any generation work starts.
//!
//! ```ignore
//! let file = ConfigFile::open("nestdto.toml")?;
//! let options = file.options(None)?;
//! let schema = file.load_schema(None)?;
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod naming;
mod options;
mod raw;

pub use error::{Error, Result};
pub use file::{CONFIG_FILE, ConfigFile, load_schema, parse_schema};
pub use naming::NamingStyle;
pub use options::{GenerationOptions, keys, parse_bool, resolve_output};
pub use raw::RawOptions;
