//! TypeScript AST builders for classes and imports.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod class;
mod imports;

pub use class::{Class, Property};
pub use imports::{Import, ImportCollector};
