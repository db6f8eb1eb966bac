//! Normalized data model types for the nestdto generator.
//!
//! These types describe the entities, fields, relations and enumerations the
//! DTO synthesizer works from. They deserialize from a JSON document shaped
//! like a Prisma DMMF datamodel:
//!
//! ```text
//! schema.json → Schema (this crate) → DtoSynthesizer → FileSpec[]
//! ```
//!
//! The IR is deliberately free of any generation concern; naming, layout and
//! rendering decisions live in the synthesizer.

mod field;
mod schema;

pub use field::{Field, FieldKind, ScalarType};
pub use schema::{Enum, EnumValue, Model, Schema};
