//! NestJS DTO synthesizer for the nestdto generator.
//!
//! Renders one TypeScript module per DTO from a normalized Prisma-style
//! schema. Plug [`NestDtoSynthesizer`] into a
//! [`Pipeline`](nestdto_codegen::Pipeline) to write the files.
//!
//! ```ignore
//! use std::sync::Arc;
//! use nestdto_codegen::{GenerateRequest, Pipeline};
//! use nestdto_typescript::NestDtoSynthesizer;
//!
//! let pipeline = Pipeline::new(Arc::new(NestDtoSynthesizer::new()));
//! let report = pipeline.run(GenerateRequest::new(options, schema)).await?;
//! ```
//!
//! # Generated Output
//!
//! For a model `UserProfile` with the default `camel` file naming style:
//!
//! - `connectUserProfile.dto.ts` - `ConnectUserProfileDto`, ids and unique fields
//! - `createUserProfile.dto.ts` - `CreateUserProfileDto`, writable fields and relation inputs
//! - `updateUserProfile.dto.ts` - `UpdateUserProfileDto`, same fields, all optional
//! - `userProfile.entity.ts` - `UserProfile`, the full record

mod code_file;
mod layout;
mod naming;
mod synthesizer;
mod type_mapper;

pub mod ast;
pub mod files;

pub use code_file::CodeFile;
pub use layout::{Layout, import_specifier};
pub use naming::{DtoKind, Naming};
pub use synthesizer::NestDtoSynthesizer;
pub use type_mapper::{PRISMA_CLIENT, TypeScriptTypeMapper};
