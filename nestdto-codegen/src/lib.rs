//! Generation pipeline for the nestdto generator.
//!
//! This crate owns everything between normalized options and files on disk:
//! the synthesizer and formatter seams, re-export aggregation, and the
//! concurrent writer.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Stage orchestration ([`Pipeline`], [`GenerateRequest`], [`GenerateReport`])
//! - [`synthesis`] - The [`DtoSynthesizer`] seam
//! - [`aggregate`] - Re-export barrels ([`IndexCollection`])
//! - [`format`] - The [`Formatter`] seam and the prettier CLI formatter
//! - [`writer`] - Concurrent write-out
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`testing`] - Test doubles (feature-gated)

pub mod aggregate;
pub mod builder;
mod error;
pub mod format;
pub mod pipeline;
pub mod synthesis;
pub mod writer;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use aggregate::{IndexCollection, collect_barrels};
pub use error::{BoxError, GenerateError, Result};
pub use format::{Formatter, FormatterConfig, Formatting, PrettierCli};
pub use pipeline::{GenerateReport, GenerateRequest, Pipeline, Plan, Stage};
pub use synthesis::{DtoSynthesizer, SynthesisRequest};
