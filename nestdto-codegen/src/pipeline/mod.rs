//! Generation pipeline.
//!
//! A run moves through fixed stages:
//!
//! 1. [`GenerateRequest::normalize`] validates raw options
//! 2. the [`DtoSynthesizer`](crate::synthesis::DtoSynthesizer) turns the schema into file specs
//! 3. re-export barrels are aggregated when `reExport` is on
//! 4. formatter configuration is resolved once
//! 5. every file is formatted and written concurrently
//!
//! Steps 1 to 4 never touch the output directory, so an invalid option or a
//! synthesis error leaves it untouched.

mod report;
mod request;
mod runner;
mod stage;

pub use report::{GenerateReport, Plan};
pub use request::GenerateRequest;
pub use runner::Pipeline;
pub use stage::Stage;
