//! A generic test template for Rust crates. The library half is
//! placeholder surface (small, obvious helpers) so the template tests in
//! `tests/sample.rs` have a real module to import and exercise; replace it
//! with your own code and keep the test shapes.

pub mod error;
pub mod fixtures;
pub mod prelude;
pub mod tasks;
pub mod utils;

pub use crate::error::TemplateError;
pub use crate::fixtures::SampleData;

#[cfg(feature = "serde")]
pub use serde::{Deserialize, Serialize};
