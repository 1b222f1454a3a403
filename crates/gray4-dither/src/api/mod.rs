//! Public API for the gray4-dither crate.
//!
//! This module provides the high-level API: [`Gray4Pipeline`] builder and
//! [`PipelineError`] unified error type.

mod builder;
mod error;

pub use builder::{Gray4Pipeline, Rotation};
pub use error::PipelineError;
