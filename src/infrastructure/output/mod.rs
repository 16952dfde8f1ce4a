//! Writers for unification results.
//!
//! # Writers
//!
//! - [`JsonOutputWriter`] - Pretty-printed JSON files in an output directory

pub mod json_output_writer;

pub use json_output_writer::{JsonOutputWriter, WrittenOutputs};
