//! Source repository implementations.
//!
//! Concrete implementations of domain repository traits.
//!
//! # Repositories
//!
//! - [`JsonSourceRepository`] - Guest directory and batch files as JSON on disk
//! - [`domain_list_file`] - Newline-delimited domain lists

pub mod domain_list_file;
pub mod json_source_repository;

pub use domain_list_file::{read_domain_list, write_domain_list, write_split_files};
pub use json_source_repository::{JsonSourceRepository, read_enrichment_dir};
