//! Domain normalization and domain-list helpers.
//!
//! - [`domain_normalizer`] - Canonical domain form used by every join
//! - [`domain_list`] - Extract, clean and split flat domain lists

pub mod domain_list;
pub mod domain_normalizer;
