//! Domain layer containing the unification model and logic.
//!
//! Everything here is pure: no I/O, no global state. Inputs arrive already
//! parsed; outputs are plain values.
//!
//! # Architecture
//!
//! - [`entities`] - Input and output data structures
//! - [`repositories`] - Data access trait definitions
//! - [`index`] - Enrichment-by-username and intelligence-by-domain lookups
//! - [`resolver`] - Join-domain selection for one guest
//! - [`merger`] - Unified record construction and completeness flags
//! - [`report`] - Run statistics
//! - [`engine`] - The unification pass
//!
//! # Unification Flow
//!
//! 1. [`index::SourceIndex::build`] indexes enrichment and completed intelligence
//! 2. [`engine::UnificationEngine::run`] walks the guests in order
//! 3. [`resolver::resolve_domain`] picks each guest's join domain
//! 4. [`merger::merge_record`] builds the unified record
//! 5. [`report::ReportBuilder`] accumulates statistics during the same pass

pub mod engine;
pub mod entities;
pub mod index;
pub mod merger;
pub mod report;
pub mod repositories;
pub mod resolver;
