//! beacon-query-builder: genomic query builder core for Beacon front-ends
//!
//! Turns the loose, partially-overlapping fields of a genomic query form
//! into the strict, variant-typed parameter object the Beacon search API
//! expects, with per-shape validation, duplicate detection via stable
//! filter identities, and a single-genomic-slot applied filter set.
//!
//! # Example
//!
//! ```
//! use beacon_query_builder::{
//!     AppliedFilterSet, BuilderSession, Field, QueryShape, QueryTypeRegistry, SubmitOutcome,
//! };
//! use std::time::Instant;
//!
//! let registry = QueryTypeRegistry::all_enabled();
//! let mut session = BuilderSession::new(&registry);
//! session.select_shape(QueryShape::RangeQuery);
//! session.set_field(Field::AssemblyId, "GRCh38");
//! session.set_field(Field::Chromosome, "chr1");
//! session.set_field(Field::Start, "1000");
//! session.set_field(Field::End, "2000");
//! assert!(session.can_submit());
//!
//! let mut filters = AppliedFilterSet::new();
//! let outcome = session.submit(&mut filters, Instant::now()).unwrap();
//! assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));
//! assert!(filters.genomic().is_some());
//! ```

pub mod config;
pub mod error;
pub mod fields;
pub mod filter;
pub mod params;
pub mod registry;
pub mod schema;
pub mod session;
pub mod shape;
pub mod validate;

// Re-export commonly used types
pub use config::QueryTypeFlags;
pub use error::QueryBuilderError;
pub use fields::{ExclusiveGroup, Field, FieldSet};
pub use filter::{AppliedFilter, AppliedFilterSet, Conflict, GenomicFilter, TermFilter};
pub use params::{build, rehydrate, rehydrate_params, ParamValue, QueryParams};
pub use registry::{QueryTypeRegistry, ShapeEntry};
pub use session::{BuilderSession, Notice, ScheduledAction, SubmitOutcome};
pub use shape::QueryShape;
pub use validate::{submission_enabled, validate, ValidationReport};

/// Result type alias for query builder operations
pub type Result<T> = std::result::Result<T, QueryBuilderError>;
