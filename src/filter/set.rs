//! Applied filter set
//!
//! Ordered collection of every active filter, genomic and otherwise.
//! `propose` enforces the two global invariants before anything is
//! appended: identities are unique across the whole set, and at most one
//! genomic filter is active at a time. Conflicts leave the set untouched.

use super::{AppliedFilter, FilterKind, GenomicFilter};
use log::{debug, warn};
use thiserror::Error;

/// Why a proposed filter was rejected. Both cases are recoverable; the
/// caller decides how to surface them (see the session module).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    /// A filter with the same identity is already applied.
    #[error("Filter already applied: {identity}")]
    Duplicate { identity: String },

    /// A different genomic filter occupies the single genomic slot.
    #[error("A genomic filter is already active: {existing}")]
    GenomicSlotOccupied { existing: String },
}

/// Insertion-ordered set of active filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedFilterSet {
    filters: Vec<AppliedFilter>,
}

impl AppliedFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Propose adding a filter.
    ///
    /// On conflict the set is unchanged and the caller gets the reason.
    /// The duplicate check runs before the genomic-slot check, so
    /// resubmitting an already-applied genomic filter reports `Duplicate`.
    pub fn propose(&mut self, filter: impl Into<AppliedFilter>) -> Result<(), Conflict> {
        let filter = filter.into();

        if self.filters.iter().any(|f| f.identity() == filter.identity()) {
            warn!("duplicate filter blocked: {}", filter.identity());
            return Err(Conflict::Duplicate {
                identity: filter.identity().to_string(),
            });
        }

        if filter.kind() == FilterKind::Genomic {
            if let Some(existing) = self.genomic() {
                warn!(
                    "second genomic filter blocked: {} (active: {})",
                    filter.identity(),
                    existing.identity()
                );
                return Err(Conflict::GenomicSlotOccupied {
                    existing: existing.identity().to_string(),
                });
            }
        }

        debug!("filter applied: {}", filter.identity());
        self.filters.push(filter);
        Ok(())
    }

    /// Remove a filter by identity. Removing an absent identity is a no-op;
    /// returns whether anything was removed. Removing a genomic filter
    /// frees the genomic slot.
    pub fn remove(&mut self, identity: &str) -> bool {
        let before = self.filters.len();
        self.filters.retain(|f| f.identity() != identity);
        before != self.filters.len()
    }

    /// The active genomic filter, if any.
    pub fn genomic(&self) -> Option<&GenomicFilter> {
        self.filters.iter().find_map(AppliedFilter::as_genomic)
    }

    /// All filters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AppliedFilter> {
        self.filters.iter()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Whether an identity is present.
    pub fn contains(&self, identity: &str) -> bool {
        self.filters.iter().any(|f| f.identity() == identity)
    }
}
