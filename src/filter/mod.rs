//! Applied filters
//!
//! The filter objects handed to the host's active-filter collection, their
//! identity/label derivation, and the applied-filter set with its two
//! global invariants (unique identities, at most one genomic member).

pub mod identity;
pub mod set;

pub use identity::derive;
pub use set::{AppliedFilterSet, Conflict};

use crate::params::QueryParams;
use crate::shape::QueryShape;
use serde::Serialize;

/// Scope tag the host uses to route genomic filters back to the builder.
pub const GENOMIC_SCOPE: &str = "genomicQueryBuilder";

/// The kind of an applied filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Genomic,
    Term,
}

/// A filter produced by a successful builder submission. Immutable; only
/// explicit removal from the applied set destroys it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenomicFilter {
    identity: String,
    label: String,
    shape: QueryShape,
    scope: &'static str,
    params: QueryParams,
}

impl GenomicFilter {
    /// Build a filter from query parameters, deriving identity and label.
    pub fn from_params(params: QueryParams) -> Self {
        let (identity, label) = identity::derive(&params);
        Self {
            identity,
            label,
            shape: params.shape(),
            scope: GENOMIC_SCOPE,
            params,
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> QueryShape {
        self.shape
    }

    pub fn scope(&self) -> &str {
        self.scope
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}

/// A non-genomic filter (ontology/filtering terms) the set also holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermFilter {
    pub identity: String,
    pub label: String,
    pub scope: String,
}

impl TermFilter {
    pub fn new(
        identity: impl Into<String>,
        label: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            label: label.into(),
            scope: scope.into(),
        }
    }
}

/// Any filter the applied set can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AppliedFilter {
    Genomic(GenomicFilter),
    Term(TermFilter),
}

impl AppliedFilter {
    /// The identity string used for duplicate detection.
    pub fn identity(&self) -> &str {
        match self {
            AppliedFilter::Genomic(f) => f.identity(),
            AppliedFilter::Term(f) => &f.identity,
        }
    }

    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            AppliedFilter::Genomic(f) => f.label(),
            AppliedFilter::Term(f) => &f.label,
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            AppliedFilter::Genomic(_) => FilterKind::Genomic,
            AppliedFilter::Term(_) => FilterKind::Term,
        }
    }

    /// The genomic payload, when this is a genomic filter.
    pub fn as_genomic(&self) -> Option<&GenomicFilter> {
        match self {
            AppliedFilter::Genomic(f) => Some(f),
            AppliedFilter::Term(_) => None,
        }
    }
}

impl From<GenomicFilter> for AppliedFilter {
    fn from(f: GenomicFilter) -> Self {
        AppliedFilter::Genomic(f)
    }
}

impl From<TermFilter> for AppliedFilter {
    fn from(f: TermFilter) -> Self {
        AppliedFilter::Term(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{ExclusiveGroup, Field, FieldSet};
    use crate::params::build;

    #[test]
    fn test_genomic_filter_fields() {
        let mut fields = FieldSet::new();
        fields.set(Field::HgvsShortForm, "NC_000001.11:g.1234A>T");
        let params = build(
            QueryShape::HgvsQuery,
            &fields,
            ExclusiveGroup::VariationType,
        )
        .unwrap();
        let filter = GenomicFilter::from_params(params);

        assert_eq!(filter.shape(), QueryShape::HgvsQuery);
        assert_eq!(filter.scope(), GENOMIC_SCOPE);
        assert!(filter.identity().starts_with("genomic-HgvsQuery-"));

        let applied: AppliedFilter = filter.into();
        assert_eq!(applied.kind(), FilterKind::Genomic);
        assert!(applied.as_genomic().is_some());
    }

    #[test]
    fn test_term_filter() {
        let filter: AppliedFilter = TermFilter::new("hpo-123", "HP:0000123", "filteringTerms").into();
        assert_eq!(filter.identity(), "hpo-123");
        assert_eq!(filter.kind(), FilterKind::Term);
        assert!(filter.as_genomic().is_none());
    }
}
