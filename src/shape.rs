//! Genomic query shapes
//!
//! The closed set of query kinds the builder supports. The selected shape
//! drives which validation schema and parameter mapping apply; everything
//! downstream dispatches on this enum rather than on display strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed genomic query kinds.
///
/// The variant order is the canonical presentation order (the order the
/// host configuration enumerates them in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryShape {
    /// Exact sequence change at a known position.
    SequenceQuery,
    /// Lookup by gene symbol, optionally narrowed by a variation group.
    GeneId,
    /// Coordinate range with an exact start and optional end.
    RangeQuery,
    /// Coordinate bracket with min/max bounds on both start and end.
    BracketQuery,
    /// HGVS shorthand, passed through verbatim.
    HgvsQuery,
}

impl QueryShape {
    /// All shapes in canonical order.
    pub const ALL: [QueryShape; 5] = [
        QueryShape::SequenceQuery,
        QueryShape::GeneId,
        QueryShape::RangeQuery,
        QueryShape::BracketQuery,
        QueryShape::HgvsQuery,
    ];

    /// Identity token used in filter identities (e.g. `"RangeQuery"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryShape::SequenceQuery => "SequenceQuery",
            QueryShape::GeneId => "GeneId",
            QueryShape::RangeQuery => "RangeQuery",
            QueryShape::BracketQuery => "BracketQuery",
            QueryShape::HgvsQuery => "HgvsQuery",
        }
    }

    /// Human-readable label shown by the UI for this shape.
    pub fn display_label(&self) -> &'static str {
        match self {
            QueryShape::SequenceQuery => "Sequence Query",
            QueryShape::GeneId => "Gene ID",
            QueryShape::RangeQuery => "Range Query",
            QueryShape::BracketQuery => "Bracket Query",
            QueryShape::HgvsQuery => "Genomic Allele Query (HGVS)",
        }
    }
}

impl fmt::Display for QueryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        assert_eq!(QueryShape::ALL[0], QueryShape::SequenceQuery);
        assert_eq!(QueryShape::ALL[4], QueryShape::HgvsQuery);
    }

    #[test]
    fn test_identity_token() {
        assert_eq!(QueryShape::RangeQuery.to_string(), "RangeQuery");
        assert_eq!(QueryShape::HgvsQuery.as_str(), "HgvsQuery");
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(QueryShape::GeneId.display_label(), "Gene ID");
        assert_eq!(
            QueryShape::HgvsQuery.display_label(),
            "Genomic Allele Query (HGVS)"
        );
    }
}
