//! Host configuration for enabled query types
//!
//! The host application ships a JSON configuration with per-shape boolean
//! flags under `ui.genomicQueries.genomicQueryTypes`. Only those flags
//! matter to this crate; they feed the query type registry and nothing else.

use crate::error::QueryBuilderError;
use crate::shape::QueryShape;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Per-shape enable flags. All shapes default to enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryTypeFlags {
    pub sequence_query: bool,
    pub gene_id: bool,
    pub range_query: bool,
    pub bracket_query: bool,
    pub hgvs_query: bool,
}

impl Default for QueryTypeFlags {
    fn default() -> Self {
        Self {
            sequence_query: true,
            gene_id: true,
            range_query: true,
            bracket_query: true,
            hgvs_query: true,
        }
    }
}

impl QueryTypeFlags {
    /// Whether a given shape is switched on.
    pub fn is_enabled(&self, shape: QueryShape) -> bool {
        match shape {
            QueryShape::SequenceQuery => self.sequence_query,
            QueryShape::GeneId => self.gene_id,
            QueryShape::RangeQuery => self.range_query,
            QueryShape::BracketQuery => self.bracket_query,
            QueryShape::HgvsQuery => self.hgvs_query,
        }
    }

    /// Parse the flags out of a full host configuration document.
    ///
    /// Accepts the whole config JSON; missing sections fall back to all
    /// shapes enabled.
    pub fn from_host_config(json: &str) -> Result<Self> {
        let config: HostConfig =
            serde_json::from_str(json).map_err(|e| QueryBuilderError::config(e.to_string()))?;
        Ok(config
            .ui
            .and_then(|ui| ui.genomic_queries)
            .map(|g| g.genomic_query_types)
            .unwrap_or_default())
    }
}

/// Minimal mirror of the host config document, only the path we read.
#[derive(Debug, Default, Deserialize)]
struct HostConfig {
    ui: Option<UiSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UiSection {
    genomic_queries: Option<GenomicQueriesSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenomicQueriesSection {
    #[serde(default)]
    genomic_query_types: QueryTypeFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_all_enabled() {
        let flags = QueryTypeFlags::default();
        for shape in QueryShape::ALL {
            assert!(flags.is_enabled(shape));
        }
    }

    #[test]
    fn test_from_host_config() {
        let json = r#"{
            "ui": {
                "genomicQueries": {
                    "genomicQueryTypes": {
                        "sequenceQuery": true,
                        "geneId": true,
                        "rangeQuery": false,
                        "bracketQuery": false,
                        "hgvsQuery": true
                    }
                }
            }
        }"#;
        let flags = QueryTypeFlags::from_host_config(json).unwrap();
        assert!(flags.is_enabled(QueryShape::SequenceQuery));
        assert!(!flags.is_enabled(QueryShape::RangeQuery));
        assert!(!flags.is_enabled(QueryShape::BracketQuery));
        assert!(flags.is_enabled(QueryShape::HgvsQuery));
    }

    #[test]
    fn test_missing_section_defaults() {
        let flags = QueryTypeFlags::from_host_config(r#"{"ui": {}}"#).unwrap();
        assert!(flags.is_enabled(QueryShape::BracketQuery));
    }

    #[test]
    fn test_partial_flags_default_true() {
        let json = r#"{
            "ui": {
                "genomicQueries": {
                    "genomicQueryTypes": { "geneId": false }
                }
            }
        }"#;
        let flags = QueryTypeFlags::from_host_config(json).unwrap();
        assert!(!flags.is_enabled(QueryShape::GeneId));
        assert!(flags.is_enabled(QueryShape::SequenceQuery));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = QueryTypeFlags::from_host_config("not json").unwrap_err();
        assert!(matches!(err, QueryBuilderError::Config { .. }));
    }
}
