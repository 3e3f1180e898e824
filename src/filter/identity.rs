//! Filter identity and label derivation
//!
//! Identity strings detect duplicate filters; labels are what the filter
//! chips render. Both derive from the built params in their fixed per-shape
//! mapping order, never from user entry order, so equivalent field sets
//! always produce the same identity.

use crate::params::QueryParams;

/// Display names for API parameter keys. Unknown keys fall back to the raw
/// key so new parameters degrade gracefully instead of panicking.
fn display_name(key: &str) -> &str {
    match key {
        "assemblyId" => "Assembly ID",
        "referenceName" => "Chromosome",
        "start" => "Start",
        "end" => "End",
        "referenceBases" => "Reference bases",
        "alternateBases" => "Alternate bases",
        "geneId" => "Gene ID",
        "refAa" => "Reference AA",
        "aaPosition" => "AA position",
        "altAa" => "Alternate AA",
        "variantType" => "Variation type",
        "variantMinLength" => "Min variant length",
        "variantMaxLength" => "Max variant length",
        "genomicAlleleShortForm" => "HGVS",
        other => other,
    }
}

/// Derive the stable identity and the human-readable label for built params.
pub fn derive(params: &QueryParams) -> (String, String) {
    let identity_body = params
        .entries()
        .iter()
        .map(|(key, value)| format!("{}:{}", key, value.render()))
        .collect::<Vec<_>>()
        .join("-");
    let identity = format!("genomic-{}-{}", params.shape(), identity_body);

    let label = params
        .entries()
        .iter()
        .map(|(key, value)| format!("{}: {}", display_name(key), value.render()))
        .collect::<Vec<_>>()
        .join(" | ");

    (identity, label)
}
