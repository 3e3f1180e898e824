//! Field format checks
//!
//! Each format validates a single trimmed field value and produces a
//! format-specific message on failure. Patterns live behind `Lazy` statics
//! so they compile once per process.

use once_cell::sync::Lazy;
use regex::Regex;

/// Known reference assemblies the Beacon API accepts.
pub const ASSEMBLIES: [&str; 3] = ["GRCh38", "GRCh37", "NCBI36"];

/// Beacon variation types offered by the UI.
pub const VARIATION_TYPES: [&str; 9] = [
    "SNP",
    "DEL",
    "DUP",
    "INS",
    "INV",
    "CNV",
    "DUP:TANDEM",
    "DEL:ME",
    "INS:ME",
];

/// Chromosome token: 1-22, X, Y, M or MT, optionally prefixed with "chr".
static CHROMOSOME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(chr)?(1[0-9]|2[0-2]|[1-9]|X|Y|MT?)$").unwrap()
});

/// Nucleotide strings: IUPAC bases we pass through to the API.
static BASES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?i)[ACGTUN]+$").unwrap());

/// Amino acid: one-letter code or three-letter code (e.g. V or Val).
static AMINO_ACID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([ACDEFGHIKLMNPQRSTVWY*]|[A-Z][a-z]{2})$").unwrap()
});

/// Gene symbols: HGNC-style tokens.
static GENE_SYMBOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").unwrap());

/// Basic HGVS shape: accession, separator, coordinate system, description.
/// Versionless accessions are accepted; the API performs full parsing.
static HGVS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,4}_?\d+(\.\d+)?:[cgmnopr]\..+$").unwrap());

/// The format a field value must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Enumerated reference assembly (GRCh38, GRCh37, NCBI36).
    Assembly,
    /// Chromosome token (1-22, X, Y, MT), optional "chr" prefix.
    Chromosome,
    /// Non-negative integer coordinate or length.
    Position,
    /// Nucleotide sequence (ACGTUN).
    Bases,
    /// Amino acid code, one-letter or three-letter.
    AminoAcid,
    /// Gene symbol token.
    GeneSymbol,
    /// Enumerated Beacon variation type.
    VariationType,
    /// HGVS shorthand expression.
    Hgvs,
}

impl FieldFormat {
    /// Check a trimmed, non-empty value against this format.
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            FieldFormat::Assembly => {
                if ASSEMBLIES.iter().any(|a| a.eq_ignore_ascii_case(value)) {
                    Ok(())
                } else {
                    Err(format!(
                        "must be one of {}",
                        ASSEMBLIES.join(", ")
                    ))
                }
            }
            FieldFormat::Chromosome => {
                if CHROMOSOME.is_match(value) {
                    Ok(())
                } else {
                    Err("must be 1-22, X, Y, or MT".to_string())
                }
            }
            FieldFormat::Position => match value.parse::<u64>() {
                Ok(_) => Ok(()),
                Err(_) => Err("must be a non-negative whole number".to_string()),
            },
            FieldFormat::Bases => {
                if BASES.is_match(value) {
                    Ok(())
                } else {
                    Err("must contain only the bases A, C, G, T, U, or N".to_string())
                }
            }
            FieldFormat::AminoAcid => {
                if AMINO_ACID.is_match(value) {
                    Ok(())
                } else {
                    Err("must be a one-letter or three-letter amino acid code".to_string())
                }
            }
            FieldFormat::GeneSymbol => {
                if GENE_SYMBOL.is_match(value) {
                    Ok(())
                } else {
                    Err("must be a valid gene symbol".to_string())
                }
            }
            FieldFormat::VariationType => {
                if VARIATION_TYPES.iter().any(|t| t.eq_ignore_ascii_case(value)) {
                    Ok(())
                } else {
                    Err(format!(
                        "must be one of {}",
                        VARIATION_TYPES.join(", ")
                    ))
                }
            }
            FieldFormat::Hgvs => {
                if HGVS.is_match(value) {
                    Ok(())
                } else {
                    Err("must be a valid HGVS expression (e.g. NC_000001.11:g.1234A>T)"
                        .to_string())
                }
            }
        }
    }
}
