//! Field schema resolver
//!
//! For each query shape this module yields the validation schema: which
//! fields exist, which are required, what format each must satisfy, and the
//! cross-field ordering constraints. Schemas are composed from shared
//! fragments so the amino-acid and variant-length rules are written once.

pub mod formats;

pub use formats::FieldFormat;

use crate::fields::{ExclusiveGroup, Field};
use crate::shape::QueryShape;

/// Validation rule for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub format: FieldFormat,
    /// Ordering constraint: this field must not precede the named one.
    /// Checked only when both sides are present and well-formed.
    pub not_before: Option<Field>,
}

impl FieldRule {
    const fn required(field: Field, format: FieldFormat) -> Self {
        Self {
            field,
            required: true,
            format,
            not_before: None,
        }
    }

    const fn optional(field: Field, format: FieldFormat) -> Self {
        Self {
            field,
            required: false,
            format,
            not_before: None,
        }
    }

    const fn after(mut self, other: Field) -> Self {
        self.not_before = Some(other);
        self
    }
}

/// The resolved validation schema for one query shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationSchema {
    rules: Vec<FieldRule>,
    /// Fields that are all-or-none: once any of them is populated, every
    /// one of them is required (the amino-acid change triple).
    all_or_none: &'static [Field],
}

impl ValidationSchema {
    /// Rule for a field, if the schema knows the field at all.
    pub fn rule_for(&self, field: Field) -> Option<&FieldRule> {
        self.rules.iter().find(|r| r.field == field)
    }

    /// All rules in schema order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// The all-or-none field group, empty when the shape has none.
    pub fn all_or_none(&self) -> &'static [Field] {
        self.all_or_none
    }
}

/// Shared fragment: the optional amino-acid change triple.
fn amino_acid_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::optional(Field::RefAa, FieldFormat::AminoAcid),
        FieldRule::optional(Field::AaPosition, FieldFormat::Position),
        FieldRule::optional(Field::AltAa, FieldFormat::AminoAcid),
    ]
}

/// Shared fragment: optional variant length bounds, max not below min.
fn variant_length_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::optional(Field::MinVariantLength, FieldFormat::Position),
        FieldRule::optional(Field::MaxVariantLength, FieldFormat::Position)
            .after(Field::MinVariantLength),
    ]
}

/// Shared fragment: the optional variation group a positional shape accepts
/// alongside its coordinates.
fn variation_group_rules() -> Vec<FieldRule> {
    let mut rules = vec![
        FieldRule::optional(Field::VariationType, FieldFormat::VariationType),
        FieldRule::optional(Field::AlternateBases, FieldFormat::Bases),
        FieldRule::optional(Field::RefBases, FieldFormat::Bases),
        FieldRule::optional(Field::AltBases, FieldFormat::Bases),
    ];
    rules.extend(amino_acid_rules());
    rules.extend(variant_length_rules());
    rules
}

const AMINO_ACID_TRIPLE: &[Field] = &[Field::RefAa, Field::AaPosition, Field::AltAa];

/// Resolve the validation schema for a shape.
///
/// Totality is enforced by the closed enum: every shape has a schema by
/// construction, so resolution cannot fail at runtime.
pub fn schema_for(shape: QueryShape) -> ValidationSchema {
    match shape {
        QueryShape::SequenceQuery => ValidationSchema {
            rules: vec![
                FieldRule::required(Field::AssemblyId, FieldFormat::Assembly),
                FieldRule::required(Field::Chromosome, FieldFormat::Chromosome),
                FieldRule::required(Field::Start, FieldFormat::Position),
                FieldRule::required(Field::RefBases, FieldFormat::Bases),
                FieldRule::required(Field::AlternateBases, FieldFormat::Bases),
            ],
            all_or_none: &[],
        },
        QueryShape::GeneId => {
            let mut rules = vec![FieldRule::required(Field::GeneId, FieldFormat::GeneSymbol)];
            rules.extend(variation_group_rules());
            ValidationSchema {
                rules,
                all_or_none: AMINO_ACID_TRIPLE,
            }
        }
        QueryShape::RangeQuery => {
            let mut rules = vec![
                FieldRule::required(Field::AssemblyId, FieldFormat::Assembly),
                FieldRule::required(Field::Chromosome, FieldFormat::Chromosome),
                FieldRule::required(Field::Start, FieldFormat::Position),
                FieldRule::optional(Field::End, FieldFormat::Position).after(Field::Start),
            ];
            rules.extend(variation_group_rules());
            ValidationSchema {
                rules,
                all_or_none: AMINO_ACID_TRIPLE,
            }
        }
        QueryShape::BracketQuery => ValidationSchema {
            rules: vec![
                FieldRule::required(Field::AssemblyId, FieldFormat::Assembly),
                FieldRule::required(Field::Chromosome, FieldFormat::Chromosome),
                FieldRule::required(Field::StartMin, FieldFormat::Position),
                FieldRule::required(Field::StartMax, FieldFormat::Position)
                    .after(Field::StartMin),
                FieldRule::required(Field::EndMin, FieldFormat::Position),
                FieldRule::required(Field::EndMax, FieldFormat::Position).after(Field::EndMin),
            ],
            all_or_none: &[],
        },
        QueryShape::HgvsQuery => ValidationSchema {
            rules: vec![FieldRule::required(Field::HgvsShortForm, FieldFormat::Hgvs)],
            all_or_none: &[],
        },
    }
}

/// Exclusive groups applicable to a shape.
///
/// Every shape shares the global groups except SequenceQuery, which may
/// combine fields freely and returns no groups at all.
pub fn exclusive_groups_for(shape: QueryShape) -> &'static [ExclusiveGroup] {
    match shape {
        QueryShape::SequenceQuery => &[],
        _ => &ExclusiveGroup::ALL,
    }
}
