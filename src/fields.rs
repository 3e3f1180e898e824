//! Form field universe and edit-session field values
//!
//! The builder works over a fixed universe of input fields. Fields are a
//! closed enum so schema rules, mapping tables, and exclusive-group
//! membership dispatch on variants instead of field-name strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A form input field the builder knows about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Field {
    GeneId,
    AssemblyId,
    Chromosome,
    Start,
    End,
    StartMin,
    StartMax,
    EndMin,
    EndMax,
    RefBases,
    AltBases,
    AlternateBases,
    RefAa,
    AltAa,
    AaPosition,
    VariationType,
    MinVariantLength,
    MaxVariantLength,
    HgvsShortForm,
}

impl Field {
    /// Every field in the universe.
    pub const ALL: [Field; 19] = [
        Field::GeneId,
        Field::AssemblyId,
        Field::Chromosome,
        Field::Start,
        Field::End,
        Field::StartMin,
        Field::StartMax,
        Field::EndMin,
        Field::EndMax,
        Field::RefBases,
        Field::AltBases,
        Field::AlternateBases,
        Field::RefAa,
        Field::AltAa,
        Field::AaPosition,
        Field::VariationType,
        Field::MinVariantLength,
        Field::MaxVariantLength,
        Field::HgvsShortForm,
    ];

    /// Wire name of the field as the form layer knows it.
    pub fn name(&self) -> &'static str {
        match self {
            Field::GeneId => "geneId",
            Field::AssemblyId => "assemblyId",
            Field::Chromosome => "chromosome",
            Field::Start => "start",
            Field::End => "end",
            Field::StartMin => "startMin",
            Field::StartMax => "startMax",
            Field::EndMin => "endMin",
            Field::EndMax => "endMax",
            Field::RefBases => "refBases",
            Field::AltBases => "altBases",
            Field::AlternateBases => "alternateBases",
            Field::RefAa => "refAa",
            Field::AltAa => "altAa",
            Field::AaPosition => "aaPosition",
            Field::VariationType => "variationType",
            Field::MinVariantLength => "minVariantLength",
            Field::MaxVariantLength => "maxVariantLength",
            Field::HgvsShortForm => "hgvsShortForm",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn display_label(&self) -> &'static str {
        match self {
            Field::GeneId => "Gene ID",
            Field::AssemblyId => "Assembly ID",
            Field::Chromosome => "Chromosome",
            Field::Start => "Start",
            Field::End => "End",
            Field::StartMin => "Start min",
            Field::StartMax => "Start max",
            Field::EndMin => "End min",
            Field::EndMax => "End max",
            Field::RefBases => "Reference bases",
            Field::AltBases => "Alternate bases",
            Field::AlternateBases => "Alternate bases",
            Field::RefAa => "Reference amino acid",
            Field::AltAa => "Alternate amino acid",
            Field::AaPosition => "Amino acid position",
            Field::VariationType => "Variation type",
            Field::MinVariantLength => "Min variant length",
            Field::MaxVariantLength => "Max variant length",
            Field::HgvsShortForm => "HGVS short form",
        }
    }

    /// The exclusive group this field belongs to, if any.
    pub fn exclusive_group(&self) -> Option<ExclusiveGroup> {
        match self {
            Field::VariationType => Some(ExclusiveGroup::VariationType),
            Field::AlternateBases | Field::RefBases | Field::AltBases => {
                Some(ExclusiveGroup::AlternateBases)
            }
            Field::RefAa | Field::AltAa | Field::AaPosition => {
                Some(ExclusiveGroup::AminoacidChange)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named partition of the field universe into mutually exclusive sets.
///
/// At most one group's fields survive into a built query; which one is
/// decided by the user's last interaction (the session's active group).
/// Sequence queries are exempt and never group-filter their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExclusiveGroup {
    VariationType,
    AlternateBases,
    AminoacidChange,
}

impl ExclusiveGroup {
    /// All groups, in declaration order.
    pub const ALL: [ExclusiveGroup; 3] = [
        ExclusiveGroup::VariationType,
        ExclusiveGroup::AlternateBases,
        ExclusiveGroup::AminoacidChange,
    ];

    /// Group name as the form layer knows it.
    pub fn name(&self) -> &'static str {
        match self {
            ExclusiveGroup::VariationType => "variationType",
            ExclusiveGroup::AlternateBases => "alternateBases",
            ExclusiveGroup::AminoacidChange => "aminoacidChange",
        }
    }

    /// Member fields of this group. The groups are non-overlapping.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            ExclusiveGroup::VariationType => &[Field::VariationType],
            ExclusiveGroup::AlternateBases => {
                &[Field::AlternateBases, Field::RefBases, Field::AltBases]
            }
            ExclusiveGroup::AminoacidChange => {
                &[Field::RefAa, Field::AltAa, Field::AaPosition]
            }
        }
    }
}

/// Raw field values for one in-progress edit session.
///
/// Every field defaults to empty. The set is replaced whole (never merged)
/// whenever the selected shape changes, so values can never leak between
/// shapes or sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    values: BTreeMap<Field, String>,
}

impl FieldSet {
    /// A field set with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. Setting an empty string clears the field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
        self
    }

    /// Clear a single field.
    pub fn clear(&mut self, field: Field) {
        self.values.remove(&field);
    }

    /// Raw value of a field, empty string if unset.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Whether the field is empty after trimming surrounding whitespace.
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Fields carrying a non-blank value, with their raw values.
    pub fn populated(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(f, v)| (*f, v.as_str()))
    }

    /// True when no field carries a non-blank value.
    pub fn is_empty(&self) -> bool {
        self.populated().next().is_none()
    }
}
