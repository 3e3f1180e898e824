//! Query parameter builder
//!
//! Transforms a validated field set plus the active exclusive group into the
//! API-shaped [`QueryParams`]. Each shape has a fixed mapping table from
//! internal fields to API parameter names; the table order is the identity
//! order. Failures here mean the validation engine let a bad value through,
//! so they surface as invariant violations rather than user errors.

use super::{ParamValue, QueryParams};
use crate::error::QueryBuilderError;
use crate::fields::{ExclusiveGroup, Field, FieldSet};
use crate::shape::QueryShape;
use crate::Result;

/// How an internal field maps onto an API parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mapping {
    /// Trimmed scalar string.
    Text(Field, &'static str),
    /// Untouched scalar string (HGVS short forms keep their exact bytes).
    Verbatim(Field, &'static str),
    /// Trimmed and upper-cased chromosome token.
    Chromosome(Field, &'static str),
    /// Scalar number.
    Pos(Field, &'static str),
    /// One-element numeric array.
    PosOne(Field, &'static str),
    /// Two-element numeric array from a min/max field pair.
    PosPair(Field, Field, &'static str),
}

impl Mapping {
    fn key(&self) -> &'static str {
        match self {
            Mapping::Text(_, k)
            | Mapping::Verbatim(_, k)
            | Mapping::Chromosome(_, k)
            | Mapping::Pos(_, k)
            | Mapping::PosOne(_, k)
            | Mapping::PosPair(_, _, k) => k,
        }
    }

    /// The field whose exclusive-group membership gates this mapping.
    fn field(&self) -> Field {
        match self {
            Mapping::Text(f, _)
            | Mapping::Verbatim(f, _)
            | Mapping::Chromosome(f, _)
            | Mapping::Pos(f, _)
            | Mapping::PosOne(f, _)
            | Mapping::PosPair(f, _, _) => *f,
        }
    }
}

/// Fixed per-shape mapping table. Table order is the identity order.
pub(crate) fn mapping_for(shape: QueryShape) -> &'static [Mapping] {
    match shape {
        QueryShape::SequenceQuery => &[
            Mapping::Text(Field::AssemblyId, "assemblyId"),
            Mapping::Chromosome(Field::Chromosome, "referenceName"),
            Mapping::PosOne(Field::Start, "start"),
            Mapping::Text(Field::RefBases, "referenceBases"),
            Mapping::Text(Field::AlternateBases, "alternateBases"),
        ],
        QueryShape::GeneId => &[
            Mapping::Text(Field::GeneId, "geneId"),
            Mapping::Text(Field::RefAa, "refAa"),
            Mapping::Text(Field::AaPosition, "aaPosition"),
            Mapping::Text(Field::AltAa, "altAa"),
            Mapping::Text(Field::VariationType, "variantType"),
            Mapping::Text(Field::AlternateBases, "alternateBases"),
            Mapping::Text(Field::RefBases, "referenceBases"),
            Mapping::Text(Field::AltBases, "alternateBases"),
            Mapping::Pos(Field::MinVariantLength, "variantMinLength"),
            Mapping::Pos(Field::MaxVariantLength, "variantMaxLength"),
        ],
        QueryShape::RangeQuery => &[
            Mapping::Text(Field::AssemblyId, "assemblyId"),
            Mapping::Chromosome(Field::Chromosome, "referenceName"),
            Mapping::PosOne(Field::Start, "start"),
            Mapping::PosOne(Field::End, "end"),
            Mapping::Text(Field::VariationType, "variantType"),
            Mapping::Text(Field::AlternateBases, "alternateBases"),
            Mapping::Text(Field::RefBases, "referenceBases"),
            Mapping::Text(Field::AltBases, "alternateBases"),
            Mapping::Text(Field::RefAa, "refAa"),
            Mapping::Text(Field::AaPosition, "aaPosition"),
            Mapping::Text(Field::AltAa, "altAa"),
            Mapping::Pos(Field::MinVariantLength, "variantMinLength"),
            Mapping::Pos(Field::MaxVariantLength, "variantMaxLength"),
        ],
        QueryShape::BracketQuery => &[
            Mapping::Text(Field::AssemblyId, "assemblyId"),
            Mapping::Chromosome(Field::Chromosome, "referenceName"),
            Mapping::PosPair(Field::StartMin, Field::StartMax, "start"),
            Mapping::PosPair(Field::EndMin, Field::EndMax, "end"),
        ],
        QueryShape::HgvsQuery => &[Mapping::Verbatim(
            Field::HgvsShortForm,
            "genomicAlleleShortForm",
        )],
    }
}

fn parse_pos(shape: QueryShape, field: Field, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| {
        QueryBuilderError::invariant(shape, field, value, "expected a validated position")
    })
}

/// Build the API-shaped parameters from a validated field set.
///
/// Empty fields are dropped; fields in a declared exclusive group are kept
/// only when their group is the active one (sequence queries are exempt and
/// never group-filter). Chromosome tokens are trimmed and upper-cased; HGVS
/// short forms pass through verbatim; everything else is trimmed.
pub fn build(
    shape: QueryShape,
    fields: &FieldSet,
    active_group: ExclusiveGroup,
) -> Result<QueryParams> {
    let mut entries: Vec<(&'static str, ParamValue)> = Vec::new();

    for mapping in mapping_for(shape) {
        if let Some(group) = mapping.field().exclusive_group() {
            if shape != QueryShape::SequenceQuery && group != active_group {
                continue;
            }
        }
        // Two fields of one group may map to the same API key; first wins.
        if entries.iter().any(|(k, _)| *k == mapping.key()) {
            continue;
        }

        let value = match mapping {
            Mapping::Text(field, _) => {
                let raw = fields.get(*field).trim();
                if raw.is_empty() {
                    continue;
                }
                ParamValue::Text(raw.to_string())
            }
            Mapping::Verbatim(field, _) => {
                let raw = fields.get(*field);
                if raw.is_empty() {
                    continue;
                }
                ParamValue::Text(raw.to_string())
            }
            Mapping::Chromosome(field, _) => {
                let raw = fields.get(*field).trim();
                if raw.is_empty() {
                    continue;
                }
                ParamValue::Text(raw.to_uppercase())
            }
            Mapping::Pos(field, _) => {
                if fields.is_blank(*field) {
                    continue;
                }
                ParamValue::Pos(parse_pos(shape, *field, fields.get(*field))?)
            }
            Mapping::PosOne(field, _) => {
                if fields.is_blank(*field) {
                    continue;
                }
                ParamValue::PosList(vec![parse_pos(shape, *field, fields.get(*field))?])
            }
            Mapping::PosPair(min, max, _) => {
                if fields.is_blank(*min) && fields.is_blank(*max) {
                    continue;
                }
                if fields.is_blank(*min) || fields.is_blank(*max) {
                    let missing = if fields.is_blank(*min) { *min } else { *max };
                    return Err(QueryBuilderError::invariant(
                        shape,
                        missing,
                        "",
                        "bracket bound missing after validation",
                    ));
                }
                ParamValue::PosList(vec![
                    parse_pos(shape, *min, fields.get(*min))?,
                    parse_pos(shape, *max, fields.get(*max))?,
                ])
            }
        };

        entries.push((mapping.key(), value));
    }

    Ok(QueryParams::new(shape, entries))
}
