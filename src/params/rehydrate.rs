//! Prefill / rehydration adapter
//!
//! Reconstructs form field values from a previously built filter by
//! inverting a shape's mapping table. Prefill only applies when the stored
//! shape matches the shape the UI currently has selected; a mismatch yields
//! the all-empty field set so fields can never leak across shapes.

use super::builder::{mapping_for, Mapping};
use super::{ParamValue, QueryParams};
use crate::fields::{Field, FieldSet};
use crate::filter::GenomicFilter;
use crate::shape::QueryShape;

fn first_or_render(value: &ParamValue) -> String {
    match value {
        ParamValue::Text(s) => s.clone(),
        ParamValue::Pos(n) => n.to_string(),
        // Scalar internal field fed from a stored array: take the first
        // element.
        ParamValue::PosList(ns) => ns.first().map(u64::to_string).unwrap_or_default(),
    }
}

fn list_element(value: &ParamValue, index: usize) -> Option<String> {
    match value {
        ParamValue::PosList(ns) => ns.get(index).map(u64::to_string),
        ParamValue::Pos(n) if index == 0 => Some(n.to_string()),
        _ => None,
    }
}

/// Rebuild field values for a shape from stored query parameters.
///
/// Returns the all-empty [`FieldSet`] when the parameters were built from a
/// different shape.
pub fn rehydrate_params(shape: QueryShape, params: &QueryParams) -> FieldSet {
    let mut fields = FieldSet::new();
    if params.shape() != shape {
        return fields;
    }

    // A key is consumed by the first mapping entry that reads it, matching
    // the first-wins rule on the build side.
    let mut consumed: Vec<&'static str> = Vec::new();

    for mapping in mapping_for(shape) {
        let key = match mapping {
            Mapping::Text(_, k)
            | Mapping::Verbatim(_, k)
            | Mapping::Chromosome(_, k)
            | Mapping::Pos(_, k)
            | Mapping::PosOne(_, k)
            | Mapping::PosPair(_, _, k) => *k,
        };
        if consumed.contains(&key) {
            continue;
        }
        let Some(value) = params.get(key) else {
            continue;
        };
        consumed.push(key);

        match mapping {
            Mapping::Text(field, _)
            | Mapping::Verbatim(field, _)
            | Mapping::Chromosome(field, _)
            | Mapping::Pos(field, _)
            | Mapping::PosOne(field, _) => {
                set_if_some(&mut fields, *field, Some(first_or_render(value)));
            }
            Mapping::PosPair(min, max, _) => {
                set_if_some(&mut fields, *min, list_element(value, 0));
                set_if_some(&mut fields, *max, list_element(value, 1));
            }
        }
    }

    fields
}

/// Rebuild field values from an applied genomic filter.
pub fn rehydrate(shape: QueryShape, filter: &GenomicFilter) -> FieldSet {
    rehydrate_params(shape, filter.params())
}

fn set_if_some(fields: &mut FieldSet, field: Field, value: Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            fields.set(field, value);
        }
    }
}
