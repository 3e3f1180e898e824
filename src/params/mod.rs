//! API-shaped query parameters
//!
//! [`QueryParams`] is the normalized object sent to the Beacon search API:
//! flat scalars for point values, one-element arrays for exact coordinates,
//! two-element arrays for bracket bounds. Entries keep their fixed per-shape
//! insertion order, which is also the order filter identities derive from.

pub mod builder;
pub mod rehydrate;

pub use builder::build;
pub use rehydrate::{rehydrate, rehydrate_params};

use crate::shape::QueryShape;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A single normalized parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Scalar string value.
    Text(String),
    /// Scalar numeric value.
    Pos(u64),
    /// Numeric array (one element for exact coordinates, two for brackets).
    PosList(Vec<u64>),
}

impl ParamValue {
    /// Deterministic string rendering used by identity derivation.
    pub fn render(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Pos(n) => n.to_string(),
            ParamValue::PosList(ns) => ns
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// The built, immutable query-parameter object for one genomic filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    shape: QueryShape,
    entries: Vec<(&'static str, ParamValue)>,
}

impl QueryParams {
    pub(crate) fn new(shape: QueryShape, entries: Vec<(&'static str, ParamValue)>) -> Self {
        Self { shape, entries }
    }

    /// The shape this object was built from.
    pub fn shape(&self) -> QueryShape {
        self.shape
    }

    /// Entries in their fixed per-shape order.
    pub fn entries(&self) -> &[(&'static str, ParamValue)] {
        &self.entries
    }

    /// Value for an API parameter name, if present.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was mapped (cannot happen for a validated build).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
