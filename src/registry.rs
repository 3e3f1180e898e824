//! Query type registry
//!
//! Static catalog of the query shapes the host has enabled, in canonical
//! order, with their display labels. Built once from configuration and never
//! mutated afterwards; the first enabled shape is the default selection when
//! the builder opens without an edit context.

use crate::config::QueryTypeFlags;
use crate::error::QueryBuilderError;
use crate::shape::QueryShape;
use crate::Result;
use serde::Serialize;

/// One enabled shape together with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeEntry {
    pub shape: QueryShape,
    pub label: &'static str,
}

/// Immutable catalog of enabled query shapes.
#[derive(Debug, Clone)]
pub struct QueryTypeRegistry {
    entries: Vec<ShapeEntry>,
}

impl QueryTypeRegistry {
    /// Build the registry from host configuration flags.
    ///
    /// Fails when every shape is switched off; a builder with no query
    /// types is a deployment mistake, not a state the UI should render.
    pub fn from_flags(flags: &QueryTypeFlags) -> Result<Self> {
        let entries: Vec<ShapeEntry> = QueryShape::ALL
            .into_iter()
            .filter(|shape| flags.is_enabled(*shape))
            .map(|shape| ShapeEntry {
                shape,
                label: shape.display_label(),
            })
            .collect();

        if entries.is_empty() {
            return Err(QueryBuilderError::NoShapesEnabled);
        }
        Ok(Self { entries })
    }

    /// Registry with every shape enabled.
    pub fn all_enabled() -> Self {
        Self::from_flags(&QueryTypeFlags::default()).expect("default flags enable all shapes")
    }

    /// Enabled shapes with labels, canonical order.
    pub fn enabled_shapes(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// The default selection: the first enabled shape.
    pub fn default_shape(&self) -> QueryShape {
        self.entries[0].shape
    }

    /// Whether a shape is enabled in this registry.
    pub fn is_enabled(&self, shape: QueryShape) -> bool {
        self.entries.iter().any(|e| e.shape == shape)
    }
}
