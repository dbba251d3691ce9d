//! Feature-Identität und Feature-Datensatz eines Vektor-Layers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::Geometry;

/// Opake Feature-ID innerhalb eines Layers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FeatureId(pub u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Feature mit seiner gespeicherten Geometrie (Layer-Koordinaten).
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// ID im Layer
    pub id: FeatureId,
    /// Gespeicherte Geometrie
    pub geometry: Geometry,
}

impl Feature {
    /// Erstellt ein neues Feature.
    pub fn new(id: u64, geometry: impl Into<Geometry>) -> Self {
        Self {
            id: FeatureId(id),
            geometry: geometry.into(),
        }
    }
}
