//! Umrechnung von Toleranzen in Layer-Distanzen.

use super::layer::VectorLayer;
use super::viewport::MapViewport;
use crate::shared::options::{ToleranceUnit, VERTEX_SEARCH_RADIUS_PX};

/// Rechnet Toleranz-Eingaben und Suchradien in Layer-Einheiten um.
pub trait ToleranceConverter: Send + Sync {
    /// Toleranz `value` in `unit` → Distanz in Layer-Einheiten.
    fn tolerance_in_layer_units(
        &self,
        value: f64,
        layer: &dyn VectorLayer,
        viewport: &MapViewport,
        unit: ToleranceUnit,
    ) -> f64;

    /// Suchradius für Klick-Selektion in Layer-Einheiten.
    fn vertex_search_radius(&self, layer: &dyn VectorLayer, viewport: &MapViewport) -> f64;
}

/// Maßstabsbasierte Umrechnung über Layer-Skalierung und Viewport-Auflösung.
#[derive(Debug, Clone, Copy)]
pub struct ScaleToleranceConverter {
    /// Suchradius für Klick-Selektion in Screen-Pixeln
    pub search_radius_px: f64,
}

impl Default for ScaleToleranceConverter {
    fn default() -> Self {
        Self {
            search_radius_px: VERTEX_SEARCH_RADIUS_PX,
        }
    }
}

impl ToleranceConverter for ScaleToleranceConverter {
    fn tolerance_in_layer_units(
        &self,
        value: f64,
        layer: &dyn VectorLayer,
        viewport: &MapViewport,
        unit: ToleranceUnit,
    ) -> f64 {
        let map_per_layer = layer.map_units_per_layer_unit();
        match unit {
            ToleranceUnit::LayerUnits => value,
            ToleranceUnit::ProjectUnits => value / map_per_layer,
            ToleranceUnit::Pixels => value * viewport.map_units_per_pixel / map_per_layer,
        }
    }

    fn vertex_search_radius(&self, layer: &dyn VectorLayer, viewport: &MapViewport) -> f64 {
        self.tolerance_in_layer_units(
            self.search_radius_px,
            layer,
            viewport,
            ToleranceUnit::Pixels,
        )
    }
}
