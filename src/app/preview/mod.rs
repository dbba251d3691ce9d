//! Vereinfachungs-Vorschau: berechnet bei jeder Änderung alle Features neu.

mod state;

use std::sync::Arc;

pub use state::{PreviewOutcome, PreviewState};

use super::error::ToolError;
use super::selection::SelectionSet;
use crate::core::{vertex_count, GeometryService, MapViewport, ToleranceConverter, VectorLayer};
use crate::shared::Tolerance;

/// Erzeugt `PreviewState`s aus Selektion und Toleranz.
#[derive(Clone)]
pub struct SimplificationPreviewEngine {
    geometry: Arc<dyn GeometryService>,
    converter: Arc<dyn ToleranceConverter>,
}

impl SimplificationPreviewEngine {
    /// Erstellt die Engine mit den gegebenen Diensten.
    pub fn new(geometry: Arc<dyn GeometryService>, converter: Arc<dyn ToleranceConverter>) -> Self {
        Self {
            geometry,
            converter,
        }
    }

    /// Vereinfacht jedes selektierte Feature mit der Toleranz in Layer-Einheiten.
    ///
    /// Fehlgeschlagene Features zählen mit 0 reduzierten Vertices und setzen
    /// `has_errors`; die übrigen Features werden trotzdem berechnet.
    pub fn recompute(
        &self,
        tolerance: Tolerance,
        layer: &dyn VectorLayer,
        viewport: &MapViewport,
        selection: &SelectionSet,
    ) -> PreviewState {
        let layer_tolerance =
            self.converter
                .tolerance_in_layer_units(tolerance.value, layer, viewport, tolerance.unit);

        let mut preview = PreviewState {
            layer_tolerance,
            original_vertex_count: selection.original_vertex_count(),
            ..PreviewState::default()
        };

        for selected in selection.iter() {
            match self.geometry.simplify(&selected.geometry, layer_tolerance) {
                Some(simplified) => {
                    preview.reduced_vertex_count += vertex_count(&simplified);
                    preview
                        .outcomes
                        .insert(selected.id, PreviewOutcome::Simplified(simplified));
                }
                None => {
                    log::warn!(
                        "{} (Toleranz {})",
                        ToolError::SimplificationFailed(selected.id),
                        layer_tolerance
                    );
                    preview.has_errors = true;
                    preview.outcomes.insert(selected.id, PreviewOutcome::Failed);
                }
            }
        }

        log::debug!(
            "Vorschau: {} Features, {} → {} Vertices",
            preview.feature_count(),
            preview.original_vertex_count,
            preview.reduced_vertex_count
        );
        preview
    }
}

#[cfg(test)]
mod tests;
