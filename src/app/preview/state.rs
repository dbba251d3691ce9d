use indexmap::IndexMap;

use crate::core::{FeatureId, Geometry};

/// Ergebnis der Vereinfachung eines einzelnen Features.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewOutcome {
    /// Vereinfachte Geometrie (Layer-Koordinaten)
    Simplified(Geometry),
    /// Geometrie-Dienst lieferte kein Ergebnis
    Failed,
}

/// Vorschau-Zustand einer Episode. Wird bei jeder Änderung komplett ersetzt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewState {
    /// Ergebnis pro selektiertem Feature, in Selektionsreihenfolge
    pub outcomes: IndexMap<FeatureId, PreviewOutcome>,
    /// Verwendete Toleranz in Layer-Einheiten
    pub layer_tolerance: f64,
    /// Summe der Original-Vertices
    pub original_vertex_count: usize,
    /// Summe der Vertices nach Vereinfachung (fehlgeschlagene Features zählen 0)
    pub reduced_vertex_count: usize,
    /// Mindestens ein Feature ist fehlgeschlagen
    pub has_errors: bool,
}

impl PreviewState {
    /// Anzahl der Features in der Vorschau.
    pub fn feature_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Gibt `true` zurück, wenn keine Vorschau existiert.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Verbleibender Anteil in ganzen Prozent (abgerundet, 0 ohne Original-Vertices).
    pub fn remaining_percent(&self) -> usize {
        if self.original_vertex_count == 0 {
            0
        } else {
            100 * self.reduced_vertex_count / self.original_vertex_count
        }
    }

    /// Statuszeile für den Dialog.
    pub fn status_text(&self) -> String {
        let mut text = format!(
            "{} feature(s): {} to {} vertices ({}%)",
            self.feature_count(),
            self.original_vertex_count,
            self.reduced_vertex_count,
            self.remaining_percent()
        );
        if self.has_errors {
            text.push_str("\nSimplification failed!");
        }
        text
    }

    /// Commit ist nur ohne Fehler und mit mindestens einem Feature erlaubt.
    pub fn can_commit(&self) -> bool {
        !self.has_errors && !self.outcomes.is_empty()
    }

    /// IDs der fehlgeschlagenen Features.
    pub fn failed_features(&self) -> Vec<FeatureId> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, PreviewOutcome::Failed))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Vereinfachte Geometrie eines Features, falls erfolgreich.
    pub fn simplified(&self, id: FeatureId) -> Option<&Geometry> {
        match self.outcomes.get(&id) {
            Some(PreviewOutcome::Simplified(geometry)) => Some(geometry),
            _ => None,
        }
    }

    /// Alle erfolgreich vereinfachten Geometrien in Reihenfolge.
    pub fn simplified_geometries(&self) -> impl Iterator<Item = (FeatureId, &Geometry)> {
        self.outcomes.iter().filter_map(|(id, outcome)| match outcome {
            PreviewOutcome::Simplified(geometry) => Some((*id, geometry)),
            PreviewOutcome::Failed => None,
        })
    }
}
