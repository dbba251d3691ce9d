//! Karten-Overlays des Werkzeugs: Auswahlrechteck und Vorschau-Geometrien.

use glam::Vec2;

use super::preview::PreviewState;
use crate::core::{FeatureId, Geometry};
use crate::shared::options::{PREVIEW_OVERLAY_COLOR, PREVIEW_OVERLAY_WIDTH, SELECTION_BAND_COLOR};

/// Halbtransparentes Auswahlrechteck in Screen-Pixeln.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionBand {
    /// Drag-Start
    pub corner_a: Vec2,
    /// Aktuelle Mausposition
    pub corner_b: Vec2,
    /// Füllfarbe (RGBA)
    pub color: [f32; 4],
}

/// Vorschau-Overlay eines selektierten Features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureOverlay {
    /// Zugehöriges Feature
    pub feature_id: FeatureId,
    /// Vereinfachte Geometrie, `None` solange nichts oder nichts Gültiges berechnet ist
    pub geometry: Option<Geometry>,
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienbreite in Pixeln
    pub width: f32,
}

/// Alle Overlays einer Episode. Gehört exklusiv zum Werkzeug.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlaySet {
    selection_band: Option<SelectionBand>,
    feature_overlays: Vec<FeatureOverlay>,
}

impl OverlaySet {
    /// Erstellt ein leeres Overlay-Set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt oder aktualisiert das Auswahlrechteck.
    pub fn set_selection_band(&mut self, corner_a: Vec2, corner_b: Vec2) {
        self.selection_band = Some(SelectionBand {
            corner_a,
            corner_b,
            color: SELECTION_BAND_COLOR,
        });
    }

    /// Entfernt das Auswahlrechteck.
    pub fn clear_selection_band(&mut self) {
        self.selection_band = None;
    }

    /// Aktuelles Auswahlrechteck.
    pub fn selection_band(&self) -> Option<&SelectionBand> {
        self.selection_band.as_ref()
    }

    /// Ersetzt die Feature-Overlays durch die Ergebnisse der Vorschau.
    pub fn update_from_preview(&mut self, preview: &PreviewState) {
        self.feature_overlays = preview
            .outcomes
            .keys()
            .map(|&feature_id| FeatureOverlay {
                feature_id,
                geometry: preview.simplified(feature_id).cloned(),
                color: PREVIEW_OVERLAY_COLOR,
                width: PREVIEW_OVERLAY_WIDTH,
            })
            .collect();
    }

    /// Feature-Overlays in Selektionsreihenfolge.
    pub fn feature_overlays(&self) -> &[FeatureOverlay] {
        &self.feature_overlays
    }

    /// Entfernt alle Overlays.
    pub fn clear(&mut self) {
        self.selection_band = None;
        self.feature_overlays.clear();
    }

    /// Gibt `true` zurück, wenn nichts angezeigt wird.
    pub fn is_empty(&self) -> bool {
        self.selection_band.is_none() && self.feature_overlays.is_empty()
    }
}
