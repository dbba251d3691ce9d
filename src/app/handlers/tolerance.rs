//! Handler für Toleranz-Änderungen und Vorschau-Aktualisierung.

use crate::app::error::ToolError;
use crate::app::preview::SimplificationPreviewEngine;
use crate::app::ToolState;
use crate::shared::{SettingsStore, ToleranceUnit};

use super::episode;

/// Setzt den Toleranzwert, persistiert ihn und aktualisiert eine laufende Vorschau.
pub fn set_tolerance(
    settings: &mut dyn SettingsStore,
    engine: &SimplificationPreviewEngine,
    state: &mut ToolState,
    value: f64,
) {
    if !value.is_finite() {
        state.notify(ToolError::InvalidTolerance(value));
        return;
    }
    state.tolerance.value = value;
    state.dialog.tolerance = value;
    if let Err(e) = settings.set_tolerance(value) {
        log::warn!("Toleranz konnte nicht gespeichert werden: {:#}", e);
    }
    if state.is_preview_active() {
        refresh_preview(engine, state);
    }
}

/// Setzt die Toleranz-Einheit, persistiert sie und aktualisiert eine laufende Vorschau.
pub fn set_tolerance_unit(
    settings: &mut dyn SettingsStore,
    engine: &SimplificationPreviewEngine,
    state: &mut ToolState,
    unit: ToleranceUnit,
) {
    state.tolerance.unit = unit;
    state.dialog.tolerance_unit = unit;
    if let Err(e) = settings.set_tolerance_unit(unit) {
        log::warn!("Toleranz-Einheit konnte nicht gespeichert werden: {:#}", e);
    }
    if state.is_preview_active() {
        refresh_preview(engine, state);
    }
}

/// Berechnet die Vorschau der aktuellen Selektion komplett neu.
pub fn refresh_preview(engine: &SimplificationPreviewEngine, state: &mut ToolState) {
    let preview = match state.canvas.current_layer() {
        Some(layer) => engine.recompute(
            state.tolerance,
            layer,
            &state.canvas.viewport,
            &state.selection,
        ),
        None => {
            log::warn!("Vorschau ohne aktiven Layer, Episode wird verworfen");
            episode::clear_selection(state);
            return;
        }
    };
    state.overlays.update_from_preview(&preview);
    state.dialog.update_from_preview(&preview);
    state.preview = preview;
}
