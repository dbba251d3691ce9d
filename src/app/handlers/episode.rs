//! Handler für das Ende einer Episode: Speichern, Verwerfen, Deaktivieren.

use crate::app::error::ToolError;
use crate::app::preview::PreviewState;
use crate::app::state::ToolPhase;
use crate::app::ToolState;
use crate::core::VectorLayer;

/// Beschriftung des Edit-Commands im Undo-Verlauf des Layers.
pub const EDIT_COMMAND_LABEL: &str = "Geometry simplified";

/// Schreibt die Vorschau-Geometrien in einem Edit-Command in den Layer.
///
/// Lehnt der Layer eine Änderung ab, wird der Command verworfen, die
/// Episode bleibt erhalten und der Fehler wird zurückgegeben.
pub fn store_simplified(state: &mut ToolState) -> Result<(), ToolError> {
    if !state.is_preview_active() || state.selection.is_empty() {
        log::debug!("Speichern ohne aktive Vorschau ignoriert");
        return Ok(());
    }
    if state.preview.has_errors {
        let failed = state.preview.failed_features().len();
        state.notify(ToolError::CommitBlocked { failed });
        return Ok(());
    }

    let written = match state.canvas.current_layer_mut() {
        Some(layer) => write_preview(layer, &state.preview),
        None => Err(ToolError::NoLayerSelected),
    };

    match written {
        Ok(count) => {
            log::info!("{} vereinfachte Geometrie(n) gespeichert", count);
            clear_selection(state);
            Ok(())
        }
        Err(ToolError::NoLayerSelected) => {
            state.notify(ToolError::NoLayerSelected);
            clear_selection(state);
            Ok(())
        }
        Err(error) => {
            state.notify(error.clone());
            Err(error)
        }
    }
}

fn write_preview(layer: &mut dyn VectorLayer, preview: &PreviewState) -> Result<usize, ToolError> {
    layer.begin_edit_command(EDIT_COMMAND_LABEL);
    let mut written = 0;
    for (id, geometry) in preview.simplified_geometries() {
        if !layer.change_geometry(id, geometry.clone()) {
            log::error!("Layer '{}' lehnt Geometrie von Feature {} ab", layer.name(), id);
            layer.destroy_edit_command();
            return Err(ToolError::CommitFailed(id));
        }
        written += 1;
    }
    layer.end_edit_command();
    layer.trigger_repaint();
    Ok(written)
}

/// Verwirft Selektion, Vorschau und Overlays und versteckt den Dialog.
pub fn clear_selection(state: &mut ToolState) {
    if !state.selection.is_empty() {
        log::debug!("Episode mit {} Feature(s) verworfen", state.selection.len());
    }
    state.selection.clear();
    state.preview = PreviewState::default();
    state.overlays.clear();
    state.dialog.hide();
    state.phase = ToolPhase::Idle;
}

/// Deaktiviert das Werkzeug: verwirft die laufende Episode.
pub fn deactivate(state: &mut ToolState) {
    clear_selection(state);
    log::info!("Vereinfachungs-Werkzeug deaktiviert");
}
