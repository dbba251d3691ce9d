//! Handler für Maus-Interaktion: Drücken, Aufziehen, Loslassen.

use glam::Vec2;

use crate::app::error::ToolError;
use crate::app::preview::SimplificationPreviewEngine;
use crate::app::selection::{FeatureSelector, SelectionGesture};
use crate::app::state::ToolPhase;
use crate::app::ToolState;

use super::{episode, tolerance};

/// Startet eine neue Selektion. Eine laufende Episode wird verworfen.
pub fn begin_selection(state: &mut ToolState, screen_pos: Vec2) {
    if let Err(error) = state.canvas.editable_layer().map(|_| ()) {
        state.notify(error);
        return;
    }
    episode::clear_selection(state);
    state.phase = ToolPhase::Pressed { origin: screen_pos };
}

/// Zieht das Auswahlrechteck bis zur aktuellen Mausposition auf.
pub fn update_selection_rect(state: &mut ToolState, screen_pos: Vec2) {
    let origin = match state.phase {
        ToolPhase::Pressed { origin } | ToolPhase::Dragging { origin, .. } => origin,
        _ => return,
    };
    state.phase = ToolPhase::Dragging {
        origin,
        current: screen_pos,
    };
    state.overlays.set_selection_band(origin, screen_pos);
}

/// Schließt die Selektion ab, berechnet die Vorschau und zeigt den Dialog.
pub fn finish_selection(
    selector: &FeatureSelector,
    engine: &SimplificationPreviewEngine,
    state: &mut ToolState,
    screen_pos: Vec2,
) {
    let gesture = match state.phase {
        ToolPhase::Pressed { .. } => SelectionGesture::Point(screen_pos),
        ToolPhase::Dragging { origin, .. } => SelectionGesture::from_drag(origin, screen_pos),
        ToolPhase::Idle | ToolPhase::PreviewActive => {
            log::debug!("Loslassen ohne vorheriges Drücken ignoriert");
            return;
        }
    };
    state.overlays.clear_selection_band();
    state.phase = ToolPhase::Idle;

    let selection = match state.canvas.editable_layer() {
        Ok(layer) => selector.select(layer, &state.canvas.viewport, gesture),
        Err(error) => {
            log::debug!("Selektion abgebrochen: {}", error);
            return;
        }
    };

    if selection.is_empty() {
        state.notify(ToolError::NoFeatureFound);
        return;
    }

    log::info!(
        "{} Feature(s) mit {} Vertices selektiert",
        selection.len(),
        selection.original_vertex_count()
    );
    state.selection = selection;
    state.phase = ToolPhase::PreviewActive;
    tolerance::refresh_preview(engine, state);
    state.dialog.show();
}
