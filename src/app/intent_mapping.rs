//! Mapping von Karten- und Dialog-Intents auf mutierende Tool-Commands.

use super::events::PointerButton;
use super::state::ToolPhase;
use super::{ToolCommand, ToolIntent, ToolState};
use crate::shared::ToleranceUnit;

/// Übersetzt einen `ToolIntent` in eine Sequenz ausführbarer `ToolCommand`s.
pub fn map_intent_to_commands(state: &ToolState, intent: ToolIntent) -> Vec<ToolCommand> {
    match intent {
        ToolIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos,
        } => vec![ToolCommand::BeginSelection { screen_pos }],
        ToolIntent::PointerPressed { .. } => vec![],
        ToolIntent::PointerMoved {
            primary_held: true,
            screen_pos,
        } => match state.phase {
            ToolPhase::Pressed { .. } | ToolPhase::Dragging { .. } => {
                vec![ToolCommand::UpdateSelectionRect { screen_pos }]
            }
            _ => vec![],
        },
        ToolIntent::PointerMoved { .. } => vec![],
        ToolIntent::PointerReleased {
            button: PointerButton::Primary,
            screen_pos,
        } => vec![ToolCommand::FinishSelection { screen_pos }],
        ToolIntent::PointerReleased { .. } => vec![],
        ToolIntent::ToleranceEdited { value } => vec![ToolCommand::SetTolerance { value }],
        ToolIntent::ToleranceUnitSelected { index } => match ToleranceUnit::from_index(index) {
            Some(unit) => vec![ToolCommand::SetToleranceUnit { unit }],
            None => {
                log::warn!("Unbekannter Einheiten-Index {} ignoriert", index);
                vec![]
            }
        },
        ToolIntent::CommitRequested => vec![ToolCommand::StoreSimplified],
        ToolIntent::DialogClosed | ToolIntent::CurrentLayerChanged => {
            vec![ToolCommand::ClearSelection]
        }
        ToolIntent::ToolDeactivated => vec![ToolCommand::Deactivate],
    }
}

#[cfg(test)]
mod tests;
