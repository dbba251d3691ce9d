use glam::{DVec2, Vec2};

use crate::app::events::PointerButton;
use crate::app::state::{MapCanvas, ToolPhase};
use crate::app::{ToolCommand, ToolIntent, ToolState};
use crate::core::MapViewport;
use crate::shared::{Tolerance, ToleranceUnit};

use super::map_intent_to_commands;

fn idle_state() -> ToolState {
    let viewport = MapViewport::new(DVec2::ZERO, 1.0, Vec2::new(200.0, 200.0));
    ToolState::new(MapCanvas::new(viewport), Tolerance::default())
}

#[test]
fn primary_press_begins_a_selection() {
    let state = idle_state();

    let commands = map_intent_to_commands(
        &state,
        ToolIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos: Vec2::new(4.0, 5.0),
        },
    );

    assert_eq!(
        commands,
        vec![ToolCommand::BeginSelection {
            screen_pos: Vec2::new(4.0, 5.0)
        }]
    );
}

#[test]
fn secondary_buttons_are_ignored() {
    let state = idle_state();

    let pressed = map_intent_to_commands(
        &state,
        ToolIntent::PointerPressed {
            button: PointerButton::Secondary,
            screen_pos: Vec2::ZERO,
        },
    );
    let released = map_intent_to_commands(
        &state,
        ToolIntent::PointerReleased {
            button: PointerButton::Middle,
            screen_pos: Vec2::ZERO,
        },
    );

    assert!(pressed.is_empty());
    assert!(released.is_empty());
}

#[test]
fn move_without_press_does_not_drag() {
    let state = idle_state();

    let commands = map_intent_to_commands(
        &state,
        ToolIntent::PointerMoved {
            primary_held: true,
            screen_pos: Vec2::ONE,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn move_with_held_button_after_press_drags() {
    let mut state = idle_state();
    state.phase = ToolPhase::Pressed {
        origin: Vec2::ZERO,
    };

    let held = map_intent_to_commands(
        &state,
        ToolIntent::PointerMoved {
            primary_held: true,
            screen_pos: Vec2::ONE,
        },
    );
    let hover = map_intent_to_commands(
        &state,
        ToolIntent::PointerMoved {
            primary_held: false,
            screen_pos: Vec2::ONE,
        },
    );

    assert_eq!(
        held,
        vec![ToolCommand::UpdateSelectionRect {
            screen_pos: Vec2::ONE
        }]
    );
    assert!(hover.is_empty());
}

#[test]
fn unit_index_maps_to_unit() {
    let state = idle_state();

    let commands = map_intent_to_commands(&state, ToolIntent::ToleranceUnitSelected { index: 1 });

    assert_eq!(
        commands,
        vec![ToolCommand::SetToleranceUnit {
            unit: ToleranceUnit::Pixels
        }]
    );
}

#[test]
fn unknown_unit_index_is_dropped() {
    let state = idle_state();

    let commands = map_intent_to_commands(&state, ToolIntent::ToleranceUnitSelected { index: 9 });

    assert!(commands.is_empty());
}

#[test]
fn dialog_close_and_layer_change_clear_the_selection() {
    let state = idle_state();

    for intent in [ToolIntent::DialogClosed, ToolIntent::CurrentLayerChanged] {
        let commands = map_intent_to_commands(&state, intent);
        assert_eq!(commands, vec![ToolCommand::ClearSelection]);
    }
}
