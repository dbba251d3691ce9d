/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste
    Primary,
    /// Rechte Maustaste
    Secondary,
    /// Mittlere Maustaste
    Middle,
}

/// Tool-Intents sind Eingaben aus Karte, Dialog oder Host ohne Mutationslogik.
#[derive(Debug, Clone)]
pub enum ToolIntent {
    /// Maustaste auf der Karte gedrückt
    PointerPressed {
        button: PointerButton,
        screen_pos: glam::Vec2,
    },
    /// Maus über der Karte bewegt
    PointerMoved {
        primary_held: bool,
        screen_pos: glam::Vec2,
    },
    /// Maustaste auf der Karte losgelassen
    PointerReleased {
        button: PointerButton,
        screen_pos: glam::Vec2,
    },
    /// Toleranz im Dialog editiert
    ToleranceEdited { value: f64 },
    /// Einheit im Dialog-Auswahlfeld gewählt (Index in `ToleranceUnit::ALL`)
    ToleranceUnitSelected { index: usize },
    /// OK im Dialog
    CommitRequested,
    /// Dialog geschlossen (Abbrechen oder Fenster-X)
    DialogClosed,
    /// Host hat den aktiven Layer gewechselt
    CurrentLayerChanged,
    /// Werkzeug wurde deaktiviert
    ToolDeactivated,
}
