use crate::shared::ToleranceUnit;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCommand {
    /// Neue Selektion an Screen-Position beginnen (verwirft laufende Episode)
    BeginSelection { screen_pos: glam::Vec2 },
    /// Auswahlrechteck bis zur Screen-Position aufziehen
    UpdateSelectionRect { screen_pos: glam::Vec2 },
    /// Selektion abschließen und Vorschau berechnen
    FinishSelection { screen_pos: glam::Vec2 },
    /// Toleranzwert setzen und persistieren
    SetTolerance { value: f64 },
    /// Toleranz-Einheit setzen und persistieren
    SetToleranceUnit { unit: ToleranceUnit },
    /// Vorschau-Geometrien in den Layer schreiben
    StoreSimplified,
    /// Laufende Episode verwerfen
    ClearSelection,
    /// Werkzeug deaktivieren
    Deactivate,
}
