//! Zentrale Konfiguration des Vereinfachungs-Werkzeugs.
//!
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Persistiert
//! werden nur Toleranz und Toleranz-Einheit (`[digitizing]`-Sektion).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ── Toleranz ────────────────────────────────────────────────────────

/// Standard-Toleranz beim ersten Start.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 1.0;
/// Suchradius für Klick-Selektion in Screen-Pixeln.
pub const VERTEX_SEARCH_RADIUS_PX: f64 = 10.0;

// ── Overlays ────────────────────────────────────────────────────────

/// Füllfarbe des Auswahl-Rechtecks (RGBA: Blau, Alpha 63/255).
pub const SELECTION_BAND_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 63.0 / 255.0];
/// Farbe der Vorschau-Overlays (RGBA: Rot, Alpha 65/255).
pub const PREVIEW_OVERLAY_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 65.0 / 255.0];
/// Linienbreite der Vorschau-Overlays in Pixeln.
pub const PREVIEW_OVERLAY_WIDTH: f32 = 2.0;

/// Einheit, in der die Toleranz angegeben wird.
///
/// Die Reihenfolge entspricht dem Index im Einheiten-Auswahlfeld des Dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceUnit {
    /// Einheiten des bearbeiteten Layers
    #[default]
    LayerUnits,
    /// Screen-Pixel (abhängig vom aktuellen Maßstab)
    Pixels,
    /// Karten-/Projekt-Einheiten
    #[serde(alias = "map_units")]
    ProjectUnits,
}

impl ToleranceUnit {
    /// Alle Einheiten in Dialog-Reihenfolge.
    pub const ALL: [ToleranceUnit; 3] = [
        ToleranceUnit::LayerUnits,
        ToleranceUnit::Pixels,
        ToleranceUnit::ProjectUnits,
    ];

    /// Einheit zum Dialog-Index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Dialog-Index der Einheit.
    pub fn index(self) -> usize {
        match self {
            ToleranceUnit::LayerUnits => 0,
            ToleranceUnit::Pixels => 1,
            ToleranceUnit::ProjectUnits => 2,
        }
    }
}

impl fmt::Display for ToleranceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ToleranceUnit::LayerUnits => "Layer units",
            ToleranceUnit::Pixels => "Pixels",
            ToleranceUnit::ProjectUnits => "Map units",
        };
        f.write_str(label)
    }
}

impl FromStr for ToleranceUnit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "layer" | "layer_units" => Ok(ToleranceUnit::LayerUnits),
            "px" | "pixels" => Ok(ToleranceUnit::Pixels),
            "map" | "map_units" | "project_units" => Ok(ToleranceUnit::ProjectUnits),
            other => anyhow::bail!("Unbekannte Toleranz-Einheit: '{}'", other),
        }
    }
}

/// Toleranzwert samt Einheit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Zahlenwert in `unit`
    pub value: f64,
    /// Einheit des Werts
    pub unit: ToleranceUnit,
}

impl Tolerance {
    /// Erstellt eine Toleranz.
    pub fn new(value: f64, unit: ToleranceUnit) -> Self {
        Self { value, unit }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_SIMPLIFY_TOLERANCE, ToleranceUnit::default())
    }
}

/// Persistierte Digitalisier-Einstellungen (`[digitizing]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitizingSettings {
    /// Letzte Vereinfachungs-Toleranz
    #[serde(default = "default_simplify_tolerance")]
    pub simplify_tolerance: f64,
    /// Einheit der Vereinfachungs-Toleranz
    #[serde(default)]
    pub simplify_tolerance_units: ToleranceUnit,
}

impl Default for DigitizingSettings {
    fn default() -> Self {
        Self {
            simplify_tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            simplify_tolerance_units: ToleranceUnit::default(),
        }
    }
}

/// Serde-Default für `simplify_tolerance` (Abwärtskompatibilität).
fn default_simplify_tolerance() -> f64 {
    DEFAULT_SIMPLIFY_TOLERANCE
}

impl DigitizingSettings {
    /// Toleranz samt Einheit als Wertobjekt.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.simplify_tolerance, self.simplify_tolerance_units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_index_roundtrips_in_dialog_order() {
        for (index, unit) in ToleranceUnit::ALL.iter().enumerate() {
            assert_eq!(unit.index(), index);
            assert_eq!(ToleranceUnit::from_index(index), Some(*unit));
        }
        assert_eq!(ToleranceUnit::from_index(3), None);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let settings: DigitizingSettings = toml::from_str("").expect("leere Sektion gültig");
        assert_eq!(settings, DigitizingSettings::default());
        assert_eq!(settings.tolerance(), Tolerance::default());
    }

    #[test]
    fn map_units_alias_is_accepted() {
        let settings: DigitizingSettings =
            toml::from_str("simplify_tolerance_units = \"map_units\"").expect("Alias gültig");
        assert_eq!(settings.simplify_tolerance_units, ToleranceUnit::ProjectUnits);
    }

    #[test]
    fn unit_names_parse_from_the_command_line() {
        assert_eq!("pixels".parse::<ToleranceUnit>().ok(), Some(ToleranceUnit::Pixels));
        assert_eq!("Map_Units".parse::<ToleranceUnit>().ok(), Some(ToleranceUnit::ProjectUnits));
        assert!("furlongs".parse::<ToleranceUnit>().is_err());
    }
}
