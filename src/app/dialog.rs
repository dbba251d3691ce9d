//! Zustand des Vereinfachungs-Dialogs (ohne UI-Toolkit).

use super::preview::PreviewState;
use crate::shared::{Tolerance, ToleranceUnit};

/// Was der Dialog anzeigt: Toleranz-Eingabe, Einheit, Statuszeile, OK-Button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimplifyDialogState {
    /// Dialog ist sichtbar
    pub visible: bool,
    /// Statuszeile der aktuellen Vorschau
    pub status_text: String,
    /// OK-Button aktiv
    pub commit_enabled: bool,
    /// Angezeigter Toleranzwert
    pub tolerance: f64,
    /// Angezeigte Einheit
    pub tolerance_unit: ToleranceUnit,
}

impl SimplifyDialogState {
    /// Erstellt den versteckten Dialog mit den gespeicherten Einstellungen.
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance: tolerance.value,
            tolerance_unit: tolerance.unit,
            ..Self::default()
        }
    }

    /// Index der Einheit im Auswahlfeld.
    pub fn unit_index(&self) -> usize {
        self.tolerance_unit.index()
    }

    /// Zeigt den Dialog.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Versteckt den Dialog und setzt Status und OK-Button zurück.
    pub fn hide(&mut self) {
        self.visible = false;
        self.status_text.clear();
        self.commit_enabled = false;
    }

    /// Übernimmt Statuszeile und Commit-Freigabe aus der Vorschau.
    pub fn update_from_preview(&mut self, preview: &PreviewState) {
        self.status_text = preview.status_text();
        self.commit_enabled = preview.can_commit();
    }
}
