//! Fehlerarten des Vereinfachungs-Werkzeugs.
//!
//! Alle Varianten sind auf Werkzeug-Ebene behebbar: sie landen als
//! Benachrichtigung im `ToolState`, der Controller läuft weiter.

use thiserror::Error;

use crate::core::FeatureId;

/// Fehler, die dem Benutzer gemeldet werden.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    /// Kein aktiver Vektor-Layer
    #[error("No active vector layer")]
    NoLayerSelected,
    /// Aktiver Layer ist nicht im Editiermodus
    #[error("Layer '{0}' is not editable")]
    LayerNotEditable(String),
    /// Selektion hat kein Feature getroffen
    #[error("Could not find a nearby feature in the current layer.")]
    NoFeatureFound,
    /// Geometrie-Dienst lieferte kein Ergebnis für ein Feature
    #[error("Simplification failed for feature {0}")]
    SimplificationFailed(FeatureId),
    /// Commit verweigert, weil die Vorschau Fehler enthält
    #[error("Simplification failed for {failed} feature(s), nothing was stored")]
    CommitBlocked {
        /// Anzahl fehlgeschlagener Features
        failed: usize,
    },
    /// Layer hat eine Geometrie-Änderung abgelehnt, Command wurde verworfen
    #[error("Layer rejected the simplified geometry of feature {0}")]
    CommitFailed(FeatureId),
    /// Toleranz ist keine endliche Zahl
    #[error("Invalid tolerance value {0}")]
    InvalidTolerance(f64),
}
