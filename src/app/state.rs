//! Werkzeug-Zustand: Karten-Leinwand, Episode, Overlays, Dialog.

use glam::Vec2;

use super::dialog::SimplifyDialogState;
use super::error::ToolError;
use super::overlay::OverlaySet;
use super::preview::PreviewState;
use super::selection::SelectionSet;
use super::CommandLog;
use crate::core::{MapViewport, VectorLayer};
use crate::shared::Tolerance;

/// Phase der Maus-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolPhase {
    /// Keine Interaktion, keine Vorschau
    #[default]
    Idle,
    /// Maustaste gedrückt, noch nicht bewegt
    Pressed { origin: Vec2 },
    /// Auswahlrechteck wird aufgezogen
    Dragging { origin: Vec2, current: Vec2 },
    /// Selektion abgeschlossen, Vorschau und Dialog aktiv
    PreviewActive,
}

/// Vom Host bereitgestellte Karte: aktiver Layer und Viewport.
pub struct MapCanvas {
    layer: Option<Box<dyn VectorLayer>>,
    /// Sichtbarer Ausschnitt
    pub viewport: MapViewport,
}

impl MapCanvas {
    /// Erstellt eine Leinwand ohne aktiven Layer.
    pub fn new(viewport: MapViewport) -> Self {
        Self {
            layer: None,
            viewport,
        }
    }

    /// Setzt den aktiven Layer (Builder).
    pub fn with_layer(mut self, layer: impl VectorLayer + 'static) -> Self {
        self.layer = Some(Box::new(layer));
        self
    }

    /// Aktiver Layer.
    pub fn current_layer(&self) -> Option<&dyn VectorLayer> {
        self.layer.as_deref()
    }

    /// Aktiver Layer (veränderbar).
    pub fn current_layer_mut(&mut self) -> Option<&mut (dyn VectorLayer + 'static)> {
        self.layer.as_deref_mut()
    }

    /// Tauscht den aktiven Layer und gibt den vorherigen zurück.
    ///
    /// Der Controller muss danach `ToolIntent::CurrentLayerChanged` erhalten.
    pub fn replace_layer(
        &mut self,
        layer: Option<Box<dyn VectorLayer>>,
    ) -> Option<Box<dyn VectorLayer>> {
        std::mem::replace(&mut self.layer, layer)
    }

    /// Aktiver Layer, sofern vorhanden und editierbar.
    pub fn editable_layer(&self) -> Result<&dyn VectorLayer, ToolError> {
        match self.current_layer() {
            None => Err(ToolError::NoLayerSelected),
            Some(layer) if !layer.is_editable() => {
                Err(ToolError::LayerNotEditable(layer.name().to_string()))
            }
            Some(layer) => Ok(layer),
        }
    }
}

/// Hauptzustand des Vereinfachungs-Werkzeugs
pub struct ToolState {
    /// Karte des Hosts
    pub canvas: MapCanvas,
    /// Aktuelle Interaktionsphase
    pub phase: ToolPhase,
    /// Aktuelle Toleranz (gespiegelt aus dem Einstellungs-Speicher)
    pub tolerance: Tolerance,
    /// Selektierte Features der laufenden Episode
    pub selection: SelectionSet,
    /// Vorschau der laufenden Episode
    pub preview: PreviewState,
    /// Karten-Overlays
    pub overlays: OverlaySet,
    /// Dialog-Zustand
    pub dialog: SimplifyDialogState,
    /// Noch nicht abgeholte Benutzer-Meldungen
    pub notifications: Vec<ToolError>,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl ToolState {
    /// Erstellt den Zustand im Leerlauf.
    pub fn new(canvas: MapCanvas, tolerance: Tolerance) -> Self {
        Self {
            canvas,
            phase: ToolPhase::Idle,
            tolerance,
            selection: SelectionSet::new(),
            preview: PreviewState::default(),
            overlays: OverlaySet::new(),
            dialog: SimplifyDialogState::new(tolerance),
            notifications: Vec::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Gibt `true` zurück, wenn eine Vorschau aktiv ist.
    pub fn is_preview_active(&self) -> bool {
        self.phase == ToolPhase::PreviewActive
    }

    /// Statuszeile der aktuellen Vorschau.
    pub fn status_text(&self) -> String {
        self.preview.status_text()
    }

    /// Meldet einen Fehler an den Benutzer.
    pub fn notify(&mut self, error: ToolError) {
        log::warn!("{}", error);
        self.notifications.push(error);
    }

    /// Holt alle offenen Meldungen ab.
    pub fn take_notifications(&mut self) -> Vec<ToolError> {
        std::mem::take(&mut self.notifications)
    }
}
