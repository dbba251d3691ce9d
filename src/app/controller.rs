//! Controller des Vereinfachungs-Werkzeugs für zentrale Event-Verarbeitung.

use std::sync::Arc;

use super::preview::SimplificationPreviewEngine;
use super::selection::FeatureSelector;
use super::state::MapCanvas;
use super::{ToolCommand, ToolIntent, ToolState};
use crate::core::{DouglasPeuckerService, GeometryService, ScaleToleranceConverter, ToleranceConverter};
use crate::shared::{SettingsStore, Tolerance};

/// Injizierte Dienste des Werkzeugs.
pub struct ToolServices {
    /// Vereinfachung und Distanzen
    pub geometry: Arc<dyn GeometryService>,
    /// Toleranz- und Suchradius-Umrechnung
    pub converter: Arc<dyn ToleranceConverter>,
    /// Persistierte Einstellungen
    pub settings: Box<dyn SettingsStore>,
}

impl ToolServices {
    /// Standard-Dienste (Douglas-Peucker, Massstabs-Umrechnung) mit gegebenem Speicher.
    pub fn with_settings(settings: impl SettingsStore + 'static) -> Self {
        Self {
            geometry: Arc::new(DouglasPeuckerService),
            converter: Arc::new(ScaleToleranceConverter::default()),
            settings: Box::new(settings),
        }
    }
}

/// Orchestriert Karten- und Dialog-Events auf den ToolState.
pub struct SimplifyController {
    selector: FeatureSelector,
    engine: SimplificationPreviewEngine,
    settings: Box<dyn SettingsStore>,
}

impl SimplifyController {
    /// Erstellt einen neuen Controller.
    pub fn new(services: ToolServices) -> Self {
        Self {
            selector: FeatureSelector::new(services.geometry.clone(), services.converter.clone()),
            engine: SimplificationPreviewEngine::new(services.geometry, services.converter),
            settings: services.settings,
        }
    }

    /// Erstellt den Werkzeug-Zustand mit der gespeicherten Toleranz.
    pub fn create_state(&self, canvas: MapCanvas) -> ToolState {
        let tolerance = Tolerance::new(self.settings.tolerance(), self.settings.tolerance_unit());
        log::debug!("Werkzeug startet mit Toleranz {} {}", tolerance.value, tolerance.unit);
        ToolState::new(canvas, tolerance)
    }

    /// Persistierte Einstellungen.
    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    /// Feature-Selector des Werkzeugs.
    pub fn selector(&self) -> &FeatureSelector {
        &self.selector
    }

    /// Vorschau-Engine des Werkzeugs.
    pub fn engine(&self) -> &SimplificationPreviewEngine {
        &self.engine
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut ToolState, intent: ToolIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &ToolState, intent: ToolIntent) -> Vec<ToolCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem ToolState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut ToolState,
        command: ToolCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Maus-Interaktion ===
            ToolCommand::BeginSelection { screen_pos } => {
                handlers::pointer::begin_selection(state, screen_pos)
            }
            ToolCommand::UpdateSelectionRect { screen_pos } => {
                handlers::pointer::update_selection_rect(state, screen_pos)
            }
            ToolCommand::FinishSelection { screen_pos } => handlers::pointer::finish_selection(
                &self.selector,
                &self.engine,
                state,
                screen_pos,
            ),

            // === Toleranz ===
            ToolCommand::SetTolerance { value } => handlers::tolerance::set_tolerance(
                self.settings.as_mut(),
                &self.engine,
                state,
                value,
            ),
            ToolCommand::SetToleranceUnit { unit } => handlers::tolerance::set_tolerance_unit(
                self.settings.as_mut(),
                &self.engine,
                state,
                unit,
            ),

            // === Episode ===
            ToolCommand::StoreSimplified => handlers::episode::store_simplified(state)?,
            ToolCommand::ClearSelection => handlers::episode::clear_selection(state),
            ToolCommand::Deactivate => handlers::episode::deactivate(state),
        }

        Ok(())
    }
}
