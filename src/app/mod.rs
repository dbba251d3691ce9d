//! Application-Layer: Controller, State, Events, Selektion und Vorschau.

pub mod command_log;
pub mod controller;
pub mod dialog;
pub mod error;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod overlay;
pub mod preview;
pub mod selection;
/// Werkzeug-Zustand
///
/// Dieses Modul verwaltet den Zustand einer Vereinfachungs-Episode (Selektion, Vorschau, Dialog).
pub mod state;

pub use command_log::{CommandLog, LoggedCommand};
pub use controller::{SimplifyController, ToolServices};
pub use dialog::SimplifyDialogState;
pub use error::ToolError;
pub use events::{PointerButton, ToolCommand, ToolIntent};
pub use overlay::{FeatureOverlay, OverlaySet, SelectionBand};
pub use preview::{PreviewOutcome, PreviewState, SimplificationPreviewEngine};
pub use selection::{FeatureSelector, SelectedFeature, SelectionGesture, SelectionSet};
pub use state::{MapCanvas, ToolPhase, ToolState};
