//! Vector Simplify Editor Library.
//! Interaktives Vereinfachungs-Werkzeug für Vektor-Layer: Selektion per Klick
//! oder Rechteck, Live-Vorschau mit Toleranz, atomares Speichern.

pub mod app;
pub mod attributes;
pub mod core;
pub mod shared;

pub use app::{
    MapCanvas, PointerButton, PreviewState, SimplifyController, ToolCommand, ToolError,
    ToolIntent, ToolPhase, ToolServices, ToolState,
};
pub use attributes::{UuidEditorKind, UuidField};
pub use core::{
    DouglasPeuckerService, Feature, FeatureId, Geometry, GeometryService, MapViewport,
    MemoryLayer, ScaleToleranceConverter, ToleranceConverter, VectorLayer,
};
pub use shared::{
    DigitizingSettings, MemorySettingsStore, SettingsStore, Tolerance, ToleranceUnit,
    TomlSettingsStore,
};
