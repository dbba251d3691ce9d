//! Geteilte Konfiguration: Toleranz-Typen, Defaults und Einstellungs-Speicher.

pub mod options;
pub mod settings_store;

pub use options::{DigitizingSettings, Tolerance, ToleranceUnit};
pub use settings_store::{MemorySettingsStore, SettingsStore, TomlSettingsStore};
