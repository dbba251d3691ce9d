//! Injizierbarer Einstellungs-Speicher (explizites get/set statt globalem Zustand).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::options::{DigitizingSettings, ToleranceUnit};

/// Speicher für die persistierten Werkzeug-Einstellungen.
pub trait SettingsStore: Send {
    /// Aktuelle Vereinfachungs-Toleranz.
    fn tolerance(&self) -> f64;

    /// Setzt und persistiert die Toleranz.
    fn set_tolerance(&mut self, value: f64) -> anyhow::Result<()>;

    /// Aktuelle Toleranz-Einheit.
    fn tolerance_unit(&self) -> ToleranceUnit;

    /// Setzt und persistiert die Toleranz-Einheit.
    fn set_tolerance_unit(&mut self, unit: ToleranceUnit) -> anyhow::Result<()>;
}

/// Flüchtiger Speicher (Tests, eingebettete Nutzung). Zählt Schreibzugriffe.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    settings: DigitizingSettings,
    writes: usize,
}

impl MemorySettingsStore {
    /// Erstellt den Speicher mit vorgegebenen Werten.
    pub fn with_settings(settings: DigitizingSettings) -> Self {
        Self {
            settings,
            writes: 0,
        }
    }

    /// Anzahl bisheriger Schreibzugriffe.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SettingsStore for MemorySettingsStore {
    fn tolerance(&self) -> f64 {
        self.settings.simplify_tolerance
    }

    fn set_tolerance(&mut self, value: f64) -> anyhow::Result<()> {
        self.settings.simplify_tolerance = value;
        self.writes += 1;
        Ok(())
    }

    fn tolerance_unit(&self) -> ToleranceUnit {
        self.settings.simplify_tolerance_units
    }

    fn set_tolerance_unit(&mut self, unit: ToleranceUnit) -> anyhow::Result<()> {
        self.settings.simplify_tolerance_units = unit;
        self.writes += 1;
        Ok(())
    }
}

/// Inhalt der Einstellungs-Datei. Fremde Sektionen bleiben erhalten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    digitizing: DigitizingSettings,
    #[serde(flatten)]
    other: toml::Table,
}

/// TOML-Datei-Speicher. Jede Änderung wird sofort geschrieben.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
    file: SettingsFile,
}

impl TomlSettingsStore {
    /// Öffnet die Einstellungs-Datei. Bei Fehler: Standardwerte.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(file) => {
                    log::info!("Einstellungen geladen aus: {}", path.display());
                    file
                }
                Err(e) => {
                    log::warn!(
                        "Einstellungs-Datei fehlerhaft, verwende Standardwerte: {}",
                        e
                    );
                    SettingsFile::default()
                }
            },
            Err(_) => {
                log::info!("Keine Einstellungs-Datei gefunden, verwende Standardwerte");
                SettingsFile::default()
            }
        };
        Self { path, file }
    }

    /// Ermittelt den Pfad zur Einstellungs-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("vector_simplify_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("vector_simplify_editor.toml")
    }

    /// Pfad der Einstellungs-Datei.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Aktuelle Digitalisier-Einstellungen.
    pub fn settings(&self) -> &DigitizingSettings {
        &self.file.digitizing
    }

    fn save(&self) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(&self.file)?;
        std::fs::write(&self.path, content)?;
        log::debug!("Einstellungen gespeichert nach: {}", self.path.display());
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn tolerance(&self) -> f64 {
        self.file.digitizing.simplify_tolerance
    }

    fn set_tolerance(&mut self, value: f64) -> anyhow::Result<()> {
        self.file.digitizing.simplify_tolerance = value;
        self.save()
    }

    fn tolerance_unit(&self) -> ToleranceUnit {
        self.file.digitizing.simplify_tolerance_units
    }

    fn set_tolerance_unit(&mut self, unit: ToleranceUnit) -> anyhow::Result<()> {
        self.file.digitizing.simplify_tolerance_units = unit;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "vector_simplify_editor_{}_{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn missing_file_yields_defaults() {
        let store = TomlSettingsStore::open(temp_path("missing"));
        assert_eq!(store.tolerance(), 1.0);
        assert_eq!(store.tolerance_unit(), ToleranceUnit::LayerUnits);
    }

    #[test]
    fn every_change_is_written_and_reloaded() {
        let path = temp_path("roundtrip");
        let mut store = TomlSettingsStore::open(&path);
        store.set_tolerance(2.5).expect("schreibbar");
        store
            .set_tolerance_unit(ToleranceUnit::Pixels)
            .expect("schreibbar");

        let reloaded = TomlSettingsStore::open(&path);
        assert_eq!(reloaded.tolerance(), 2.5);
        assert_eq!(reloaded.tolerance_unit(), ToleranceUnit::Pixels);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn foreign_sections_survive_a_write() {
        let path = temp_path("foreign");
        std::fs::write(&path, "[snapping]\nenabled = true\n").expect("schreibbar");

        let mut store = TomlSettingsStore::open(&path);
        store.set_tolerance(3.0).expect("schreibbar");

        let content = std::fs::read_to_string(&path).expect("lesbar");
        assert!(content.contains("[snapping]"));
        assert!(content.contains("simplify_tolerance = 3.0"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let path = temp_path("broken");
        std::fs::write(&path, "[digitizing\n").expect("schreibbar");
        let store = TomlSettingsStore::open(&path);
        assert_eq!(store.tolerance(), 1.0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn memory_store_counts_writes() {
        let mut store = MemorySettingsStore::default();
        store.set_tolerance(0.5).expect("immer ok");
        store
            .set_tolerance_unit(ToleranceUnit::ProjectUnits)
            .expect("immer ok");
        assert_eq!(store.writes(), 2);
        assert_eq!(store.tolerance(), 0.5);
    }
}
