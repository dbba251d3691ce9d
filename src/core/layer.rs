//! Vektor-Layer: Datenquelle und Edit-Transaktionen.
//!
//! `VectorLayer` ist die Schnittstelle, über die das Werkzeug Features
//! abfragt und Geometrien zurückschreibt. `MemoryLayer` hält alle Features
//! im Speicher und puffert Änderungen eines Edit-Commands, bis dieser
//! abgeschlossen wird (alles oder nichts).

mod file;
mod history;

pub use history::{EditCommand, EditHistory};

use geo::{BoundingRect, Coord, Intersects, Rect};
use indexmap::IndexMap;

use super::feature::{Feature, FeatureId};
use super::geometry::Geometry;

/// Schnittstelle eines editierbaren Vektor-Layers.
pub trait VectorLayer {
    /// Anzeigename des Layers.
    fn name(&self) -> &str;

    /// Ob Geometrien geändert werden dürfen.
    fn is_editable(&self) -> bool {
        true
    }

    /// Skalierung Layer-Einheit → Karten-Einheit.
    fn map_units_per_layer_unit(&self) -> f64 {
        1.0
    }

    /// Rechnet eine Kartenkoordinate in Layer-Koordinaten um.
    fn map_to_layer(&self, map: Coord<f64>) -> Coord<f64> {
        let scale = self.map_units_per_layer_unit();
        Coord {
            x: map.x / scale,
            y: map.y / scale,
        }
    }

    /// Liefert ein Feature per ID.
    fn feature(&self, id: FeatureId) -> Option<&Feature>;

    /// Anzahl der Features.
    fn feature_count(&self) -> usize;

    /// IDs aller Features in Iterationsreihenfolge.
    fn feature_ids(&self) -> Vec<FeatureId>;

    /// Umschließendes Rechteck aller Geometrien (Layer-Koordinaten).
    fn extent(&self) -> Option<Rect<f64>>;

    /// Fragt Features im Filter-Rechteck ab (Iterationsreihenfolge des Layers).
    ///
    /// `exact_intersect = false` prüft nur die Bounding-Box, `true` die echte Geometrie.
    fn query_features(&self, filter: Rect<f64>, exact_intersect: bool) -> Vec<Feature>;

    /// Öffnet einen Edit-Command mit Undo-Beschriftung.
    fn begin_edit_command(&mut self, label: &str);

    /// Ersetzt die Geometrie eines Features. `false` wenn das Feature fehlt
    /// oder der Layer nicht editierbar ist.
    fn change_geometry(&mut self, id: FeatureId, geometry: Geometry) -> bool;

    /// Schließt den offenen Edit-Command ab und übernimmt alle Änderungen.
    fn end_edit_command(&mut self);

    /// Verwirft den offenen Edit-Command ohne Änderungen.
    fn destroy_edit_command(&mut self);

    /// Fordert ein Neuzeichnen des Layers an.
    fn trigger_repaint(&mut self);
}

/// Offener Edit-Command: gepufferte Geometrien bis zum Abschluss.
#[derive(Debug)]
struct PendingCommand {
    label: String,
    changes: IndexMap<FeatureId, Geometry>,
}

/// In-Memory-Vektor-Layer mit gepufferten Edit-Commands und Undo/Redo.
#[derive(Debug)]
pub struct MemoryLayer {
    name: String,
    features: IndexMap<FeatureId, Feature>,
    editable: bool,
    map_units_per_layer_unit: f64,
    pending: Option<PendingCommand>,
    history: EditHistory,
    repaint_requests: u64,
}

impl MemoryLayer {
    /// Maximale Undo-Tiefe.
    const HISTORY_DEPTH: usize = 100;

    /// Erstellt einen leeren, editierbaren Layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: IndexMap::new(),
            editable: true,
            map_units_per_layer_unit: 1.0,
            pending: None,
            history: EditHistory::new_with_capacity(Self::HISTORY_DEPTH),
            repaint_requests: 0,
        }
    }

    /// Builder: Features übernehmen (Reihenfolge = Iterationsreihenfolge).
    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        for feature in features {
            self.add_feature(feature);
        }
        self
    }

    /// Kopiert Name, Skalierung und Features eines beliebigen Layers (ohne Verlauf).
    pub fn snapshot(layer: &dyn VectorLayer) -> Self {
        let features = layer
            .feature_ids()
            .into_iter()
            .filter_map(|id| layer.feature(id).cloned())
            .collect::<Vec<_>>();
        let mut snapshot = Self::new(layer.name())
            .with_map_units_per_layer_unit(layer.map_units_per_layer_unit())
            .with_features(features);
        snapshot.editable = layer.is_editable();
        snapshot
    }

    /// Builder: Layer-zu-Karte-Skalierung setzen.
    pub fn with_map_units_per_layer_unit(mut self, scale: f64) -> Self {
        self.map_units_per_layer_unit = scale;
        self
    }

    /// Schaltet den Editiermodus.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Fügt ein Feature hinzu oder ersetzt ein vorhandenes gleicher ID.
    pub fn add_feature(&mut self, feature: Feature) {
        self.features.insert(feature.id, feature);
    }

    /// Iteriert über alle Features in Layer-Reihenfolge.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// Anzahl bisheriger Repaint-Anforderungen.
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    /// Ob gerade ein Edit-Command offen ist.
    pub fn is_edit_command_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Read-only Sicht auf die Undo/Redo-Historie.
    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    /// Macht den letzten Edit-Command rückgängig.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.history.pop_undo() else {
            return false;
        };
        self.write_geometries(command.before.iter().cloned());
        log::info!("Undo: {}", command.label);
        self.history.push_redo(command);
        true
    }

    /// Stellt den zuletzt rückgängig gemachten Edit-Command wieder her.
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.history.pop_redo() else {
            return false;
        };
        self.write_geometries(command.after.iter().cloned());
        log::info!("Redo: {}", command.label);
        self.history.push_undo(command);
        true
    }

    fn write_geometries(&mut self, geometries: impl Iterator<Item = (FeatureId, Geometry)>) {
        for (id, geometry) in geometries {
            if let Some(feature) = self.features.get_mut(&id) {
                feature.geometry = geometry;
            }
        }
    }

    fn bbox_intersects(geometry: &Geometry, filter: &Rect<f64>) -> bool {
        geometry
            .bounding_rect()
            .is_some_and(|bbox| bbox.intersects(filter))
    }
}

impl VectorLayer for MemoryLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn map_units_per_layer_unit(&self) -> f64 {
        self.map_units_per_layer_unit
    }

    fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.get(&id)
    }

    fn feature_count(&self) -> usize {
        self.features.len()
    }

    fn feature_ids(&self) -> Vec<FeatureId> {
        self.features.keys().copied().collect()
    }

    fn extent(&self) -> Option<Rect<f64>> {
        self.features
            .values()
            .filter_map(|feature| feature.geometry.bounding_rect())
            .reduce(|acc, bbox| {
                Rect::new(
                    Coord {
                        x: acc.min().x.min(bbox.min().x),
                        y: acc.min().y.min(bbox.min().y),
                    },
                    Coord {
                        x: acc.max().x.max(bbox.max().x),
                        y: acc.max().y.max(bbox.max().y),
                    },
                )
            })
    }

    fn query_features(&self, filter: Rect<f64>, exact_intersect: bool) -> Vec<Feature> {
        self.features
            .values()
            .filter(|feature| {
                if exact_intersect {
                    feature.geometry.intersects(&filter)
                } else {
                    Self::bbox_intersects(&feature.geometry, &filter)
                }
            })
            .cloned()
            .collect()
    }

    fn begin_edit_command(&mut self, label: &str) {
        if let Some(open) = self.pending.take() {
            log::warn!(
                "Edit-Command '{}' war noch offen und wird verworfen",
                open.label
            );
        }
        self.pending = Some(PendingCommand {
            label: label.to_string(),
            changes: IndexMap::new(),
        });
    }

    fn change_geometry(&mut self, id: FeatureId, geometry: Geometry) -> bool {
        if !self.editable || !self.features.contains_key(&id) {
            return false;
        }

        match self.pending.as_mut() {
            Some(pending) => {
                pending.changes.insert(id, geometry);
            }
            None => {
                // Einzeländerung ohne offenen Command wird ein eigener Command
                self.begin_edit_command("Change geometry");
                if let Some(pending) = self.pending.as_mut() {
                    pending.changes.insert(id, geometry);
                }
                self.end_edit_command();
            }
        }
        true
    }

    fn end_edit_command(&mut self) {
        let Some(pending) = self.pending.take() else {
            log::warn!("end_edit_command ohne offenen Edit-Command");
            return;
        };
        if pending.changes.is_empty() {
            return;
        }

        let mut before = Vec::with_capacity(pending.changes.len());
        let mut after = Vec::with_capacity(pending.changes.len());
        for (id, geometry) in pending.changes {
            if let Some(feature) = self.features.get_mut(&id) {
                before.push((id, std::mem::replace(&mut feature.geometry, geometry.clone())));
                after.push((id, geometry));
            }
        }

        log::debug!(
            "Edit-Command '{}' übernommen ({} Geometrien)",
            pending.label,
            after.len()
        );
        self.history.record(EditCommand {
            label: pending.label,
            before,
            after,
        });
    }

    fn destroy_edit_command(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Edit-Command '{}' verworfen", pending.label);
        }
    }

    fn trigger_repaint(&mut self) {
        self.repaint_requests += 1;
    }
}
