//! Feature-Selektion per Klick oder Rechteck.
//!
//! Der `FeatureSelector` löst eine Screen-Geste gegen den aktiven Layer auf
//! und liefert ein `SelectionSet` inklusive der Original-Vertexzahlen.

mod pick;
mod rect;

use std::sync::Arc;

use geo::{Coord, Rect};
use glam::Vec2;
use indexmap::IndexMap;

use crate::core::{
    vertex_count, Feature, FeatureId, Geometry, GeometryService, MapViewport, ToleranceConverter,
    VectorLayer,
};

/// Ein selektiertes Feature mit Kopie der Original-Geometrie.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFeature {
    /// Feature-ID im Layer
    pub id: FeatureId,
    /// Geometrie zum Selektionszeitpunkt
    pub geometry: Geometry,
    /// Vertexzahl der Original-Geometrie (einmalig bei Selektion ermittelt)
    pub original_vertex_count: usize,
}

impl From<Feature> for SelectedFeature {
    fn from(feature: Feature) -> Self {
        let original_vertex_count = vertex_count(&feature.geometry);
        Self {
            id: feature.id,
            geometry: feature.geometry,
            original_vertex_count,
        }
    }
}

/// Geordnete Menge selektierter Features (Reihenfolge = Layer-Reihenfolge).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    features: IndexMap<FeatureId, SelectedFeature>,
    original_vertex_count: usize,
}

impl SelectionSet {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt die Anzahl selektierter Features zurück.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Summe der Original-Vertexzahlen.
    pub fn original_vertex_count(&self) -> usize {
        self.original_vertex_count
    }

    /// Selektiertes Feature per ID.
    pub fn get(&self, id: FeatureId) -> Option<&SelectedFeature> {
        self.features.get(&id)
    }

    /// Gibt `true` zurück, wenn die ID selektiert ist.
    pub fn contains(&self, id: FeatureId) -> bool {
        self.features.contains_key(&id)
    }

    /// Iteriert in Selektionsreihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedFeature> {
        self.features.values()
    }

    /// Alle selektierten IDs in Reihenfolge.
    pub fn ids(&self) -> Vec<FeatureId> {
        self.features.keys().copied().collect()
    }

    /// Leert die Selektion.
    pub fn clear(&mut self) {
        self.features.clear();
        self.original_vertex_count = 0;
    }
}

impl FromIterator<Feature> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        let mut set = Self::new();
        for feature in iter {
            let selected = SelectedFeature::from(feature);
            set.original_vertex_count += selected.original_vertex_count;
            if let Some(previous) = set.features.insert(selected.id, selected) {
                set.original_vertex_count -= previous.original_vertex_count;
            }
        }
        set
    }
}

/// Abgeschlossene Maus-Geste in Screen-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionGesture {
    /// Einzelklick
    Point(Vec2),
    /// Aufgezogenes Rechteck (beliebige Ecken-Reihenfolge)
    Rect { corner_a: Vec2, corner_b: Vec2 },
}

impl SelectionGesture {
    /// Leitet die Geste aus Drag-Start und Loslass-Position ab.
    ///
    /// Ein Rechteck ohne Breite oder Höhe wird als Klick an der
    /// Loslass-Position behandelt.
    pub fn from_drag(origin: Vec2, release: Vec2) -> Self {
        if origin.x == release.x || origin.y == release.y {
            Self::Point(release)
        } else {
            Self::Rect {
                corner_a: origin,
                corner_b: release,
            }
        }
    }
}

/// Selektiert Features des aktiven Layers.
#[derive(Clone)]
pub struct FeatureSelector {
    geometry: Arc<dyn GeometryService>,
    converter: Arc<dyn ToleranceConverter>,
}

impl FeatureSelector {
    /// Erstellt einen Selector mit den gegebenen Diensten.
    pub fn new(geometry: Arc<dyn GeometryService>, converter: Arc<dyn ToleranceConverter>) -> Self {
        Self {
            geometry,
            converter,
        }
    }

    /// Löst eine Screen-Geste gegen den Layer auf.
    pub fn select(
        &self,
        layer: &dyn VectorLayer,
        viewport: &MapViewport,
        gesture: SelectionGesture,
    ) -> SelectionSet {
        match gesture {
            SelectionGesture::Point(screen_pos) => {
                self.select_at(layer, viewport, viewport.screen_to_map(screen_pos))
            }
            SelectionGesture::Rect { corner_a, corner_b } => {
                self.select_in_rect(layer, viewport.screen_rect_to_map(corner_a, corner_b))
            }
        }
    }

    /// Nächstgelegenes Feature innerhalb des Suchradius um `map_point`.
    pub fn select_at(
        &self,
        layer: &dyn VectorLayer,
        viewport: &MapViewport,
        map_point: Coord<f64>,
    ) -> SelectionSet {
        let radius = self.converter.vertex_search_radius(layer, viewport);
        let layer_point = layer.map_to_layer(map_point);
        pick::nearest_feature(self.geometry.as_ref(), layer, layer_point, radius)
            .into_iter()
            .collect()
    }

    /// Alle Features, deren Geometrie das Karten-Rechteck schneidet.
    pub fn select_in_rect(&self, layer: &dyn VectorLayer, map_rect: Rect<f64>) -> SelectionSet {
        let layer_rect = Rect::new(
            layer.map_to_layer(map_rect.min()),
            layer.map_to_layer(map_rect.max()),
        );
        rect::features_in_rect(layer, layer_rect).into_iter().collect()
    }
}
