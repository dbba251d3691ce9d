//! TOML-Dateiformat für `MemoryLayer`.

use std::path::Path;

use anyhow::Context;
use geo::{Coord, LineString, MultiLineString, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

use super::{MemoryLayer, VectorLayer};
use crate::core::{Feature, FeatureId, Geometry};

type Xy = [f64; 2];

/// Geometrie-Datensatz in der Layer-Datei.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum GeometryRecord {
    Point { coords: Xy },
    LineString { coords: Vec<Xy> },
    MultiLineString { parts: Vec<Vec<Xy>> },
    Polygon { rings: Vec<Vec<Xy>> },
    MultiPolygon { polygons: Vec<Vec<Vec<Xy>>> },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct FeatureRecord {
    id: u64,
    geometry: GeometryRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct LayerFile {
    name: String,
    #[serde(default = "default_scale")]
    map_units_per_layer_unit: f64,
    #[serde(default)]
    features: Vec<FeatureRecord>,
}

fn default_scale() -> f64 {
    1.0
}

fn to_line(coords: &[Xy]) -> LineString<f64> {
    LineString::new(coords.iter().map(|&[x, y]| Coord { x, y }).collect())
}

fn from_line(line: &LineString<f64>) -> Vec<Xy> {
    line.0.iter().map(|c| [c.x, c.y]).collect()
}

fn to_polygon(rings: &[Vec<Xy>]) -> Polygon<f64> {
    let mut rings = rings.iter().map(|ring| to_line(ring));
    let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
    Polygon::new(exterior, rings.collect())
}

fn from_polygon(polygon: &Polygon<f64>) -> Vec<Vec<Xy>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(from_line)
        .collect()
}

impl GeometryRecord {
    fn to_geometry(&self) -> Geometry {
        match self {
            GeometryRecord::Point { coords: [x, y] } => Geometry::Point(Point::new(*x, *y)),
            GeometryRecord::LineString { coords } => Geometry::LineString(to_line(coords)),
            GeometryRecord::MultiLineString { parts } => Geometry::MultiLineString(
                MultiLineString::new(parts.iter().map(|part| to_line(part)).collect()),
            ),
            GeometryRecord::Polygon { rings } => Geometry::Polygon(to_polygon(rings)),
            GeometryRecord::MultiPolygon { polygons } => Geometry::MultiPolygon(
                MultiPolygon::new(polygons.iter().map(|p| to_polygon(p)).collect()),
            ),
        }
    }

    /// Wandelt eine Geometrie in einen Datensatz. `None` für nicht speicherbare Typen.
    fn from_geometry(geometry: &Geometry) -> Option<Self> {
        let record = match geometry {
            Geometry::Point(p) => GeometryRecord::Point {
                coords: [p.x(), p.y()],
            },
            Geometry::Line(line) => GeometryRecord::LineString {
                coords: vec![[line.start.x, line.start.y], [line.end.x, line.end.y]],
            },
            Geometry::LineString(line) => GeometryRecord::LineString {
                coords: from_line(line),
            },
            Geometry::MultiLineString(lines) => GeometryRecord::MultiLineString {
                parts: lines.0.iter().map(from_line).collect(),
            },
            Geometry::Polygon(polygon) => GeometryRecord::Polygon {
                rings: from_polygon(polygon),
            },
            Geometry::MultiPolygon(polygons) => GeometryRecord::MultiPolygon {
                polygons: polygons.0.iter().map(from_polygon).collect(),
            },
            Geometry::Rect(rect) => GeometryRecord::Polygon {
                rings: from_polygon(&rect.to_polygon()),
            },
            Geometry::Triangle(triangle) => GeometryRecord::Polygon {
                rings: from_polygon(&triangle.to_polygon()),
            },
            Geometry::MultiPoint(_) | Geometry::GeometryCollection(_) => return None,
        };
        Some(record)
    }
}

impl MemoryLayer {
    /// Parst einen Layer aus TOML-Text.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let file: LayerFile = toml::from_str(content).context("Layer-Datei fehlerhaft")?;
        let features = file
            .features
            .iter()
            .map(|record| Feature {
                id: FeatureId(record.id),
                geometry: record.geometry.to_geometry(),
            })
            .collect::<Vec<_>>();

        Ok(MemoryLayer::new(file.name)
            .with_map_units_per_layer_unit(file.map_units_per_layer_unit)
            .with_features(features))
    }

    /// Serialisiert den Layer als TOML-Text.
    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        let features = self
            .features()
            .filter_map(|feature| match GeometryRecord::from_geometry(&feature.geometry) {
                Some(geometry) => Some(FeatureRecord {
                    id: feature.id.0,
                    geometry,
                }),
                None => {
                    log::warn!(
                        "Feature {} hat keinen speicherbaren Geometrietyp, wird ausgelassen",
                        feature.id
                    );
                    None
                }
            })
            .collect();

        let file = LayerFile {
            name: self.name().to_string(),
            map_units_per_layer_unit: self.map_units_per_layer_unit(),
            features,
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// Lädt einen Layer aus einer TOML-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Layer-Datei nicht lesbar: {}", path.display()))?;
        let layer = Self::from_toml_str(&content)?;
        log::info!(
            "Layer '{}' geladen aus {} ({} Features)",
            layer.name(),
            path.display(),
            layer.feature_count()
        );
        Ok(layer)
    }

    /// Speichert den Layer als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)
            .with_context(|| format!("Layer-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Layer '{}' gespeichert nach: {}", self.name(), path.display());
        Ok(())
    }
}
