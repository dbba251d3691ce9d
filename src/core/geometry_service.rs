//! Geometrie-Dienst: Vereinfachung und Punkt-Distanz.
//!
//! Der Werkzeug-Code kennt nur den `GeometryService`-Trait. Die Standard-
//! Implementierung nutzt Douglas-Peucker aus `geo`.

use geo::{
    Distance, Euclidean, LineString, MultiLineString, MultiPolygon, Point, Polygon, Simplify,
};

use super::geometry::Geometry;

/// Schnittstelle zum externen Geometrie-Backend.
pub trait GeometryService: Send + Sync {
    /// Vereinfacht eine Geometrie mit der Toleranz in Layer-Einheiten.
    ///
    /// `None` bedeutet: Vereinfachung fehlgeschlagen (Ergebnis ungültig).
    fn simplify(&self, geometry: &Geometry, tolerance: f64) -> Option<Geometry>;

    /// Euklidische Distanz eines Punktes zur Geometrie.
    fn distance(&self, point: Point<f64>, other: &Geometry) -> f64;
}

/// Douglas-Peucker-Vereinfachung über `geo::Simplify`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DouglasPeuckerService;

impl DouglasPeuckerService {
    /// Minimale Vertex-Anzahl eines gültigen Linienzugs.
    const MIN_LINE_VERTICES: usize = 2;
    /// Minimale Vertex-Anzahl eines gültigen Rings (inkl. Schlusspunkt).
    const MIN_RING_VERTICES: usize = 4;

    fn simplify_line(line: &LineString<f64>, tolerance: f64) -> Option<LineString<f64>> {
        let simplified = line.simplify(&tolerance);
        (simplified.0.len() >= Self::MIN_LINE_VERTICES).then_some(simplified)
    }

    fn simplify_polygon(polygon: &Polygon<f64>, tolerance: f64) -> Option<Polygon<f64>> {
        let exterior = polygon.exterior().simplify(&tolerance);
        if exterior.0.len() < Self::MIN_RING_VERTICES {
            return None;
        }
        // Kollabierte Innenringe fallen weg, der Außenring bleibt gültig
        let interiors = polygon
            .interiors()
            .iter()
            .map(|ring| ring.simplify(&tolerance))
            .filter(|ring| ring.0.len() >= Self::MIN_RING_VERTICES)
            .collect();
        Some(Polygon::new(exterior, interiors))
    }
}

impl GeometryService for DouglasPeuckerService {
    fn simplify(&self, geometry: &Geometry, tolerance: f64) -> Option<Geometry> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return None;
        }

        match geometry {
            Geometry::Point(_) | Geometry::MultiPoint(_) | Geometry::Line(_) => {
                Some(geometry.clone())
            }
            Geometry::LineString(line) => {
                Self::simplify_line(line, tolerance).map(Geometry::LineString)
            }
            Geometry::MultiLineString(lines) => lines
                .0
                .iter()
                .map(|line| Self::simplify_line(line, tolerance))
                .collect::<Option<Vec<_>>>()
                .map(|parts| Geometry::MultiLineString(MultiLineString::new(parts))),
            Geometry::Polygon(polygon) => {
                Self::simplify_polygon(polygon, tolerance).map(Geometry::Polygon)
            }
            Geometry::MultiPolygon(polygons) => polygons
                .0
                .iter()
                .map(|polygon| Self::simplify_polygon(polygon, tolerance))
                .collect::<Option<Vec<_>>>()
                .map(|parts| Geometry::MultiPolygon(MultiPolygon::new(parts))),
            Geometry::Rect(rect) => {
                Self::simplify_polygon(&rect.to_polygon(), tolerance).map(Geometry::Polygon)
            }
            Geometry::Triangle(triangle) => {
                Self::simplify_polygon(&triangle.to_polygon(), tolerance).map(Geometry::Polygon)
            }
            Geometry::GeometryCollection(_) => None,
        }
    }

    fn distance(&self, point: Point<f64>, other: &Geometry) -> f64 {
        match other {
            Geometry::Point(p) => Euclidean::distance(&point, p),
            Geometry::MultiPoint(mp) => Euclidean::distance(&point, mp),
            Geometry::Line(line) => Euclidean::distance(&point, line),
            Geometry::LineString(line) => Euclidean::distance(&point, line),
            Geometry::MultiLineString(lines) => Euclidean::distance(&point, lines),
            Geometry::Polygon(polygon) => Euclidean::distance(&point, polygon),
            Geometry::MultiPolygon(polygons) => Euclidean::distance(&point, polygons),
            Geometry::Rect(rect) => Euclidean::distance(&point, &rect.to_polygon()),
            Geometry::Triangle(triangle) => Euclidean::distance(&point, &triangle.to_polygon()),
            Geometry::GeometryCollection(collection) => collection
                .0
                .iter()
                .map(|member| self.distance(point, member))
                .fold(f64::INFINITY, f64::min),
        }
    }
}
