//! Geometrie-Klassifikation und Vertex-Zählung.

use geo::{LineString, Polygon};

/// Layer-Geometrie (immer `f64`-Koordinaten im Layer-Raum).
pub type Geometry = geo::Geometry<f64>;

/// Grobe Geometrie-Klasse, nach der Vertex-Zählung und Anzeige unterscheiden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    /// Punkt oder Multipunkt
    Point,
    /// Linie, Linienzug oder Multi-Linienzug
    Line,
    /// Polygon (auch Rect/Triangle) oder Multipolygon
    Polygon,
    /// Alles andere (z.B. GeometryCollection)
    Unknown,
}

/// Ordnet eine Geometrie ihrer Klasse zu.
pub fn geometry_kind(geometry: &Geometry) -> GeometryKind {
    match geometry {
        Geometry::Point(_) | Geometry::MultiPoint(_) => GeometryKind::Point,
        Geometry::Line(_) | Geometry::LineString(_) | Geometry::MultiLineString(_) => {
            GeometryKind::Line
        }
        Geometry::Polygon(_)
        | Geometry::MultiPolygon(_)
        | Geometry::Rect(_)
        | Geometry::Triangle(_) => GeometryKind::Polygon,
        Geometry::GeometryCollection(_) => GeometryKind::Unknown,
    }
}

/// `true` für Multi-Geometrien.
pub fn is_multipart(geometry: &Geometry) -> bool {
    matches!(
        geometry,
        Geometry::MultiPoint(_)
            | Geometry::MultiLineString(_)
            | Geometry::MultiPolygon(_)
            | Geometry::GeometryCollection(_)
    )
}

/// Zählt die Vertices einer Geometrie.
///
/// Linien: Summe über alle Teil-Linien. Polygone: Summe über alle Ringe
/// aller Teil-Polygone (inkl. schließendem Vertex). Alle anderen Typen zählen 0.
pub fn vertex_count(geometry: &Geometry) -> usize {
    match geometry {
        Geometry::Line(_) => 2,
        Geometry::LineString(line) => line_vertices(line),
        Geometry::MultiLineString(lines) => lines.0.iter().map(line_vertices).sum(),
        Geometry::Polygon(polygon) => polygon_vertices(polygon),
        Geometry::MultiPolygon(polygons) => polygons.0.iter().map(polygon_vertices).sum(),
        Geometry::Rect(rect) => polygon_vertices(&rect.to_polygon()),
        Geometry::Triangle(triangle) => polygon_vertices(&triangle.to_polygon()),
        Geometry::Point(_) | Geometry::MultiPoint(_) | Geometry::GeometryCollection(_) => 0,
    }
}

fn line_vertices(line: &LineString<f64>) -> usize {
    line.0.len()
}

fn polygon_vertices(polygon: &Polygon<f64>) -> usize {
    line_vertices(polygon.exterior()) + polygon.interiors().iter().map(line_vertices).sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, point, polygon, MultiLineString, MultiPolygon};

    #[test]
    fn counts_single_and_multi_lines() {
        let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0), (x: 2.0, y: 0.0)];
        assert_eq!(vertex_count(&Geometry::LineString(line.clone())), 3);

        let multi = MultiLineString::new(vec![line.clone(), line]);
        let geometry = Geometry::MultiLineString(multi);
        assert_eq!(vertex_count(&geometry), 6);
        assert!(is_multipart(&geometry));
        assert_eq!(geometry_kind(&geometry), GeometryKind::Line);
    }

    #[test]
    fn counts_every_ring_of_every_polygon() {
        let with_hole = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 4.0, y: 2.0), (x: 4.0, y: 4.0)]],
        );
        // Außenring 4 + Schlusspunkt, Innenring 3 + Schlusspunkt
        assert_eq!(vertex_count(&Geometry::Polygon(with_hole.clone())), 9);

        let multi = MultiPolygon::new(vec![with_hole.clone(), with_hole]);
        assert_eq!(vertex_count(&Geometry::MultiPolygon(multi)), 18);
    }

    #[test]
    fn points_count_as_zero() {
        let geometry = Geometry::Point(point!(x: 1.0, y: 2.0));
        assert_eq!(vertex_count(&geometry), 0);
        assert_eq!(geometry_kind(&geometry), GeometryKind::Point);
        assert!(!is_multipart(&geometry));
    }
}
