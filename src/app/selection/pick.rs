use geo::{Coord, Point, Rect};

use crate::core::{Feature, GeometryService, VectorLayer};

/// Sucht das Feature mit der kleinsten Distanz zu `point` (Layer-Koordinaten).
///
/// Kandidaten kommen aus einem Bounding-Box-Filter mit Kantenlänge
/// `2 * radius`; bei gleicher Distanz gewinnt der erste Kandidat.
pub(super) fn nearest_feature(
    geometry: &dyn GeometryService,
    layer: &dyn VectorLayer,
    point: Coord<f64>,
    radius: f64,
) -> Option<Feature> {
    let filter = Rect::new(
        Coord {
            x: point.x - radius,
            y: point.y - radius,
        },
        Coord {
            x: point.x + radius,
            y: point.y + radius,
        },
    );
    let query = Point::from(point);

    let mut best: Option<(f64, Feature)> = None;
    for candidate in layer.query_features(filter, false) {
        let distance = geometry.distance(query, &candidate.geometry);
        if distance.is_nan() {
            continue;
        }
        match &best {
            Some((best_distance, _)) if distance >= *best_distance => {}
            _ => best = Some((distance, candidate)),
        }
    }

    if let Some((distance, feature)) = &best {
        log::debug!("Klick-Selektion: Feature {} (Distanz {:.3})", feature.id, distance);
    }
    best.map(|(_, feature)| feature)
}
