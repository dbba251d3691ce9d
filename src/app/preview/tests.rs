use std::sync::Arc;

use approx::assert_relative_eq;

use geo::{line_string, point, Point};
use glam::{DVec2, Vec2};

use super::{PreviewOutcome, SimplificationPreviewEngine};
use crate::app::selection::SelectionSet;
use crate::core::{
    vertex_count, DouglasPeuckerService, Feature, FeatureId, Geometry, GeometryService,
    MapViewport, MemoryLayer, ScaleToleranceConverter,
};
use crate::shared::{Tolerance, ToleranceUnit};

/// Lässt alle Geometrien mit mehr als `max_vertices` Vertices scheitern.
struct RejectLongGeometries {
    max_vertices: usize,
}

impl GeometryService for RejectLongGeometries {
    fn simplify(&self, geometry: &Geometry, tolerance: f64) -> Option<Geometry> {
        if vertex_count(geometry) > self.max_vertices {
            None
        } else {
            DouglasPeuckerService.simplify(geometry, tolerance)
        }
    }

    fn distance(&self, point: Point<f64>, other: &Geometry) -> f64 {
        DouglasPeuckerService.distance(point, other)
    }
}

fn engine_with(service: impl GeometryService + 'static) -> SimplificationPreviewEngine {
    SimplificationPreviewEngine::new(
        Arc::new(service),
        Arc::new(ScaleToleranceConverter::default()),
    )
}

fn viewport(units_per_pixel: f64) -> MapViewport {
    MapViewport::new(DVec2::ZERO, units_per_pixel, Vec2::new(200.0, 200.0))
}

/// Zickzack mit 4 Ecken und 6 fast kollinearen Zwischenpunkten.
fn zigzag(id: u64) -> Feature {
    let third = 10.0 / 3.0;
    Feature::new(
        id,
        line_string![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: third + 0.01),
            (x: 2.0, y: 2.0 * third + 0.01),
            (x: 3.0, y: 10.0),
            (x: 4.0, y: 2.0 * third + 0.01),
            (x: 5.0, y: third + 0.01),
            (x: 6.0, y: 0.0),
            (x: 7.0, y: third + 0.01),
            (x: 8.0, y: 2.0 * third + 0.01),
            (x: 9.0, y: 10.0),
        ],
    )
}

fn short_line(id: u64) -> Feature {
    Feature::new(id, line_string![(x: 0.0, y: 20.0), (x: 5.0, y: 20.0), (x: 9.0, y: 20.0)])
}

#[test]
fn zigzag_reduces_to_its_corners() {
    let layer = MemoryLayer::new("l");
    let selection: SelectionSet = [zigzag(1)].into_iter().collect();

    let preview = engine_with(DouglasPeuckerService).recompute(
        Tolerance::new(1.0, ToleranceUnit::LayerUnits),
        &layer,
        &viewport(1.0),
        &selection,
    );

    assert_eq!(preview.original_vertex_count, 10);
    assert_eq!(preview.reduced_vertex_count, 4);
    assert!(!preview.has_errors);
    assert!(preview.can_commit());
    assert_eq!(preview.status_text(), "1 feature(s): 10 to 4 vertices (40%)");
}

#[test]
fn failed_feature_sets_errors_and_keeps_the_rest() {
    let layer = MemoryLayer::new("l");
    let selection: SelectionSet = [zigzag(1), short_line(2)].into_iter().collect();

    let preview = engine_with(RejectLongGeometries { max_vertices: 5 }).recompute(
        Tolerance::default(),
        &layer,
        &viewport(1.0),
        &selection,
    );

    assert!(preview.has_errors);
    assert!(!preview.can_commit());
    assert_eq!(preview.failed_features(), vec![FeatureId(1)]);
    assert_eq!(preview.outcomes.get(&FeatureId(1)), Some(&PreviewOutcome::Failed));
    assert!(preview.simplified(FeatureId(2)).is_some());
    assert_eq!(preview.original_vertex_count, 13);
    assert_eq!(preview.reduced_vertex_count, 2);
    assert_eq!(
        preview.status_text(),
        "2 feature(s): 13 to 2 vertices (15%)\nSimplification failed!"
    );
}

#[test]
fn zero_original_vertices_report_zero_percent() {
    let layer = MemoryLayer::new("points");
    let selection: SelectionSet = [Feature::new(1, point!(x: 1.0, y: 1.0))]
        .into_iter()
        .collect();

    let preview = engine_with(DouglasPeuckerService).recompute(
        Tolerance::default(),
        &layer,
        &viewport(1.0),
        &selection,
    );

    assert_eq!(preview.remaining_percent(), 0);
    assert_eq!(preview.status_text(), "1 feature(s): 0 to 0 vertices (0%)");
}

#[test]
fn pixel_tolerance_follows_the_viewport() {
    let layer = MemoryLayer::new("l");
    let selection: SelectionSet = [zigzag(1)].into_iter().collect();
    let engine = engine_with(DouglasPeuckerService);
    let tolerance = Tolerance::new(2.0, ToleranceUnit::Pixels);

    let zoomed_in = engine.recompute(tolerance, &layer, &viewport(0.0001), &selection);
    let zoomed_out = engine.recompute(tolerance, &layer, &viewport(0.5), &selection);

    assert_relative_eq!(zoomed_in.layer_tolerance, 0.0002);
    assert_eq!(zoomed_in.reduced_vertex_count, 10);
    assert_relative_eq!(zoomed_out.layer_tolerance, 1.0);
    assert_eq!(zoomed_out.reduced_vertex_count, 4);
}

#[test]
fn recompute_is_deterministic() {
    let layer = MemoryLayer::new("l");
    let selection: SelectionSet = [zigzag(1), short_line(2)].into_iter().collect();
    let engine = engine_with(DouglasPeuckerService);

    let first = engine.recompute(Tolerance::default(), &layer, &viewport(1.0), &selection);
    let second = engine.recompute(Tolerance::default(), &layer, &viewport(1.0), &selection);

    assert_eq!(first, second);
    assert_eq!(
        first.simplified_geometries().map(|(id, _)| id).collect::<Vec<_>>(),
        vec![FeatureId(1), FeatureId(2)]
    );
}

#[test]
fn growing_tolerance_never_adds_vertices() {
    let layer = MemoryLayer::new("l");
    let selection: SelectionSet = [zigzag(1), short_line(2)].into_iter().collect();
    let engine = engine_with(DouglasPeuckerService);

    let counts: Vec<usize> = [0.0, 0.1, 0.5, 1.0, 2.0, 5.0, 20.0]
        .into_iter()
        .map(|value| {
            let preview = engine.recompute(
                Tolerance::new(value, ToleranceUnit::LayerUnits),
                &layer,
                &viewport(1.0),
                &selection,
            );
            assert!(!preview.has_errors, "Fehler bei Toleranz {value}");
            preview.reduced_vertex_count
        })
        .collect();

    assert!(
        counts.windows(2).all(|pair| pair[1] <= pair[0]),
        "Vertex-Anzahl steigt: {counts:?}"
    );
    assert!(counts[counts.len() - 1] < counts[0]);
}

#[test]
fn empty_selection_cannot_be_committed() {
    let layer = MemoryLayer::new("l");
    let preview = engine_with(DouglasPeuckerService).recompute(
        Tolerance::default(),
        &layer,
        &viewport(1.0),
        &SelectionSet::new(),
    );
    assert!(!preview.can_commit());
    assert_eq!(preview.status_text(), "0 feature(s): 0 to 0 vertices (0%)");
}
