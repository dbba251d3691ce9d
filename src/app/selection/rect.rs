use geo::Rect;

use crate::core::{Feature, VectorLayer};

/// Alle Features, deren Geometrie das Rechteck (Layer-Koordinaten) exakt schneidet.
pub(super) fn features_in_rect(layer: &dyn VectorLayer, rect: Rect<f64>) -> Vec<Feature> {
    let features = layer.query_features(rect, true);
    log::debug!(
        "Rechteck-Selektion: {} von {} Features",
        features.len(),
        layer.feature_count()
    );
    features
}
