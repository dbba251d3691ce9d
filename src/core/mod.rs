//! Core-Domänentypen: Features, Geometrie, Layer, Viewport, Toleranz-Umrechnung.

pub mod feature;
pub mod geometry;
pub mod geometry_service;
pub mod layer;
pub mod tolerance;
pub mod viewport;

pub use feature::{Feature, FeatureId};
pub use geometry::{geometry_kind, is_multipart, vertex_count, Geometry, GeometryKind};
pub use geometry_service::{DouglasPeuckerService, GeometryService};
pub use layer::{EditCommand, EditHistory, MemoryLayer, VectorLayer};
pub use tolerance::{ScaleToleranceConverter, ToleranceConverter};
pub use viewport::MapViewport;
