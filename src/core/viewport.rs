//! Karten-Viewport: Umrechnung Screen-Pixel ↔ Kartenkoordinaten.

use geo::{Coord, Rect};
use glam::{DVec2, Vec2};

/// Sichtbarer Kartenausschnitt.
///
/// Screen-Koordinaten wachsen nach unten, Kartenkoordinaten nach oben.
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewport {
    /// Kartenkoordinate in der Viewport-Mitte
    pub center: DVec2,
    /// Karteneinheiten pro Screen-Pixel
    pub map_units_per_pixel: f64,
    /// Viewport-Größe in Pixeln
    pub size_px: Vec2,
}

impl MapViewport {
    /// Kleinster erlaubter Maßstab (Karteneinheiten pro Pixel).
    pub const MIN_UNITS_PER_PIXEL: f64 = 1e-9;

    /// Erstellt einen Viewport.
    pub fn new(center: DVec2, map_units_per_pixel: f64, size_px: Vec2) -> Self {
        Self {
            center,
            map_units_per_pixel: map_units_per_pixel.max(Self::MIN_UNITS_PER_PIXEL),
            size_px,
        }
    }

    /// Passt den Viewport so an, dass `extent` vollständig sichtbar ist.
    pub fn fit_to_rect(extent: Rect<f64>, size_px: Vec2) -> Self {
        let width = f64::from(size_px.x.max(1.0));
        let height = f64::from(size_px.y.max(1.0));
        let units_per_pixel = (extent.width() / width).max(extent.height() / height);
        let center = extent.center();
        Self::new(DVec2::new(center.x, center.y), units_per_pixel, size_px)
    }

    /// Screen-Pixel → Kartenkoordinate.
    pub fn screen_to_map(&self, screen_pos: Vec2) -> Coord<f64> {
        let offset = screen_pos.as_dvec2() - self.size_px.as_dvec2() * 0.5;
        Coord {
            x: self.center.x + offset.x * self.map_units_per_pixel,
            y: self.center.y - offset.y * self.map_units_per_pixel,
        }
    }

    /// Kartenkoordinate → Screen-Pixel.
    pub fn map_to_screen(&self, map: Coord<f64>) -> Vec2 {
        let half = self.size_px.as_dvec2() * 0.5;
        DVec2::new(
            (map.x - self.center.x) / self.map_units_per_pixel + half.x,
            (self.center.y - map.y) / self.map_units_per_pixel + half.y,
        )
        .as_vec2()
    }

    /// Zwei Screen-Ecken → achsparalleles Karten-Rechteck (normalisiert).
    pub fn screen_rect_to_map(&self, corner_a: Vec2, corner_b: Vec2) -> Rect<f64> {
        Rect::new(self.screen_to_map(corner_a), self.screen_to_map(corner_b))
    }
}
