//! Karten-Ansicht: Zentrum + Zoomstufe, Umrechnung Screen ↔ Welt.

use glam::Vec2;

/// Ansicht auf die Karte in projizierten Koordinaten.
///
/// Arbeitet mit Zoomstufen wie eine Slippy-Map: die Auflösung halbiert
/// sich pro Stufe. Kachel-Rendering und Lon/Lat-Projektion finden hier
/// nicht statt — die Ansicht kennt nur Weltkoordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Zentrum der Ansicht in Weltkoordinaten
    pub center: Vec2,
    /// Zoomstufe (Auflösung = BASE_RESOLUTION / 2^zoom)
    pub zoom: f32,
}

impl MapView {
    /// Welteinheiten pro Pixel bei Zoomstufe 0.
    pub const BASE_RESOLUTION: f32 = 156_543.034;
    /// Minimale Zoomstufe.
    pub const ZOOM_MIN: f32 = 0.0;
    /// Maximale Zoomstufe.
    pub const ZOOM_MAX: f32 = 22.0;

    /// Erstellt eine Ansicht mit gegebenem Zentrum und Zoom.
    pub fn new(center: Vec2, zoom: f32) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Welteinheiten pro Screen-Pixel bei der aktuellen Zoomstufe.
    pub fn resolution(&self) -> f32 {
        Self::BASE_RESOLUTION / 2f32.powf(self.zoom)
    }

    /// Verschiebt das Zentrum um ein Welt-Delta.
    pub fn pan(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Ändert die Zoomstufe um `delta_levels` (geclampt).
    pub fn zoom_by(&mut self, delta_levels: f32) {
        self.zoom = (self.zoom + delta_levels).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt um `delta_levels` und hält dabei `focus` (Welt) auf derselben
    /// Screen-Position fest.
    pub fn zoom_towards(&mut self, delta_levels: f32, focus: Vec2) {
        let old_resolution = self.resolution();
        self.zoom_by(delta_levels);
        let scale = self.resolution() / old_resolution;
        self.center = focus - (focus - self.center) * scale;
    }

    /// Rechnet eine Screen-Position (Pixel, Ursprung oben links) in
    /// Weltkoordinaten um. Die Welt-Y-Achse zeigt nach oben.
    pub fn screen_to_world(&self, screen_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        let resolution = self.resolution();
        let offset = screen_pos - viewport_size * 0.5;
        Vec2::new(
            self.center.x + offset.x * resolution,
            self.center.y - offset.y * resolution,
        )
    }

    /// Rechnet Weltkoordinaten in eine Screen-Position um.
    pub fn world_to_screen(&self, world_pos: Vec2, viewport_size: Vec2) -> Vec2 {
        let resolution = self.resolution();
        Vec2::new(
            (world_pos.x - self.center.x) / resolution + viewport_size.x * 0.5,
            (self.center.y - world_pos.y) / resolution + viewport_size.y * 0.5,
        )
    }

    /// Rechnet einen Pixel-Radius in Welteinheiten um (z.B. Snap-Toleranz).
    pub fn pixels_to_world(&self, pixels: f32) -> f32 {
        pixels * self.resolution()
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }
}
