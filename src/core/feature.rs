//! Features: gezeichnete Geometrien mit Stil und stabiler ID.

use super::SketchGeometry;

/// Strich-Stil eines Features (Farbe + Breite in Screen-Pixeln).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Linienfarbe (RGBA, 0.0–1.0)
    pub color: [f32; 4],
    /// Linienbreite in Screen-Pixeln
    pub width_px: f32,
}

impl StrokeStyle {
    /// Erstellt einen Stil aus Farbe und Breite.
    pub fn new(color: [f32; 4], width_px: f32) -> Self {
        Self { color, width_px }
    }
}

/// Ein Feature im Vektor-Layer: Geometrie + Stil, identifiziert per ID.
#[derive(Debug, Clone)]
pub struct Feature {
    /// Stabile ID, vergeben vom FeatureStore
    pub id: u64,
    /// Geometrie des Features
    pub geometry: SketchGeometry,
    /// Strich-Stil
    pub style: StrokeStyle,
}

impl Feature {
    /// Erstellt ein neues Feature.
    pub fn new(id: u64, geometry: SketchGeometry, style: StrokeStyle) -> Self {
        Self {
            id,
            geometry,
            style,
        }
    }
}
