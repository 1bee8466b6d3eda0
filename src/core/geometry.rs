//! Skizzen-Geometrien: Linienzug und Polygon.

use glam::Vec2;

/// Geometrie-Art einer Skizze (Werkzeug-Auswahl).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchKind {
    /// Offener Linienzug
    Line,
    /// Geschlossenes Polygon (äußerer Ring)
    Polygon,
}

impl SketchKind {
    /// Anzeigename für Toolbar und Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            SketchKind::Line => "Linie",
            SketchKind::Polygon => "Polygon",
        }
    }

    /// Minimale Anzahl fester Stützpunkte für eine gültige Geometrie.
    pub fn min_vertices(&self) -> usize {
        match self {
            SketchKind::Line => 2,
            SketchKind::Polygon => 3,
        }
    }
}

/// Geometrie eines Features.
///
/// Polygon-Ringe werden unverschlossen gespeichert; die Schlusskante
/// ergibt sich aus der Geometrie-Art.
#[derive(Debug, Clone, PartialEq)]
pub enum SketchGeometry {
    /// Offener Linienzug
    LineString(Vec<Vec2>),
    /// Äußerer Polygon-Ring (unverschlossen)
    Polygon(Vec<Vec2>),
}

impl SketchGeometry {
    /// Baut eine Geometrie aus Stützpunkten und Geometrie-Art.
    pub fn from_coords(kind: SketchKind, coords: Vec<Vec2>) -> Self {
        match kind {
            SketchKind::Line => SketchGeometry::LineString(coords),
            SketchKind::Polygon => SketchGeometry::Polygon(coords),
        }
    }

    /// Gibt die Geometrie-Art zurück.
    pub fn kind(&self) -> SketchKind {
        match self {
            SketchGeometry::LineString(_) => SketchKind::Line,
            SketchGeometry::Polygon(_) => SketchKind::Polygon,
        }
    }

    /// Koordinaten-Sequenz (bei Polygonen der äußere Ring).
    pub fn coords(&self) -> &[Vec2] {
        match self {
            SketchGeometry::LineString(coords) => coords,
            SketchGeometry::Polygon(ring) => ring,
        }
    }

    /// Gibt `true` zurück wenn die Geometrie geschlossen gezeichnet wird.
    pub fn is_closed(&self) -> bool {
        matches!(self, SketchGeometry::Polygon(_))
    }

    /// Iteriert über alle Kanten; bei Polygonen inklusive Schlusskante.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let coords = self.coords();
        let open_edges = coords.windows(2).map(|pair| (pair[0], pair[1]));
        let closing = if self.is_closed() && coords.len() >= 3 {
            Some((coords[coords.len() - 1], coords[0]))
        } else {
            None
        };
        open_edges.chain(closing)
    }

    /// Gesamtlänge in Welteinheiten (Polygon: Ring-Umfang).
    pub fn total_length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}
