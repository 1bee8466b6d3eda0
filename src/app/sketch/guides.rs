//! Achsen-Hilfslinien: vier Strahlen vom zuletzt gesetzten Stützpunkt.

use glam::Vec2;

/// Ein Hilfslinien-Segment von `start` nach `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideSegment {
    /// Startpunkt (der Anker)
    pub start: Vec2,
    /// Endpunkt in fester Distanz vom Anker
    pub end: Vec2,
}

/// Winkel der vier Hilfslinien in Grad, in fester Reihenfolge.
const GUIDE_ANGLES_DEG: [f32; 4] = [0.0, 90.0, 180.0, 270.0];

/// Erzeugt vier achsenparallele Hilfslinien-Segmente vom Anker aus.
///
/// Alle Segmente starten im Anker; die Endpunkte liegen bei 0°, 90°,
/// 180° und 270° in Distanz `length`. Rein und deterministisch.
pub fn axis_guides(anchor: Vec2, length: f32) -> [GuideSegment; 4] {
    GUIDE_ANGLES_DEG.map(|angle_deg| {
        let angle = angle_deg.to_radians();
        GuideSegment {
            start: anchor,
            end: anchor + length * Vec2::new(angle.cos(), angle.sin()),
        }
    })
}
