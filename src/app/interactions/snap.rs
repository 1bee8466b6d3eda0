//! Snap-Interaction: zieht den Pointer auf Stützpunkte und Kanten.

use glam::Vec2;

use crate::app::events::MapEvent;
use crate::core::FeatureStore;

use super::{Interaction, InteractionEffect, MapContext};

/// Korrigiert Pointer-Positionen auf die Features des Stores.
///
/// Stützpunkte haben Vorrang vor Kanten. Während einer Zeichengeste
/// liegen auch die Hilfslinien im Store — darüber rastet der nächste
/// Stützpunkt auf den Achsen des Ankers ein.
#[derive(Debug, Default)]
pub struct SnapInteraction;

impl SnapInteraction {
    /// Erstellt die Snap-Interaction.
    pub fn new() -> Self {
        Self
    }
}

impl Interaction for SnapInteraction {
    fn name(&self) -> &str {
        "snap"
    }

    fn adjust_pointer(&self, pos: Vec2, ctx: &MapContext) -> Option<Vec2> {
        snap_to_features(pos, ctx.store, ctx.snap_tolerance)
    }

    fn handle_event(&mut self, _event: &MapEvent, _ctx: &MapContext) -> Vec<InteractionEffect> {
        // Snap korrigiert nur Positionen, verarbeitet keine Events selbst
        Vec::new()
    }
}

/// Sucht das nächstgelegene Snap-Ziel innerhalb der Toleranz.
///
/// Erst Stützpunkte über den Vertex-Index, dann der nächstgelegene
/// Punkt auf einer Feature-Kante. `None` wenn nichts in Reichweite ist.
pub fn snap_to_features(pos: Vec2, store: &FeatureStore, tolerance: f32) -> Option<Vec2> {
    if let Some(hit) = store.vertex_index().nearest(pos) {
        if hit.distance <= tolerance {
            return Some(hit.position);
        }
    }

    let mut best: Option<(f32, Vec2)> = None;
    for feature in store.iter() {
        for (a, b) in feature.geometry.segments() {
            let candidate = closest_point_on_segment(pos, a, b);
            let distance = pos.distance(candidate);
            if distance <= tolerance && best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, candidate));
            }
        }
    }
    best.map(|(_, point)| point)
}

/// Projiziert `point` auf das Segment `a`–`b` (geclampt auf die Enden).
fn closest_point_on_segment(point: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let length_sq = ab.length_squared();
    if length_sq <= f32::EPSILON {
        return a;
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SketchGeometry, StrokeStyle};
    use approx::assert_relative_eq;

    fn store_with_line(a: Vec2, b: Vec2) -> FeatureStore {
        let mut store = FeatureStore::new();
        store.add(
            SketchGeometry::LineString(vec![a, b]),
            StrokeStyle::new([0.0, 0.0, 0.0, 1.0], 1.0),
        );
        store.ensure_spatial_index();
        store
    }

    #[test]
    fn vertex_snap_has_priority_over_edge() {
        let store = store_with_line(Vec2::ZERO, Vec2::new(100.0, 0.0));
        // Punkt nahe am Stützpunkt (0,0), aber auch nahe an der Kante
        let snapped = snap_to_features(Vec2::new(0.4, 0.4), &store, 1.0).unwrap();
        assert_eq!(snapped, Vec2::ZERO);
    }

    #[test]
    fn edge_snap_projects_onto_segment() {
        let store = store_with_line(Vec2::ZERO, Vec2::new(100.0, 0.0));
        let snapped = snap_to_features(Vec2::new(50.0, 0.8), &store, 1.0).unwrap();
        assert_relative_eq!(snapped.x, 50.0, epsilon = 0.01);
        assert_relative_eq!(snapped.y, 0.0, epsilon = 0.01);
    }

    #[test]
    fn outside_tolerance_returns_none() {
        let store = store_with_line(Vec2::ZERO, Vec2::new(100.0, 0.0));
        assert!(snap_to_features(Vec2::new(50.0, 5.0), &store, 1.0).is_none());
    }

    #[test]
    fn polygon_closing_edge_is_a_snap_target() {
        let mut store = FeatureStore::new();
        store.add(
            SketchGeometry::Polygon(vec![Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)]),
            StrokeStyle::new([0.0, 0.0, 0.0, 1.0], 1.0),
        );
        store.ensure_spatial_index();

        // Punkt nahe der Schlusskante (10,10)→(0,0)
        let snapped = snap_to_features(Vec2::new(5.2, 4.8), &store, 0.5).unwrap();
        assert_relative_eq!(snapped.x, 5.0, epsilon = 0.01);
        assert_relative_eq!(snapped.y, 5.0, epsilon = 0.01);
    }

    #[test]
    fn degenerate_segment_snaps_to_its_point() {
        let point = Vec2::new(3.0, 3.0);
        assert_eq!(
            closest_point_on_segment(Vec2::new(3.4, 3.0), point, point),
            point
        );
    }
}
