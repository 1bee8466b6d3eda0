//! Zeichen-Interaction: Klick-für-Klick-Gesten für Linien und Polygone.

use glam::Vec2;

use crate::app::events::MapEvent;
use crate::core::{SketchGeometry, SketchKind};

use super::{Interaction, InteractionEffect, MapContext};

/// Erkennt Zeichengesten und meldet Geometrie-Änderungen als Effekte.
///
/// Die Koordinaten-Sequenz hält am Ende immer den provisorischen
/// Cursor-Punkt, sobald sich der Pointer nach dem Gestenstart bewegt
/// hat. Ein Klick setzt den provisorischen Punkt fest und beginnt einen
/// neuen; Doppelklick oder eine Abschluss-Anforderung beenden die Geste.
pub struct DrawInteraction {
    kind: SketchKind,
    coords: Vec<Vec2>,
    drawing: bool,
}

impl DrawInteraction {
    /// Erstellt eine Zeichen-Interaction für die gegebene Geometrie-Art.
    pub fn new(kind: SketchKind) -> Self {
        Self {
            kind,
            coords: Vec::new(),
            drawing: false,
        }
    }

    /// Gibt `true` zurück, solange eine Geste läuft.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Geometrie-Art dieser Interaction.
    pub fn kind(&self) -> SketchKind {
        self.kind
    }

    /// Beginnt eine Geste mit dem ersten Stützpunkt.
    fn start(&mut self, pos: Vec2) -> Vec<InteractionEffect> {
        self.drawing = true;
        self.coords = vec![pos];
        vec![
            InteractionEffect::SketchStarted { kind: self.kind },
            InteractionEffect::SketchChanged {
                coords: self.coords.clone(),
            },
        ]
    }

    /// Setzt den provisorischen Punkt fest und beginnt den nächsten.
    fn commit_vertex(&mut self, pos: Vec2) -> Vec<InteractionEffect> {
        if self.coords.len() == 1 {
            self.coords.push(pos);
        } else if let Some(last) = self.coords.last_mut() {
            *last = pos;
        }
        self.coords.push(pos);
        vec![InteractionEffect::SketchChanged {
            coords: self.coords.clone(),
        }]
    }

    /// Bewegt den provisorischen Cursor-Punkt.
    fn move_cursor(&mut self, pos: Vec2) -> Vec<InteractionEffect> {
        if self.coords.len() == 1 {
            self.coords.push(pos);
        } else if let Some(last) = self.coords.last_mut() {
            *last = pos;
        }
        vec![InteractionEffect::SketchChanged {
            coords: self.coords.clone(),
        }]
    }

    /// Schließt die Geste ab; bei zu wenigen Punkten wird verworfen.
    fn finalize(&mut self) -> Vec<InteractionEffect> {
        if !self.drawing {
            return Vec::new();
        }

        let mut committed = std::mem::take(&mut self.coords);
        self.drawing = false;
        // Den provisorischen Cursor-Punkt verwerfen
        if committed.len() >= 2 {
            committed.pop();
        }

        if committed.len() >= self.kind.min_vertices() {
            vec![InteractionEffect::SketchFinished {
                geometry: SketchGeometry::from_coords(self.kind, committed),
            }]
        } else {
            vec![InteractionEffect::SketchAborted]
        }
    }

    /// Verwirft die laufende Geste.
    fn abort(&mut self) -> Vec<InteractionEffect> {
        if !self.drawing {
            return Vec::new();
        }
        self.drawing = false;
        self.coords.clear();
        vec![InteractionEffect::SketchAborted]
    }
}

impl Interaction for DrawInteraction {
    fn name(&self) -> &str {
        match self.kind {
            SketchKind::Line => "draw_line",
            SketchKind::Polygon => "draw_polygon",
        }
    }

    fn handle_event(&mut self, event: &MapEvent, _ctx: &MapContext) -> Vec<InteractionEffect> {
        match event {
            MapEvent::PointerClick { pos } => {
                if self.drawing {
                    self.commit_vertex(*pos)
                } else {
                    self.start(*pos)
                }
            }
            MapEvent::PointerMove { pos } => {
                if self.drawing {
                    self.move_cursor(*pos)
                } else {
                    Vec::new()
                }
            }
            // Der erste Klick des Doppelklick-Paars hat den Punkt bereits
            // festgesetzt; hier wird nur noch abgeschlossen.
            MapEvent::PointerDoubleClick { .. } | MapEvent::FinishSketch => self.finalize(),
            MapEvent::AbortSketch => self.abort(),
            _ => Vec::new(),
        }
    }

    fn on_remove(&mut self) -> Vec<InteractionEffect> {
        self.abort()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeatureStore;

    fn ctx(store: &FeatureStore) -> MapContext<'_> {
        MapContext {
            store,
            snap_tolerance: 1.0,
        }
    }

    fn changed_coords(effects: &[InteractionEffect]) -> Option<Vec<Vec2>> {
        effects.iter().find_map(|e| match e {
            InteractionEffect::SketchChanged { coords } => Some(coords.clone()),
            _ => None,
        })
    }

    #[test]
    fn click_move_click_builds_expected_sequence() {
        let store = FeatureStore::new();
        let ctx = ctx(&store);
        let mut draw = DrawInteraction::new(SketchKind::Line);

        let effects = draw.handle_event(&MapEvent::PointerClick { pos: Vec2::ZERO }, &ctx);
        assert!(matches!(effects[0], InteractionEffect::SketchStarted { .. }));
        assert_eq!(changed_coords(&effects).unwrap(), vec![Vec2::ZERO]);
        assert!(draw.is_drawing());

        let effects = draw.handle_event(
            &MapEvent::PointerMove {
                pos: Vec2::new(5.0, 5.0),
            },
            &ctx,
        );
        assert_eq!(
            changed_coords(&effects).unwrap(),
            vec![Vec2::ZERO, Vec2::new(5.0, 5.0)]
        );

        let effects = draw.handle_event(
            &MapEvent::PointerClick {
                pos: Vec2::new(5.0, 5.0),
            },
            &ctx,
        );
        // Festgesetzter Punkt + neuer provisorischer Punkt
        assert_eq!(
            changed_coords(&effects).unwrap(),
            vec![Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0)]
        );
    }

    #[test]
    fn finish_drops_provisional_point() {
        let store = FeatureStore::new();
        let ctx = ctx(&store);
        let mut draw = DrawInteraction::new(SketchKind::Line);

        draw.handle_event(&MapEvent::PointerClick { pos: Vec2::ZERO }, &ctx);
        draw.handle_event(
            &MapEvent::PointerMove {
                pos: Vec2::new(10.0, 0.0),
            },
            &ctx,
        );
        draw.handle_event(
            &MapEvent::PointerClick {
                pos: Vec2::new(10.0, 0.0),
            },
            &ctx,
        );

        let effects = draw.handle_event(&MapEvent::FinishSketch, &ctx);
        let geometry = match &effects[0] {
            InteractionEffect::SketchFinished { geometry } => geometry.clone(),
            other => panic!("SketchFinished erwartet, war {other:?}"),
        };
        assert_eq!(geometry.coords(), &[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
        assert!(!draw.is_drawing());
    }

    #[test]
    fn too_few_vertices_abort_instead_of_finishing() {
        let store = FeatureStore::new();
        let ctx = ctx(&store);

        // Linie mit nur einem festen Punkt
        let mut line = DrawInteraction::new(SketchKind::Line);
        line.handle_event(&MapEvent::PointerClick { pos: Vec2::ZERO }, &ctx);
        let effects = line.handle_event(&MapEvent::FinishSketch, &ctx);
        assert_eq!(effects, vec![InteractionEffect::SketchAborted]);

        // Polygon mit nur zwei festen Punkten
        let mut poly = DrawInteraction::new(SketchKind::Polygon);
        poly.handle_event(&MapEvent::PointerClick { pos: Vec2::ZERO }, &ctx);
        poly.handle_event(&MapEvent::PointerMove { pos: Vec2::X }, &ctx);
        poly.handle_event(&MapEvent::PointerClick { pos: Vec2::X }, &ctx);
        let effects = poly.handle_event(&MapEvent::FinishSketch, &ctx);
        assert_eq!(effects, vec![InteractionEffect::SketchAborted]);
    }

    #[test]
    fn polygon_finish_produces_unclosed_ring() {
        let store = FeatureStore::new();
        let ctx = ctx(&store);
        let mut poly = DrawInteraction::new(SketchKind::Polygon);

        for pos in [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)] {
            poly.handle_event(&MapEvent::PointerMove { pos }, &ctx);
            poly.handle_event(&MapEvent::PointerClick { pos }, &ctx);
        }

        let effects = poly.handle_event(&MapEvent::FinishSketch, &ctx);
        let geometry = match &effects[0] {
            InteractionEffect::SketchFinished { geometry } => geometry.clone(),
            other => panic!("SketchFinished erwartet, war {other:?}"),
        };
        assert!(geometry.is_closed());
        assert_eq!(geometry.coords().len(), 3);
    }

    #[test]
    fn abort_discards_and_removal_aborts() {
        let store = FeatureStore::new();
        let ctx = ctx(&store);
        let mut draw = DrawInteraction::new(SketchKind::Line);

        draw.handle_event(&MapEvent::PointerClick { pos: Vec2::ZERO }, &ctx);
        let effects = draw.handle_event(&MapEvent::AbortSketch, &ctx);
        assert_eq!(effects, vec![InteractionEffect::SketchAborted]);
        assert!(!draw.is_drawing());

        // Ohne laufende Geste ist on_remove ein No-op
        assert!(draw.on_remove().is_empty());

        draw.handle_event(&MapEvent::PointerClick { pos: Vec2::ZERO }, &ctx);
        assert_eq!(draw.on_remove(), vec![InteractionEffect::SketchAborted]);
    }
}
