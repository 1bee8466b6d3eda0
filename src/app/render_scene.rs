//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderScene, SceneLabel, ScenePolyline};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Zeichenreihenfolge: Features in Store-Reihenfolge (Skizzen und
/// Hilfslinien in Einfügereihenfolge), dann die halbtransparente
/// Vorschau der laufenden Skizze obendrauf.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let mut polylines: Vec<ScenePolyline> = state
        .layer
        .store
        .iter()
        .filter(|feature| feature.geometry.coords().len() >= 2)
        .map(|feature| ScenePolyline {
            points: feature.geometry.coords().to_vec(),
            style: feature.style,
            closed: feature.geometry.is_closed(),
        })
        .collect();

    if state.sketch.preview.len() >= 2 {
        polylines.push(ScenePolyline {
            points: state.sketch.preview.clone(),
            style: state.options.sketch_preview_style(),
            closed: false,
        });
    }

    let labels = state
        .view
        .overlays
        .iter()
        .map(|overlay| SceneLabel {
            anchor: overlay.anchor,
            text: overlay.text.clone(),
        })
        .collect();

    RenderScene {
        polylines,
        labels,
        view: state.view.map.clone(),
        viewport_size,
        background_color: state.options.background_color,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::SketchGeometry;
    use glam::Vec2;

    #[test]
    fn build_layers_preview_on_top_of_features() {
        let mut state = AppState::new();
        let style = state.options.sketch_style();
        state.layer.store.add(
            SketchGeometry::LineString(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]),
            style,
        );
        state.sketch.preview = vec![Vec2::ZERO, Vec2::new(3.0, 3.0)];

        let scene = build(&state, [1280.0, 720.0]);

        assert_eq!(scene.polylines.len(), 2);
        // Vorschau zuletzt, mit abgeschwächter Deckkraft
        let preview = scene.polylines.last().unwrap();
        assert!(preview.style.color[3] < style.color[3]);
        assert!(!preview.closed);
    }

    #[test]
    fn build_without_content_is_empty() {
        let state = AppState::new();
        let scene = build(&state, [800.0, 600.0]);
        assert!(scene.is_empty());
        assert_eq!(scene.viewport_size, [800.0, 600.0]);
    }
}
