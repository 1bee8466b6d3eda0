//! Handler für Karten-Events: Registry-Dispatch und Effekt-Anwendung.

use crate::app::interactions::{InteractionEffect, MapContext};
use crate::app::{AppState, MapEvent};
use crate::core::MapOverlay;

/// Schickt ein Karten-Event durch die Interaction-Registry und wendet
/// die zurückgegebenen Effekte auf den AppState an.
pub fn dispatch(state: &mut AppState, event: MapEvent) {
    if let MapEvent::PointerMove { pos } = &event {
        state.view.pointer_world = Some(*pos);
    }

    let snap_tolerance = state
        .view
        .map
        .pixels_to_world(state.options.snap_tolerance_px);

    let effects = {
        let ctx = MapContext {
            store: &state.layer.store,
            snap_tolerance,
        };
        state.interactions.dispatch(&event, &ctx)
    };

    apply_effects(state, effects);
    state.layer.store.ensure_spatial_index();
}

/// Wendet Interaction-Effekte zentral auf den AppState an.
///
/// Skizzen-Effekte laufen durch die DrawSession (Hilfslinien-Lebenszyklus)
/// und den Vorschau-Zustand; fertige Geometrien landen als Feature im
/// Store und bekommen eine Längen-Beschriftung als Overlay.
pub fn apply_effects(state: &mut AppState, effects: Vec<InteractionEffect>) {
    for effect in effects {
        match effect {
            InteractionEffect::PanBy { delta } => {
                state.view.map.pan(delta);
            }
            InteractionEffect::ZoomBy {
                delta_levels,
                focus,
            } => {
                state.view.map.zoom_towards(delta_levels, focus);
            }
            InteractionEffect::SketchStarted { kind } => {
                if let Some(session) = state.sketch.session.as_mut() {
                    session.begin();
                }
                state.sketch.preview.clear();
                log::debug!("Zeichengeste gestartet: {}", kind.label());
            }
            InteractionEffect::SketchChanged { coords } => {
                if let Some(session) = state.sketch.session.as_mut() {
                    session.on_geometry_change(&coords, &mut state.layer.store);
                }
                state.sketch.preview = coords;
            }
            InteractionEffect::SketchFinished { geometry } => {
                if let Some(session) = state.sketch.session.as_mut() {
                    session.finish(&mut state.layer.store);
                }
                state.sketch.preview.clear();

                if let Some(&anchor) = geometry.coords().last() {
                    state
                        .view
                        .overlays
                        .push(MapOverlay::length_label(anchor, geometry.total_length()));
                }

                let style = state.options.sketch_style();
                let id = state.layer.store.add(geometry, style);
                log::info!("Skizze abgeschlossen: Feature {}", id);
            }
            InteractionEffect::SketchAborted => {
                if let Some(session) = state.sketch.session.as_mut() {
                    session.finish(&mut state.layer.store);
                }
                state.sketch.preview.clear();
                log::debug!("Zeichengeste verworfen");
            }
        }
    }
}
