//! Handler für Werkzeug-Auswahl und das Leeren des Widgets.

use super::map_events;
use crate::app::interactions::{DrawInteraction, SnapInteraction};
use crate::app::sketch::DrawSession;
use crate::app::AppState;
use crate::core::SketchKind;

/// Aktiviert ein Zeichenwerkzeug (Linie oder Polygon).
///
/// Entfernt zuerst alle Session-Interactions des vorherigen Werkzeugs —
/// deren Aufräum-Effekte brechen eine laufende Geste ab und räumen die
/// Hilfslinien weg — und registriert dann ein frisches
/// DrawInteraction/SnapInteraction-Paar samt neuer DrawSession.
pub fn select_sketch_tool(state: &mut AppState, kind: SketchKind) {
    let effects = state.interactions.remove_session();
    map_events::apply_effects(state, effects);
    if let Some(mut session) = state.sketch.session.take() {
        session.finish(&mut state.layer.store);
    }

    state.sketch.session = Some(DrawSession::new(
        state.options.guide_length_world,
        state.options.guide_style(),
    ));
    state.sketch.active_kind = Some(kind);
    state.sketch.preview.clear();

    state
        .interactions
        .add_session(Box::new(DrawInteraction::new(kind)));
    state.interactions.add_session(Box::new(SnapInteraction::new()));

    state.layer.store.ensure_spatial_index();
    log::info!("Zeichenwerkzeug aktiviert: {}", kind.label());
}

/// Entfernt Session-Interactions, leert Features und Overlays.
pub fn clear_all(state: &mut AppState) {
    let effects = state.interactions.remove_session();
    map_events::apply_effects(state, effects);
    if let Some(mut session) = state.sketch.session.take() {
        session.finish(&mut state.layer.store);
    }

    state.sketch.active_kind = None;
    state.sketch.preview.clear();
    state.layer.store.clear();
    state.view.overlays.clear();
    state.layer.store.ensure_spatial_index();
    log::info!("Layer und Overlays geleert");
}
