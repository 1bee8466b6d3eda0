//! Controller-getriebene Tests für den kompletten Zeichen-Ablauf:
//! Werkzeugwahl, Gesten, Hilfslinien-Lebenszyklus und Snapping.

use glam::Vec2;
use map_sketch::{AppController, AppIntent, AppState, SketchKind};

/// Zustand mit hoher Zoomstufe: Snap-Toleranz liegt dann bei ~1.5 Welteinheiten.
fn make_test_state() -> (AppController, AppState) {
    let mut state = AppState::new();
    state.view.map.zoom = 20.0;
    state.view.viewport_size = [1280.0, 720.0];
    (AppController::new(), state)
}

fn select_tool(controller: &mut AppController, state: &mut AppState, kind: SketchKind) {
    controller
        .handle_intent(state, AppIntent::ToolSelected { kind })
        .expect("ToolSelected sollte funktionieren");
}

fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::ViewportClicked { pos })
        .expect("ViewportClicked sollte funktionieren");
}

fn move_pointer(controller: &mut AppController, state: &mut AppState, pos: Vec2) {
    controller
        .handle_intent(state, AppIntent::PointerMoved { pos })
        .expect("PointerMoved sollte funktionieren");
}

fn finish(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::FinishSketchRequested)
        .expect("FinishSketchRequested sollte funktionieren");
}

/// Gemeinsamer Anker aller Hilfslinien im Store (alle starten dort).
fn guide_anchors(state: &AppState) -> Vec<Vec2> {
    state
        .layer
        .store
        .iter()
        .map(|f| f.geometry.coords()[0])
        .collect()
}

#[test]
fn test_line_gesture_generates_and_replaces_guides() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);
    assert_eq!(state.interactions.session_count(), 2);

    // Erster Klick: nur ein Punkt, noch keine Hilfslinien
    click(&mut controller, &mut state, Vec2::ZERO);
    assert_eq!(state.feature_count(), 0);

    // Pointer-Bewegung: 4 Hilfslinien am ersten Punkt
    move_pointer(&mut controller, &mut state, Vec2::new(50.0, 50.0));
    assert_eq!(state.feature_count(), 4);
    assert!(guide_anchors(&state).iter().all(|&a| a == Vec2::ZERO));

    // Zweiter Klick: Hilfslinien wandern auf den neuen Stützpunkt
    click(&mut controller, &mut state, Vec2::new(50.0, 50.0));
    assert_eq!(state.feature_count(), 4);
    assert!(guide_anchors(&state)
        .iter()
        .all(|&a| a == Vec2::new(50.0, 50.0)));

    // Reine Cursor-Bewegung: keine Neuerzeugung
    let ids_before: Vec<u64> = state.layer.store.iter().map(|f| f.id).collect();
    move_pointer(&mut controller, &mut state, Vec2::new(60.0, 70.0));
    let ids_after: Vec<u64> = state.layer.store.iter().map(|f| f.id).collect();
    assert_eq!(ids_before, ids_after);

    // Abschluss: Hilfslinien weg, Skizze und Overlay da
    finish(&mut controller, &mut state);
    assert_eq!(state.feature_count(), 1);
    assert_eq!(state.view.overlays.len(), 1);
    assert!(state.sketch.preview.is_empty());

    let feature = state.layer.store.iter().next().unwrap();
    assert_eq!(
        feature.geometry.coords(),
        &[Vec2::ZERO, Vec2::new(50.0, 50.0)]
    );
}

#[test]
fn test_polygon_gesture_produces_closed_ring() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Polygon);

    for pos in [
        Vec2::ZERO,
        Vec2::new(100.0, 0.0),
        Vec2::new(100.0, 100.0),
    ] {
        move_pointer(&mut controller, &mut state, pos);
        click(&mut controller, &mut state, pos);
    }
    finish(&mut controller, &mut state);

    assert_eq!(state.feature_count(), 1);
    let feature = state.layer.store.iter().next().unwrap();
    assert!(feature.geometry.is_closed());
    assert_eq!(feature.geometry.coords().len(), 3);
    // Umfang: 100 + 100 + Diagonale
    let expected = 200.0 + 100.0 * std::f32::consts::SQRT_2;
    assert!((feature.geometry.total_length() - expected).abs() < 0.1);
}

#[test]
fn test_double_click_commits_no_extra_vertex() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    click(&mut controller, &mut state, Vec2::ZERO);
    move_pointer(&mut controller, &mut state, Vec2::new(50.0, 0.0));
    click(&mut controller, &mut state, Vec2::new(50.0, 0.0));
    move_pointer(&mut controller, &mut state, Vec2::new(100.0, 0.0));

    // Doppelklick: erster Klick des Paars setzt den Punkt, der zweite
    // kommt nur noch als Doppelklick-Event an
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportDoubleClicked {
                pos: Vec2::new(100.0, 0.0),
            },
        )
        .expect("ViewportDoubleClicked sollte funktionieren");

    assert_eq!(state.feature_count(), 1);
    let feature = state.layer.store.iter().next().unwrap();
    assert_eq!(
        feature.geometry.coords(),
        &[Vec2::ZERO, Vec2::new(50.0, 0.0), Vec2::new(100.0, 0.0)]
    );
}

#[test]
fn test_tool_switch_mid_gesture_cleans_up() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    click(&mut controller, &mut state, Vec2::ZERO);
    move_pointer(&mut controller, &mut state, Vec2::new(30.0, 30.0));
    assert_eq!(state.feature_count(), 4);
    assert!(state.is_sketching());

    // Werkzeugwechsel mitten in der Geste
    select_tool(&mut controller, &mut state, SketchKind::Polygon);

    // Hilfslinien weg, keine halbe Skizze übernommen, frisches Paar registriert
    assert_eq!(state.feature_count(), 0);
    assert!(!state.is_sketching());
    assert_eq!(state.interactions.session_count(), 2);
    assert_eq!(state.interactions.builtin_count(), 2);
    assert_eq!(state.sketch.active_kind, Some(SketchKind::Polygon));
}

#[test]
fn test_abort_discards_sketch_and_guides() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    click(&mut controller, &mut state, Vec2::ZERO);
    move_pointer(&mut controller, &mut state, Vec2::new(30.0, 0.0));
    assert_eq!(state.feature_count(), 4);

    controller
        .handle_intent(&mut state, AppIntent::AbortSketchRequested)
        .expect("AbortSketchRequested sollte funktionieren");

    assert_eq!(state.feature_count(), 0);
    assert!(state.view.overlays.is_empty());
    assert!(state.sketch.preview.is_empty());
}

#[test]
fn test_finish_with_single_point_aborts() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    click(&mut controller, &mut state, Vec2::ZERO);
    finish(&mut controller, &mut state);

    assert_eq!(state.feature_count(), 0);
    assert!(state.view.overlays.is_empty());
}

#[test]
fn test_clear_removes_features_overlays_and_session() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    click(&mut controller, &mut state, Vec2::ZERO);
    move_pointer(&mut controller, &mut state, Vec2::new(40.0, 0.0));
    click(&mut controller, &mut state, Vec2::new(40.0, 0.0));
    finish(&mut controller, &mut state);
    assert_eq!(state.feature_count(), 1);
    assert_eq!(state.view.overlays.len(), 1);

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte funktionieren");

    assert_eq!(state.feature_count(), 0);
    assert!(state.view.overlays.is_empty());
    assert_eq!(state.interactions.session_count(), 0);
    assert_eq!(state.interactions.builtin_count(), 2);
    assert_eq!(state.sketch.active_kind, None);
}

#[test]
fn test_snap_pulls_click_onto_existing_vertex() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    // Erste Linie zeichnen
    click(&mut controller, &mut state, Vec2::ZERO);
    move_pointer(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    click(&mut controller, &mut state, Vec2::new(100.0, 0.0));
    finish(&mut controller, &mut state);

    // Neue Geste: Klick knapp neben dem Endpunkt der ersten Linie
    // (Toleranz bei Zoom 20 ≈ 1.5 Welteinheiten)
    click(&mut controller, &mut state, Vec2::new(100.6, 0.5));

    assert_eq!(state.sketch.preview, vec![Vec2::new(100.0, 0.0)]);
}

#[test]
fn test_snap_pulls_cursor_onto_guide_line() {
    let (mut controller, mut state) = make_test_state();
    select_tool(&mut controller, &mut state, SketchKind::Line);

    click(&mut controller, &mut state, Vec2::ZERO);
    move_pointer(&mut controller, &mut state, Vec2::new(50.0, 20.0));
    assert_eq!(state.feature_count(), 4);

    // Cursor knapp neben der 0°-Hilfslinie → rastet auf die Achse ein
    move_pointer(&mut controller, &mut state, Vec2::new(50.0, 0.8));
    let provisional = *state.sketch.preview.last().unwrap();
    assert!((provisional.y).abs() < 0.01);
    assert!((provisional.x - 50.0).abs() < 0.01);
}

#[test]
fn test_command_log_records_dispatched_commands() {
    let (mut controller, mut state) = make_test_state();
    assert!(state.command_log.is_empty());

    select_tool(&mut controller, &mut state, SketchKind::Line);
    click(&mut controller, &mut state, Vec2::ZERO);

    assert_eq!(state.command_log.len(), 2);
}
