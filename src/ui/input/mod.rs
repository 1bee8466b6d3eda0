//! Viewport-Input-Handling: Maus-Events, Drag-Pan, Scroll → AppIntent.

use glam::Vec2;

use crate::app::AppIntent;
use crate::core::MapView;

/// Verwaltet den Input-Zustand für das Viewport (Pointer, Drag, Scroll).
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Pointer-Position (Screen), um Move-Spam zu vermeiden
    last_pointer_pos: Option<egui::Pos2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer_pos: None,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-,
    /// Scroll- und Tastatur-Interaktionen im Viewport.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view: &MapView,
        sketch_tool_active: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        self.handle_keyboard(ui, sketch_tool_active, &mut events);
        self.handle_clicks(response, viewport_size, view, &mut events);
        self.handle_drag(response, view, &mut events);
        self.handle_pointer_move(response, viewport_size, view, &mut events);
        self.handle_scroll_zoom(ui, response, viewport_size, view, &mut events);

        events
    }

    /// Enter schließt die laufende Skizze ab, Escape verwirft sie.
    fn handle_keyboard(
        &self,
        ui: &egui::Ui,
        sketch_tool_active: bool,
        events: &mut Vec<AppIntent>,
    ) {
        if !sketch_tool_active {
            return;
        }

        ui.input(|i| {
            if i.key_pressed(egui::Key::Enter) {
                events.push(AppIntent::FinishSketchRequested);
            }
            if i.key_pressed(egui::Key::Escape) {
                events.push(AppIntent::AbortSketchRequested);
            }
        });
    }

    /// Verarbeitet Einfach- und Doppelklick-Events im Viewport.
    ///
    /// Beim zweiten Klick eines Doppelklick-Paars wird nur das
    /// Doppelklick-Event gemeldet, damit kein zusätzlicher Stützpunkt
    /// entsteht.
    fn handle_clicks(
        &self,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view: &MapView,
        events: &mut Vec<AppIntent>,
    ) {
        if response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let pos = screen_pos_to_world(pointer_pos, response, viewport_size, view);
                events.push(AppIntent::ViewportDoubleClicked { pos });
            }
        } else if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let pos = screen_pos_to_world(pointer_pos, response, viewport_size, view);
                events.push(AppIntent::ViewportClicked { pos });
            }
        }
    }

    /// Primär-Drag verschiebt die Ansicht (die Karte folgt dem Pointer).
    fn handle_drag(
        &self,
        response: &egui::Response,
        view: &MapView,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        let drag_px = response.drag_delta();
        if drag_px == egui::Vec2::ZERO {
            return;
        }

        let resolution = view.resolution();
        // Screen-Y zeigt nach unten, Welt-Y nach oben
        let delta = Vec2::new(-drag_px.x * resolution, drag_px.y * resolution);
        events.push(AppIntent::ViewportDragged { delta });
    }

    /// Meldet Pointer-Bewegungen (nur bei tatsächlicher Änderung).
    fn handle_pointer_move(
        &mut self,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view: &MapView,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(pointer_pos) = response.hover_pos() else {
            self.last_pointer_pos = None;
            return;
        };

        if self.last_pointer_pos == Some(pointer_pos) {
            return;
        }
        self.last_pointer_pos = Some(pointer_pos);

        let pos = screen_pos_to_world(pointer_pos, response, viewport_size, view);
        events.push(AppIntent::PointerMoved { pos });
    }

    /// Verarbeitet Scroll-Zoom auf die aktuelle Mausposition.
    fn handle_scroll_zoom(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        view: &MapView,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let delta_levels = if scroll > 0.0 { 1.0 } else { -1.0 };
        let focus = response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, response, viewport_size, view))
            .unwrap_or(view.center);

        events.push(AppIntent::ViewportScrolled {
            delta_levels,
            focus,
        });
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    view: &MapView,
) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    view.screen_to_world(
        Vec2::new(local.x, local.y),
        Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
