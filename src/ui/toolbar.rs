//! Toolbar für Werkzeugauswahl, Leeren und Zoom.

use crate::app::{AppIntent, AppState};
use crate::core::SketchKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.sketch.active_kind;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            let line_btn = egui::Button::new("✏ Linie");
            if ui
                .add(line_btn.selected(active == Some(SketchKind::Line)))
                .clicked()
            {
                events.push(AppIntent::ToolSelected {
                    kind: SketchKind::Line,
                });
            }

            let polygon_btn = egui::Button::new("⬟ Polygon");
            if ui
                .add(polygon_btn.selected(active == Some(SketchKind::Polygon)))
                .clicked()
            {
                events.push(AppIntent::ToolSelected {
                    kind: SketchKind::Polygon,
                });
            }

            ui.separator();

            let has_content = state.feature_count() > 0 || !state.view.overlays.is_empty();
            if ui
                .add_enabled(has_content, egui::Button::new("🗑 Leeren"))
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }

            ui.separator();

            if ui.button("＋").on_hover_text("Hineinzoomen").clicked() {
                events.push(AppIntent::ZoomInRequested);
            }
            if ui.button("－").on_hover_text("Herauszoomen").clicked() {
                events.push(AppIntent::ZoomOutRequested);
            }
            if ui.button("⌂").on_hover_text("Start-Ansicht").clicked() {
                events.push(AppIntent::ResetViewRequested);
            }

            // Gesten-Hinweis, solange gezeichnet wird
            if state.is_sketching() {
                ui.separator();
                ui.label("Doppelklick oder Enter zum Abschließen, Escape bricht ab");
            } else if active.is_some() {
                ui.separator();
                ui.label("Klick in die Karte setzt den ersten Punkt");
            }
        });
    });

    events
}
