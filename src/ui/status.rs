//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar.
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}: {} Features",
                state.layer.title,
                state.feature_count()
            ));

            ui.separator();

            match state.sketch.active_kind {
                Some(kind) => {
                    if state.is_sketching() {
                        // Der letzte Eintrag der Vorschau ist der provisorische
                        // Cursor-Punkt, sobald mehr als ein Punkt existiert
                        let preview_len = state.sketch.preview.len();
                        let fixed = if preview_len >= 2 {
                            preview_len - 1
                        } else {
                            preview_len
                        };
                        ui.label(format!("Zeichne {}: {} Punkte", kind.label(), fixed));
                    } else {
                        ui.label(format!("Werkzeug: {}", kind.label()));
                    }
                }
                None => {
                    ui.label("Kein Werkzeug aktiv");
                }
            }

            ui.separator();
            ui.label(format!("Zoom: {:.1}", state.view.map.zoom));

            if let Some(pos) = state.view.pointer_world {
                ui.separator();
                ui.label(format!("{:.0} / {:.0}", pos.x, pos.y));
            }
        });
    });
}
