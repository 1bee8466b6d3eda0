//! Handler für Ansicht und Viewport.

use crate::app::AppState;
use crate::core::MapView;

/// Merkt sich die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Ändert die Zoomstufe um ein Delta (Toolbar-Buttons / Shortcuts).
pub fn zoom_step(state: &mut AppState, delta_levels: f32) {
    state.view.map.zoom_by(delta_levels);
}

/// Setzt die Ansicht auf das konfigurierte Start-Zentrum zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.map = MapView::new(state.options.home_center, state.options.home_zoom);
    log::info!("Ansicht zurückgesetzt");
}
