//! Zeichnet die Render-Szene mit dem egui-Painter in den Viewport.

use glam::Vec2;

use crate::shared::RenderScene;

/// Malt Hintergrund, Linien und Beschriftungen der Szene in `rect`.
pub fn paint_scene(ui: &egui::Ui, rect: egui::Rect, scene: &RenderScene) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(
        rect,
        egui::CornerRadius::ZERO,
        to_color32(scene.background_color),
    );

    let viewport = Vec2::new(rect.width(), rect.height());

    for polyline in &scene.polylines {
        if polyline.points.len() < 2 {
            continue;
        }

        let mut points: Vec<egui::Pos2> = polyline
            .points
            .iter()
            .map(|&world| to_screen(rect, scene, world, viewport))
            .collect();
        if polyline.closed {
            points.push(points[0]);
        }

        let stroke = egui::Stroke::new(
            polyline.style.width_px,
            to_color32(polyline.style.color),
        );
        painter.add(egui::Shape::line(points, stroke));
    }

    for label in &scene.labels {
        let anchor = to_screen(rect, scene, label.anchor, viewport);
        painter.text(
            anchor + egui::vec2(6.0, -6.0),
            egui::Align2::LEFT_BOTTOM,
            &label.text,
            egui::FontId::proportional(13.0),
            ui.visuals().strong_text_color(),
        );
    }
}

/// Rechnet eine Weltposition in eine absolute Screen-Position um.
fn to_screen(rect: egui::Rect, scene: &RenderScene, world: Vec2, viewport: Vec2) -> egui::Pos2 {
    let screen = scene.view.world_to_screen(world, viewport);
    rect.min + egui::vec2(screen.x, screen.y)
}

/// Konvertiert RGBA-Floats (0.0–1.0) nach `Color32`.
fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
