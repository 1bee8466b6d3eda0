//! Render-Szene als expliziter Übergabevertrag zwischen App und UI.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use glam::Vec2;

use crate::core::{MapView, StrokeStyle};

/// Eine zu zeichnende Linie in Weltkoordinaten.
#[derive(Debug, Clone)]
pub struct ScenePolyline {
    /// Stützpunkte in Weltkoordinaten
    pub points: Vec<Vec2>,
    /// Strich-Stil
    pub style: StrokeStyle,
    /// Schlusskante vom letzten zum ersten Punkt zeichnen
    pub closed: bool,
}

/// Eine zu zeichnende Text-Beschriftung in Weltkoordinaten.
#[derive(Debug, Clone)]
pub struct SceneLabel {
    /// Ankerpunkt in Weltkoordinaten
    pub anchor: Vec2,
    /// Anzeigetext
    pub text: String,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Linien in Zeichenreihenfolge (Features, dann Vorschau)
    pub polylines: Vec<ScenePolyline>,
    /// Text-Overlays
    pub labels: Vec<SceneLabel>,
    /// Ansicht für die Welt→Screen-Umrechnung
    pub view: MapView,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Hintergrundfarbe (RGBA)
    pub background_color: [f32; 4],
}

impl RenderScene {
    /// Gibt zurück, ob die Szene etwas zu zeichnen hat.
    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty() && self.labels.is_empty()
    }
}
