//! Welt-verankerte Text-Overlays (z.B. Längen-Beschriftung).

use glam::Vec2;

/// Ein Text-Overlay, verankert an einer Weltposition.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOverlay {
    /// Ankerpunkt in Weltkoordinaten
    pub anchor: Vec2,
    /// Anzeigetext
    pub text: String,
}

impl MapOverlay {
    /// Erstellt ein neues Overlay.
    pub fn new(anchor: Vec2, text: impl Into<String>) -> Self {
        Self {
            anchor,
            text: text.into(),
        }
    }

    /// Formatiert eine Streckenlänge als Anzeigetext.
    ///
    /// Werte ab 1000 Welteinheiten werden in km angegeben.
    pub fn length_label(anchor: Vec2, length: f32) -> Self {
        let text = if length >= 1000.0 {
            format!("{:.2} km", length / 1000.0)
        } else {
            format!("{:.1} m", length)
        };
        Self::new(anchor, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_label_switches_units() {
        let short = MapOverlay::length_label(Vec2::ZERO, 42.35);
        assert_eq!(short.text, "42.3 m");

        let long = MapOverlay::length_label(Vec2::ZERO, 12_345.0);
        assert_eq!(long.text, "12.35 km");
    }
}
