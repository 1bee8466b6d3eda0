//! Zentrale Konfiguration für das Karten-Sketch-Widget.
//!
//! `WidgetOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::StrokeStyle;

// ── Ansicht ─────────────────────────────────────────────────────────

/// Start-Zentrum der Ansicht in projizierten Weltkoordinaten (Meter).
pub const HOME_CENTER: [f32; 2] = [-10_757_300.0, 3_867_600.0];
/// Start-Zoomstufe.
pub const HOME_ZOOM: f32 = 9.0;
/// Zoom-Schritt bei Toolbar-Buttons / Shortcuts.
pub const VIEW_ZOOM_STEP: f32 = 1.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const VIEW_SCROLL_ZOOM_STEP: f32 = 0.5;

// ── Skizzen ─────────────────────────────────────────────────────────

/// Strichfarbe gezeichneter Skizzen (RGBA: Hellblau).
pub const SKETCH_COLOR: [f32; 4] = [0.055, 0.592, 0.980, 1.0];
/// Strichbreite gezeichneter Skizzen in Screen-Pixeln.
pub const SKETCH_WIDTH_PX: f32 = 8.0;
/// Deckkraft der laufenden Skizzen-Vorschau (0.0–1.0).
pub const SKETCH_PREVIEW_ALPHA: f32 = 0.6;

// ── Hilfslinien ─────────────────────────────────────────────────────

/// Strichfarbe der Achsen-Hilfslinien (RGBA: Schwarz).
pub const GUIDE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Strichbreite der Achsen-Hilfslinien in Screen-Pixeln.
pub const GUIDE_WIDTH_PX: f32 = 5.0;
/// Länge jeder Hilfslinie in Welteinheiten.
///
/// Groß genug, dass die Linie bei üblichen Zoomstufen weit über den
/// Viewport hinausreicht und der Cursor immer ein Snap-Ziel findet.
pub const GUIDE_LENGTH_WORLD: f32 = 100_000.0;

// ── Snapping ────────────────────────────────────────────────────────

/// Snap-Toleranz in Screen-Pixeln: Pointer innerhalb dieser Distanz
/// rastet auf Stützpunkt oder Kante ein.
pub const SNAP_TOLERANCE_PX: f32 = 10.0;

// ── Hintergrund ─────────────────────────────────────────────────────

/// Hintergrundfarbe des Viewports (RGBA: helles Grau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.92, 0.92, 0.90, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Widget-Optionen.
/// Wird als `map_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetOptions {
    // ── Skizzen ─────────────────────────────────────────────────
    /// Strichfarbe gezeichneter Skizzen (RGBA)
    pub sketch_color: [f32; 4],
    /// Strichbreite gezeichneter Skizzen in Screen-Pixeln
    pub sketch_width_px: f32,
    /// Deckkraft der laufenden Skizzen-Vorschau
    #[serde(default = "default_sketch_preview_alpha")]
    pub sketch_preview_alpha: f32,

    // ── Hilfslinien ─────────────────────────────────────────────
    /// Strichfarbe der Achsen-Hilfslinien (RGBA)
    pub guide_color: [f32; 4],
    /// Strichbreite der Achsen-Hilfslinien in Screen-Pixeln
    pub guide_width_px: f32,
    /// Länge jeder Hilfslinie in Welteinheiten
    pub guide_length_world: f32,

    // ── Snapping ────────────────────────────────────────────────
    /// Snap-Toleranz in Screen-Pixeln
    pub snap_tolerance_px: f32,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Start-Zentrum der Ansicht (Weltkoordinaten)
    pub home_center: Vec2,
    /// Start-Zoomstufe
    pub home_zoom: f32,
    /// Zoom-Schritt bei Toolbar-Buttons
    pub view_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub view_scroll_zoom_step: f32,

    // ── Hintergrund ─────────────────────────────────────────────
    /// Hintergrundfarbe des Viewports (RGBA)
    #[serde(default = "default_background_color")]
    pub background_color: [f32; 4],
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            sketch_color: SKETCH_COLOR,
            sketch_width_px: SKETCH_WIDTH_PX,
            sketch_preview_alpha: SKETCH_PREVIEW_ALPHA,

            guide_color: GUIDE_COLOR,
            guide_width_px: GUIDE_WIDTH_PX,
            guide_length_world: GUIDE_LENGTH_WORLD,

            snap_tolerance_px: SNAP_TOLERANCE_PX,

            home_center: Vec2::from(HOME_CENTER),
            home_zoom: HOME_ZOOM,
            view_zoom_step: VIEW_ZOOM_STEP,
            view_scroll_zoom_step: VIEW_SCROLL_ZOOM_STEP,

            background_color: BACKGROUND_COLOR,
        }
    }
}

/// Serde-Default für `sketch_preview_alpha` (Abwärtskompatibilität).
fn default_sketch_preview_alpha() -> f32 {
    SKETCH_PREVIEW_ALPHA
}

/// Serde-Default für `background_color` (Abwärtskompatibilität).
fn default_background_color() -> [f32; 4] {
    BACKGROUND_COLOR
}

impl WidgetOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_sketch.toml")
    }

    /// Stil fertig gezeichneter Skizzen.
    pub fn sketch_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.sketch_color, self.sketch_width_px)
    }

    /// Stil der laufenden Skizzen-Vorschau (abgeschwächte Skizzenfarbe).
    pub fn sketch_preview_style(&self) -> StrokeStyle {
        let mut color = self.sketch_color;
        color[3] *= self.sketch_preview_alpha;
        StrokeStyle::new(color, self.sketch_width_px)
    }

    /// Stil der Achsen-Hilfslinien.
    pub fn guide_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.guide_color, self.guide_width_px)
    }
}
