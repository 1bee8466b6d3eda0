//! Application State — zentrale Datenhaltung.

use glam::Vec2;

use super::interactions::InteractionRegistry;
use super::sketch::DrawSession;
use super::CommandLog;
use crate::core::{FeatureStore, MapOverlay, MapView, SketchKind};
use crate::shared::WidgetOptions;

/// Der Vektor-Layer: benannter Feature-Store für Skizzen und Hilfslinien.
pub struct VectorLayer {
    /// Anzeigename des Layers
    pub title: String,
    /// Feature-Sammlung hinter dem Layer
    pub store: FeatureStore,
}

impl VectorLayer {
    /// Erstellt einen leeren Layer mit Titel.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            store: FeatureStore::new(),
        }
    }
}

/// View-bezogener Anwendungszustand.
pub struct ViewState {
    /// Karten-Ansicht (Zentrum + Zoomstufe)
    pub map: MapView,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Letzte bekannte Pointer-Position in Weltkoordinaten
    pub pointer_world: Option<Vec2>,
    /// Text-Overlays (Längen-Beschriftungen fertiger Skizzen)
    pub overlays: Vec<MapOverlay>,
}

impl ViewState {
    /// Erstellt den View-Zustand mit der Start-Ansicht aus den Optionen.
    pub fn new(options: &WidgetOptions) -> Self {
        Self {
            map: MapView::new(options.home_center, options.home_zoom),
            viewport_size: [0.0, 0.0],
            pointer_world: None,
            overlays: Vec::new(),
        }
    }
}

/// Zustand des aktiven Zeichenwerkzeugs.
#[derive(Default)]
pub struct SketchToolState {
    /// Aktive Geometrie-Art (None = kein Werkzeug aktiv)
    pub active_kind: Option<SketchKind>,
    /// Session für den Hilfslinien-Lebenszyklus der laufenden Geste
    pub session: Option<DrawSession>,
    /// Koordinaten der In-Progress-Skizze für die Viewport-Vorschau
    pub preview: Vec<Vec2>,
}

impl SketchToolState {
    /// Erstellt den Zustand ohne aktives Werkzeug.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Vektor-Layer mit allen Features
    pub layer: VectorLayer,
    /// View-State
    pub view: ViewState,
    /// Zeichenwerkzeug-State
    pub sketch: SketchToolState,
    /// Interaction-Registry (eingebaut + Session)
    pub interactions: InteractionRegistry,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Breiten, Toleranzen)
    pub options: WidgetOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(WidgetOptions::default())
    }

    /// Erstellt einen neuen App-State mit den übergebenen Optionen.
    pub fn with_options(options: WidgetOptions) -> Self {
        Self {
            layer: VectorLayer::new("Skizzen"),
            view: ViewState::new(&options),
            sketch: SketchToolState::new(),
            interactions: InteractionRegistry::with_defaults(),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Gibt die Anzahl der Features zurück (für UI-Anzeige).
    pub fn feature_count(&self) -> usize {
        self.layer.store.len()
    }

    /// Gibt `true` zurück, solange eine Zeichengeste läuft.
    pub fn is_sketching(&self) -> bool {
        !self.sketch.preview.is_empty()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
