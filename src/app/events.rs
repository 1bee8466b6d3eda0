//! AppIntent-, AppCommand- und MapEvent-Typen für den Event-Datenfluss.

use glam::Vec2;

use crate::core::SketchKind;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeichenwerkzeug auswählen (Linie oder Polygon)
    ToolSelected { kind: SketchKind },
    /// Alles leeren: Features, Overlays, Session-Interactions
    ClearRequested,
    /// Pointer über dem Viewport bewegt (Weltposition)
    PointerMoved { pos: Vec2 },
    /// Klick in den Viewport (Weltposition)
    ViewportClicked { pos: Vec2 },
    /// Doppelklick in den Viewport (Weltposition)
    ViewportDoubleClicked { pos: Vec2 },
    /// Drag im Viewport (Welt-Delta)
    ViewportDragged { delta: Vec2 },
    /// Mausrad-Zoom auf eine Fokus-Weltposition
    ViewportScrolled { delta_levels: f32, focus: Vec2 },
    /// Laufende Skizze abschließen (Enter)
    FinishSketchRequested,
    /// Laufende Skizze abbrechen (Escape)
    AbortSketchRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf Start-Zentrum und -Zoom zurücksetzen
    ResetViewRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
}

/// Mutierende App-Commands, erzeugt aus Intents.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Zeichenwerkzeug aktivieren: Session-Interactions neu aufbauen
    SelectSketchTool { kind: SketchKind },
    /// Features, Overlays und Session-Interactions entfernen
    ClearAll,
    /// Ein Karten-Event durch die Interaction-Registry schicken
    DispatchMapEvent { event: MapEvent },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Zoomstufe um ein Delta ändern (Toolbar/Shortcut)
    ZoomStep { delta_levels: f32 },
    /// Ansicht auf die konfigurierte Start-Position zurücksetzen
    ResetView,
}

/// Normalisierte Karten-Events für die Interaction-Registry.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Pointer bewegt (Weltposition)
    PointerMove { pos: Vec2 },
    /// Einzelklick (Weltposition)
    PointerClick { pos: Vec2 },
    /// Doppelklick (Weltposition)
    PointerDoubleClick { pos: Vec2 },
    /// Primär-Drag um ein Welt-Delta
    DragBy { delta: Vec2 },
    /// Mausrad-Zoom auf eine Fokus-Weltposition
    ScrollZoom { delta_levels: f32, focus: Vec2 },
    /// Skizze abschließen (Enter / Doppelklick-Äquivalent)
    FinishSketch,
    /// Skizze verwerfen (Escape)
    AbortSketch,
}

impl MapEvent {
    /// Pointer-Position des Events, falls vorhanden.
    pub fn pointer_pos(&self) -> Option<Vec2> {
        match self {
            MapEvent::PointerMove { pos }
            | MapEvent::PointerClick { pos }
            | MapEvent::PointerDoubleClick { pos } => Some(*pos),
            _ => None,
        }
    }

    /// Kopie des Events mit ersetzter Pointer-Position.
    pub fn with_pointer_pos(&self, new_pos: Vec2) -> MapEvent {
        match self {
            MapEvent::PointerMove { .. } => MapEvent::PointerMove { pos: new_pos },
            MapEvent::PointerClick { .. } => MapEvent::PointerClick { pos: new_pos },
            MapEvent::PointerDoubleClick { .. } => MapEvent::PointerDoubleClick { pos: new_pos },
            other => other.clone(),
        }
    }
}
