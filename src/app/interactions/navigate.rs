//! Eingebaute Navigation-Interactions: Drag-Pan und Scroll-Zoom.

use crate::app::events::MapEvent;

use super::{Interaction, InteractionEffect, MapContext};

/// Verschiebt die Ansicht bei Primär-Drags.
#[derive(Debug, Default)]
pub struct PanInteraction;

impl PanInteraction {
    /// Erstellt die Pan-Interaction.
    pub fn new() -> Self {
        Self
    }
}

impl Interaction for PanInteraction {
    fn name(&self) -> &str {
        "pan"
    }

    fn handle_event(&mut self, event: &MapEvent, _ctx: &MapContext) -> Vec<InteractionEffect> {
        match event {
            MapEvent::DragBy { delta } => vec![InteractionEffect::PanBy { delta: *delta }],
            _ => Vec::new(),
        }
    }
}

/// Zoomt die Ansicht bei Mausrad-Scroll auf die Pointer-Position.
#[derive(Debug, Default)]
pub struct ScrollZoomInteraction;

impl ScrollZoomInteraction {
    /// Erstellt die Scroll-Zoom-Interaction.
    pub fn new() -> Self {
        Self
    }
}

impl Interaction for ScrollZoomInteraction {
    fn name(&self) -> &str {
        "scroll_zoom"
    }

    fn handle_event(&mut self, event: &MapEvent, _ctx: &MapContext) -> Vec<InteractionEffect> {
        match event {
            MapEvent::ScrollZoom {
                delta_levels,
                focus,
            } => vec![InteractionEffect::ZoomBy {
                delta_levels: *delta_levels,
                focus: *focus,
            }],
            _ => Vec::new(),
        }
    }
}
