//! Trait-basierte Pointer-Interactions mit getaggter Registry.
//!
//! Interactions erzeugen reine Daten (`InteractionEffect`), die Mutation
//! erfolgt zentral in den Handlern. Jeder Registry-Eintrag trägt ein Tag
//! (`BuiltIn` oder `Session`), damit das Entfernen von Werkzeug-
//! Interactions per Tag geschieht und nie die eingebauten Navigation-
//! Interactions trifft.

/// Zeichen-Interaction für Linien und Polygone.
pub mod draw;
/// Eingebaute Navigation: Drag-Pan und Scroll-Zoom.
pub mod navigate;
/// Snap-Interaction — zieht den Pointer auf Stützpunkte und Kanten.
pub mod snap;

pub use draw::DrawInteraction;
pub use navigate::{PanInteraction, ScrollZoomInteraction};
pub use snap::SnapInteraction;

use glam::Vec2;

use crate::app::events::MapEvent;
use crate::core::{FeatureStore, SketchGeometry, SketchKind};

/// Read-only Kontext für den Event-Dispatch.
pub struct MapContext<'a> {
    /// Feature-Store hinter dem Vektor-Layer (Snap-Ziele)
    pub store: &'a FeatureStore,
    /// Snap-Toleranz in Welteinheiten bei aktueller Auflösung
    pub snap_tolerance: f32,
}

/// Effekt einer Interaction — reine Daten, keine Mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEffect {
    /// Ansicht um ein Welt-Delta verschieben
    PanBy { delta: Vec2 },
    /// Ansicht auf einen Fokuspunkt zoomen
    ZoomBy { delta_levels: f32, focus: Vec2 },
    /// Eine Zeichengeste hat begonnen
    SketchStarted { kind: SketchKind },
    /// Die In-Progress-Geometrie hat sich geändert
    SketchChanged { coords: Vec<Vec2> },
    /// Eine Geste wurde mit gültiger Geometrie abgeschlossen
    SketchFinished { geometry: SketchGeometry },
    /// Eine Geste wurde verworfen (Abbruch oder zu wenige Punkte)
    SketchAborted,
}

/// Schnittstelle für alle Pointer-Interactions.
pub trait Interaction {
    /// Name für Logging und Diagnose.
    fn name(&self) -> &str;

    /// Korrigiert die Pointer-Position, bevor das Event verteilt wird.
    ///
    /// Wird für alle Interactions in Dispatch-Reihenfolge gefaltet; die
    /// Snap-Interaction zieht hier den Pointer auf das nächste Ziel.
    fn adjust_pointer(&self, _pos: Vec2, _ctx: &MapContext) -> Option<Vec2> {
        None
    }

    /// Verarbeitet ein Karten-Event und gibt Effekte zurück.
    fn handle_event(&mut self, event: &MapEvent, ctx: &MapContext) -> Vec<InteractionEffect>;

    /// Aufräumen beim Entfernen aus der Registry (z.B. Geste abbrechen).
    fn on_remove(&mut self) -> Vec<InteractionEffect> {
        Vec::new()
    }
}

/// Herkunft eines Registry-Eintrags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionTag {
    /// Fest eingebaute Interaction (Pan, Zoom) — wird nie mitentfernt
    BuiltIn,
    /// Vom aktiven Zeichenwerkzeug registriert
    Session,
}

/// Verwaltet registrierte Interactions mit Herkunfts-Tag.
///
/// Events werden in umgekehrter Registrierungs-Reihenfolge verteilt:
/// zuletzt registrierte Interactions sehen das Event zuerst. Dadurch
/// korrigiert die nach dem Zeichenwerkzeug registrierte Snap-Interaction
/// die Pointer-Position, bevor das Zeichenwerkzeug sie verarbeitet.
pub struct InteractionRegistry {
    entries: Vec<(InteractionTag, Box<dyn Interaction>)>,
}

impl InteractionRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Erstellt eine Registry mit den eingebauten Navigation-Interactions.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add_builtin(Box::new(PanInteraction::new()));
        registry.add_builtin(Box::new(ScrollZoomInteraction::new()));
        registry
    }

    /// Registriert eine eingebaute Interaction.
    pub fn add_builtin(&mut self, interaction: Box<dyn Interaction>) {
        self.entries.push((InteractionTag::BuiltIn, interaction));
    }

    /// Registriert eine Session-Interaction des aktiven Werkzeugs.
    pub fn add_session(&mut self, interaction: Box<dyn Interaction>) {
        self.entries.push((InteractionTag::Session, interaction));
    }

    /// Entfernt alle Session-Interactions und sammelt deren
    /// Aufräum-Effekte ein. Eingebaute Interactions bleiben erhalten.
    pub fn remove_session(&mut self) -> Vec<InteractionEffect> {
        let mut effects = Vec::new();
        let mut kept = Vec::with_capacity(self.entries.len());
        for (tag, mut interaction) in self.entries.drain(..) {
            if tag == InteractionTag::Session {
                effects.extend(interaction.on_remove());
            } else {
                kept.push((tag, interaction));
            }
        }
        self.entries = kept;
        effects
    }

    /// Gibt die Anzahl aller Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück wenn keine Interactions registriert sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl der Session-Interactions.
    pub fn session_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(tag, _)| *tag == InteractionTag::Session)
            .count()
    }

    /// Anzahl der eingebauten Interactions.
    pub fn builtin_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(tag, _)| *tag == InteractionTag::BuiltIn)
            .count()
    }

    /// Verteilt ein Event an alle Interactions und sammelt die Effekte.
    pub fn dispatch(&mut self, event: &MapEvent, ctx: &MapContext) -> Vec<InteractionEffect> {
        let event = self.adjusted_event(event, ctx);

        let mut effects = Vec::new();
        for (_, interaction) in self.entries.iter_mut().rev() {
            effects.extend(interaction.handle_event(&event, ctx));
        }
        effects
    }

    /// Faltet die Pointer-Position durch alle `adjust_pointer`-Hooks.
    fn adjusted_event(&self, event: &MapEvent, ctx: &MapContext) -> MapEvent {
        let Some(mut pos) = event.pointer_pos() else {
            return event.clone();
        };

        for (_, interaction) in self.entries.iter().rev() {
            if let Some(adjusted) = interaction.adjust_pointer(pos, ctx) {
                pos = adjusted;
            }
        }
        event.with_pointer_pos(pos)
    }
}

impl Default for InteractionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
