//! DrawSession: Hilfslinien-Lebenszyklus über eine laufende Zeichengeste.

use glam::Vec2;

use crate::core::{FeatureStore, StrokeStyle};

use super::guide_set::GuideFeatureSet;
use super::guides::axis_guides;

/// Verfolgt eine Zeichengeste und hält die Hilfslinien aktuell.
///
/// Die Session zählt die Koordinaten der In-Progress-Geometrie. Wächst
/// die Sequenz, wurde ein Stützpunkt fest gesetzt — dann werden die
/// vier Hilfslinien am zuletzt gesetzten Punkt neu erzeugt. Der letzte
/// Eintrag der Sequenz ist immer der dem Cursor folgende provisorische
/// Punkt, deshalb ist der Anker das vorletzte Element.
pub struct DrawSession {
    /// Koordinaten-Anzahl bei der letzten Beobachtung
    committed_coord_count: usize,
    /// Aktuell angezeigte Hilfslinien
    guides: GuideFeatureSet,
    /// Länge der Hilfslinien in Welteinheiten
    guide_length: f32,
    /// Stil der Hilfslinien
    guide_style: StrokeStyle,
}

impl DrawSession {
    /// Erstellt eine Session ohne laufende Geste.
    pub fn new(guide_length: f32, guide_style: StrokeStyle) -> Self {
        Self {
            committed_coord_count: 0,
            guides: GuideFeatureSet::new(),
            guide_length,
            guide_style,
        }
    }

    /// Beginnt eine neue Geste: Zähler zurücksetzen.
    pub fn begin(&mut self) {
        self.committed_coord_count = 0;
    }

    /// Verarbeitet eine Geometrie-Änderung der laufenden Geste.
    ///
    /// `coords` ist die aktuelle Koordinaten-Sequenz (bei Polygonen der
    /// äußere Ring), inklusive provisorischem Cursor-Punkt am Ende.
    /// Sequenzen kürzer als 2 sind ein transienter Zustand — dann wird
    /// die Hilfslinien-Erzeugung für dieses Event übersprungen.
    pub fn on_geometry_change(&mut self, coords: &[Vec2], store: &mut FeatureStore) {
        if coords.len() > self.committed_coord_count {
            if coords.len() >= 2 {
                let anchor = coords[coords.len() - 2];
                let segments = axis_guides(anchor, self.guide_length);
                self.guides.replace(&segments, self.guide_style, store);
            }
        }
        self.committed_coord_count = coords.len();
    }

    /// Beendet die Geste: Hilfslinien entfernen, Zähler zurücksetzen.
    ///
    /// Läuft bei Abschluss, Abbruch und beim Entfernen der zugehörigen
    /// Interaction, damit keine Hilfslinie im Layer zurückbleibt.
    pub fn finish(&mut self, store: &mut FeatureStore) {
        self.guides.clear(store);
        self.committed_coord_count = 0;
    }

    /// Anzahl der aktuell angezeigten Hilfslinien (0 oder 4).
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Koordinaten-Anzahl bei der letzten Beobachtung.
    pub fn committed_coord_count(&self) -> usize {
        self.committed_coord_count
    }

    /// IDs der aktuell angezeigten Hilfslinien-Features.
    pub fn guide_ids(&self) -> &[u64] {
        self.guides.ids()
    }
}
