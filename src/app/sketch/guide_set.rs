//! Verwaltung der aktuell angezeigten Hilfslinien-Features im Store.

use crate::core::{FeatureStore, SketchGeometry, StrokeStyle};

use super::guides::GuideSegment;

/// Besitzt die Feature-IDs der aktuell angezeigten Hilfslinien.
///
/// Außerhalb von `replace` enthält die Menge entweder 0 oder genau 4
/// Features. Die Reihenfolge ist remove-all-old, dann add-all-new —
/// die kurze Lücke ist unkritisch, da alles auf dem UI-Thread läuft.
#[derive(Debug, Default)]
pub struct GuideFeatureSet {
    owned: Vec<u64>,
}

impl GuideFeatureSet {
    /// Erstellt eine leere Menge.
    pub fn new() -> Self {
        Self { owned: Vec::new() }
    }

    /// Ersetzt die Hilfslinien im Store durch die übergebenen Segmente.
    pub fn replace(
        &mut self,
        segments: &[GuideSegment],
        style: StrokeStyle,
        store: &mut FeatureStore,
    ) {
        self.clear(store);
        for segment in segments {
            let geometry = SketchGeometry::LineString(vec![segment.start, segment.end]);
            let id = store.add(geometry, style);
            self.owned.push(id);
        }
    }

    /// Entfernt alle eigenen Hilfslinien aus dem Store. Idempotent.
    pub fn clear(&mut self, store: &mut FeatureStore) {
        for id in self.owned.drain(..) {
            store.remove(id);
        }
    }

    /// Anzahl der aktuell gehaltenen Hilfslinien-Features.
    pub fn len(&self) -> usize {
        self.owned.len()
    }

    /// Gibt `true` zurück wenn keine Hilfslinien angezeigt werden.
    pub fn is_empty(&self) -> bool {
        self.owned.is_empty()
    }

    /// IDs der eigenen Features (für Tests und Szenen-Filter).
    pub fn ids(&self) -> &[u64] {
        &self.owned
    }
}
