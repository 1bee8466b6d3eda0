//! Der FeatureStore: veränderliche Feature-Sammlung hinter dem Vektor-Layer.

use indexmap::IndexMap;

use super::{Feature, SketchGeometry, StrokeStyle, VertexIndex};

/// Einfüge-geordnete Feature-Sammlung mit stabilen IDs.
///
/// Die Iterationsreihenfolge entspricht der Einfügereihenfolge und
/// bestimmt damit die Zeichenreihenfolge im Viewport. Der Vertex-Index
/// wird lazy neu aufgebaut: Mutationen markieren ihn als veraltet,
/// `ensure_spatial_index` baut ihn bei Bedarf neu.
pub struct FeatureStore {
    features: IndexMap<u64, Feature>,
    next_id: u64,
    vertex_index: VertexIndex,
    index_dirty: bool,
}

impl FeatureStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            features: IndexMap::new(),
            next_id: 1,
            vertex_index: VertexIndex::empty(),
            index_dirty: false,
        }
    }

    /// Fügt ein Feature hinzu und gibt seine neue ID zurück.
    pub fn add(&mut self, geometry: SketchGeometry, style: StrokeStyle) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.features.insert(id, Feature::new(id, geometry, style));
        self.index_dirty = true;
        id
    }

    /// Entfernt ein Feature. Fehlende IDs sind ein No-op.
    ///
    /// `shift_remove` erhält die Einfügereihenfolge der übrigen Features.
    pub fn remove(&mut self, id: u64) -> Option<Feature> {
        let removed = self.features.shift_remove(&id);
        if removed.is_some() {
            self.index_dirty = true;
        }
        removed
    }

    /// Entfernt alle Features.
    pub fn clear(&mut self) {
        if !self.features.is_empty() {
            self.index_dirty = true;
        }
        self.features.clear();
    }

    /// Gibt ein Feature per ID zurück.
    pub fn get(&self, id: u64) -> Option<&Feature> {
        self.features.get(&id)
    }

    /// Prüft ob eine ID im Store liegt.
    pub fn contains(&self, id: u64) -> bool {
        self.features.contains_key(&id)
    }

    /// Iteriert über alle Features in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.values()
    }

    /// Gibt die Anzahl der Features zurück.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück wenn der Store leer ist.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Baut den Vertex-Index neu auf, falls er veraltet ist.
    ///
    /// Wird von den Handlern nach Mutations-Batches aufgerufen, damit
    /// Abfragen während der Event-Verarbeitung nur lesend zugreifen.
    pub fn ensure_spatial_index(&mut self) {
        if self.index_dirty {
            self.vertex_index = VertexIndex::from_features(self.features.values());
            self.index_dirty = false;
        }
    }

    /// Gibt den aktuellen Vertex-Index zurück.
    ///
    /// Kann veraltet sein, wenn seit der letzten Mutation kein
    /// `ensure_spatial_index` lief.
    pub fn vertex_index(&self) -> &VertexIndex {
        &self.vertex_index
    }
}

impl Default for FeatureStore {
    fn default() -> Self {
        Self::new()
    }
}
