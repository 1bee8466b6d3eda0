//! Spatial-Index (KD-Tree) über allen Feature-Stützpunkten.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::Feature;

/// Ergebnis einer Distanzabfrage gegen den Vertex-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexMatch {
    /// ID des Features, zu dem der Stützpunkt gehört
    pub feature_id: u64,
    /// Position des gefundenen Stützpunkts
    pub position: Vec2,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Index über die Stützpunkte aller Features eines Stores.
#[derive(Debug, Clone)]
pub struct VertexIndex {
    tree: KdTree<f64, 2>,
    /// Parallel zum Tree: (Feature-ID, Stützpunkt-Position) je Eintrag
    entries: Vec<(u64, Vec2)>,
}

impl VertexIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entries: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Features.
    pub fn from_features<'a>(features: impl Iterator<Item = &'a Feature>) -> Self {
        let mut entries: Vec<(u64, Vec2)> = Vec::new();
        for feature in features {
            for &coord in feature.geometry.coords() {
                entries.push((feature.id, coord));
            }
        }

        let points: Vec<[f64; 2]> = entries
            .iter()
            .map(|(_, pos)| [pos.x as f64, pos.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&points).into();

        Self { tree, entries }
    }

    /// Gibt die Anzahl indexierter Stützpunkte zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Stützpunkte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Findet den nächsten Stützpunkt zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<VertexMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let &(feature_id, position) = self.entries.get(result.item as usize)?;

        Some(VertexMatch {
            feature_id,
            position,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Stützpunkte innerhalb eines Radius, nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec2, radius: f32) -> Vec<VertexMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x as f64, query.y as f64], (radius * radius) as f64)
            .into_iter()
            .filter_map(|entry| {
                let &(feature_id, position) = self.entries.get(entry.item as usize)?;
                Some(VertexMatch {
                    feature_id,
                    position,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}
