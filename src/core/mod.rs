//! Core-Domänentypen: Geometrien, Features, Store, Ansicht, Spatial-Index.

pub mod feature;
/// Feature-Sammlung hinter dem Vektor-Layer
///
/// Der Store vergibt stabile IDs, hält die Einfügereihenfolge und
/// trägt den lazy aufgebauten Vertex-Index für Snap-Abfragen.
pub mod feature_store;
pub mod geometry;
pub mod overlay;
pub mod spatial;
pub mod view;

pub use feature::{Feature, StrokeStyle};
pub use feature_store::FeatureStore;
pub use geometry::{SketchGeometry, SketchKind};
pub use overlay::MapOverlay;
pub use spatial::{VertexIndex, VertexMatch};
pub use view::MapView;
