//! MapSketch Library.
//! Kern-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawSession, GuideFeatureSet,
    InteractionRegistry, MapEvent, SketchToolState, VectorLayer, ViewState,
};
pub use app::{axis_guides, GuideSegment};
pub use core::{
    Feature, FeatureStore, MapOverlay, MapView, SketchGeometry, SketchKind, StrokeStyle,
};
pub use core::{VertexIndex, VertexMatch};
pub use shared::{RenderScene, WidgetOptions};
