//! Application-Layer: Controller, State, Events, Interactions und Sketch.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod interactions;
pub mod render_scene;
pub mod sketch;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Layer, View, Werkzeuge).
pub mod state;

pub use crate::core::{MapView, SketchKind};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, MapEvent};
pub use interactions::{InteractionRegistry, InteractionTag};
pub use render_scene::build as build_render_scene;
pub use sketch::{axis_guides, DrawSession, GuideFeatureSet, GuideSegment};
pub use state::{AppState, SketchToolState, VectorLayer, ViewState};
