//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::WidgetOptions;
pub use options::{GUIDE_LENGTH_WORLD, SNAP_TOLERANCE_PX};
pub use render_scene::{RenderScene, SceneLabel, ScenePolyline};
