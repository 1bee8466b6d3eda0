//! Hilfslinien-Snapping für laufende Zeichengesten.
//!
//! Drei Bausteine: `axis_guides` erzeugt die vier Segmente am Anker,
//! `GuideFeatureSet` besitzt die zugehörigen Store-Features, und die
//! `DrawSession` entscheidet anhand der Koordinaten-Anzahl, wann neu
//! erzeugt wird.

pub mod guide_set;
pub mod guides;
mod session;

pub use guide_set::GuideFeatureSet;
pub use guides::{axis_guides, GuideSegment};
pub use session::DrawSession;
