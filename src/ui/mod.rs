//! UI-Komponenten: Toolbar, Status-Bar, Input-Handling, Viewport-Malerei.

pub mod input;
pub mod status;
pub mod toolbar;
pub mod viewport;

pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use viewport::paint_scene;
