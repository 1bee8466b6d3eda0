//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState, MapEvent};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ToolSelected { kind } => vec![AppCommand::SelectSketchTool { kind }],
        AppIntent::ClearRequested => vec![AppCommand::ClearAll],
        AppIntent::PointerMoved { pos } => vec![AppCommand::DispatchMapEvent {
            event: MapEvent::PointerMove { pos },
        }],
        AppIntent::ViewportClicked { pos } => vec![AppCommand::DispatchMapEvent {
            event: MapEvent::PointerClick { pos },
        }],
        AppIntent::ViewportDoubleClicked { pos } => vec![AppCommand::DispatchMapEvent {
            event: MapEvent::PointerDoubleClick { pos },
        }],
        AppIntent::ViewportDragged { delta } => vec![AppCommand::DispatchMapEvent {
            event: MapEvent::DragBy { delta },
        }],
        AppIntent::ViewportScrolled {
            delta_levels,
            focus,
        } => {
            let delta_levels = delta_levels * state.options.view_scroll_zoom_step;
            vec![AppCommand::DispatchMapEvent {
                event: MapEvent::ScrollZoom {
                    delta_levels,
                    focus,
                },
            }]
        }
        AppIntent::FinishSketchRequested => vec![AppCommand::DispatchMapEvent {
            event: MapEvent::FinishSketch,
        }],
        AppIntent::AbortSketchRequested => vec![AppCommand::DispatchMapEvent {
            event: MapEvent::AbortSketch,
        }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomStep {
            delta_levels: state.options.view_zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomStep {
            delta_levels: -state.options.view_zoom_step,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
    }
}
