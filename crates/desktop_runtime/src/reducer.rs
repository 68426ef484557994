//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::model::{DesktopState, WindowId};
use crate::window_manager::RegistryError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or, if already open, focus) a catalog window.
    OpenWindow {
        /// Window to open.
        window_id: WindowId,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window to its taskbar button.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle between the floating rectangle and the full-viewport layer.
    ToggleMaximizeWindow {
        /// Window to maximize or restore.
        window_id: WindowId,
    },
    /// Un-minimize (if needed) and raise a window.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Commit a window's floating origin at the end of a drag gesture.
    UpdatePosition {
        /// Window that was dragged.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Taskbar button activation: minimize a shown window, focus a minimized one.
    ActivateTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Open a window from a start menu entry and dismiss the menu.
    LaunchFromStartMenu {
        /// Window selected in the menu.
        window_id: WindowId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the body of a window raised by open or taskbar restore.
    FocusWindowInput(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The registry rejected the action's window id.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::Registry`] when the action names a window outside the catalog.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window_id } => {
            state.registry.open(window_id)?;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            state.registry.close(window_id)?;
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.registry.minimize(window_id)?;
        }
        DesktopAction::ToggleMaximizeWindow { window_id } => {
            state.registry.toggle_maximize(window_id)?;
        }
        // Keyboard focus stays wherever the pointer press put it.
        DesktopAction::FocusWindow { window_id } => {
            state.registry.focus(window_id)?;
            state.start_menu_open = false;
        }
        DesktopAction::UpdatePosition { window_id, x, y } => {
            state.registry.update_position(window_id, x, y)?;
        }
        DesktopAction::ActivateTaskbarWindow { window_id } => {
            let minimized = state
                .registry
                .get(window_id)
                .map(|w| w.is_minimized)
                .ok_or(RegistryError::UnknownWindow(window_id))?;
            if minimized {
                effects.extend(reduce_desktop(state, DesktopAction::FocusWindow { window_id })?);
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            } else {
                effects.extend(reduce_desktop(
                    state,
                    DesktopAction::MinimizeWindow { window_id },
                )?);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::LaunchFromStartMenu { window_id } => {
            effects.extend(reduce_desktop(state, DesktopAction::OpenWindow { window_id })?);
            state.start_menu_open = false;
        }
    }

    Ok(effects)
}
