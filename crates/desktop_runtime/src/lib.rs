//! Desktop window management runtime for the portfolio site.
//!
//! [`DesktopProvider`] owns the [`DesktopState`] (window registry plus start menu flag) and routes
//! every mutation through [`reduce_desktop`]. [`DesktopShell`] renders the desktop icons, window
//! frames, start menu, and taskbar from that state.

pub mod apps;
pub mod catalog;
pub mod components;
pub mod drag;
mod effect_executor;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use components::{DesktopShell, MobileShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use window_manager::{RegistryError, WindowRegistry};
