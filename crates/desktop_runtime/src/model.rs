use std::fmt;

use crate::catalog::{self, CatalogEntry};
use crate::window_manager::WindowRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub &'static str);

impl WindowId {
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn with_origin(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: &'static str,
    pub icon: &'static str,
    pub is_open: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u32,
    pub rect: WindowRect,
}

impl WindowRecord {
    /// Builds the closed, session-start record for a catalog entry.
    pub fn from_catalog(entry: &CatalogEntry, z_index: u32) -> Self {
        Self {
            id: entry.id,
            title: entry.title,
            icon: entry.icon,
            is_open: false,
            is_minimized: false,
            is_maximized: false,
            z_index,
            rect: entry.default_rect,
        }
    }

    /// Open and not minimized, i.e. painted on the desktop surface.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub registry: WindowRegistry,
    pub start_menu_open: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            registry: WindowRegistry::new(catalog::window_catalog(), catalog::Z_INDEX_BASELINE),
            start_menu_open: false,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.registry.get(window_id)
    }

    pub fn topmost_window_id(&self) -> Option<WindowId> {
        self.registry.topmost().map(|w| w.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}
