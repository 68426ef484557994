//! Shared shell, overlay, data-display, and control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod overlays;
mod shell;

pub use controls::{Button, TextArea, TextField};
pub use data_display::{Badge, Card, Glyph, Heading, StatusLine};
pub use overlays::{LauncherItem, LauncherMenu, LauncherSection};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconColumn, DesktopWindowLayer, Taskbar,
    TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button (Vista "aero" blue).
    Primary,
    /// Quiet/toggle style button.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizing tokens.
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    #[default]
    Md,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Secondary text.
    Secondary,
    /// Accent text.
    Accent,
    /// Success/status tone.
    Success,
    /// Danger tone.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Title bar control kinds. Each kind carries its own color token in the shell stylesheet.
pub enum WindowControlKind {
    /// Minimize to the taskbar.
    Minimize,
    /// Maximize to the full viewport.
    Maximize,
    /// Restore from maximized.
    Restore,
    /// Close the window.
    Close,
}

impl WindowControlKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::Close => "close",
        }
    }

    pub(crate) fn glyph(self) -> &'static str {
        match self {
            Self::Minimize => "–",
            Self::Maximize => "□",
            Self::Restore => "❐",
            Self::Close => "✕",
        }
    }
}

pub(crate) const WINDOW_CONTROL_KIND: &str = "window-control";

/// CSS selector matching every [`WindowControlButton`].
pub const WINDOW_CONTROL_SELECTOR: &str = "[data-ui-kind=\"window-control\"]";

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-card", None), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("")), "ui-card");
        assert_eq!(merge_layout_class("ui-card", Some("wide")), "ui-card wide");
    }

    #[test]
    fn window_control_selector_matches_control_kind() {
        assert_eq!(
            WINDOW_CONTROL_SELECTOR,
            format!("[data-ui-kind=\"{WINDOW_CONTROL_KIND}\"]")
        );
    }

    #[test]
    fn window_control_tokens_are_distinct() {
        let kinds = [
            WindowControlKind::Minimize,
            WindowControlKind::Maximize,
            WindowControlKind::Restore,
            WindowControlKind::Close,
        ];
        for (idx, kind) in kinds.iter().enumerate() {
            assert!(kinds[idx + 1..].iter().all(|k| k.token() != kind.token()));
            assert!(!kind.glyph().is_empty());
        }
    }
}
