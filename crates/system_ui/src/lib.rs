//! Shared UI primitive library for the portfolio desktop shell and its hosted apps.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed
//! by the Vista shell stylesheet. Apps compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, DesktopBackdrop, DesktopIconButton,
    DesktopIconColumn, DesktopWindowLayer, Glyph, Heading, LauncherItem, LauncherMenu,
    LauncherSection, StatusLine, Taskbar, TaskbarButton, TaskbarSection, TextArea, TextField,
    TextTone, WindowBody, WindowControlButton, WindowControlKind, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar, WINDOW_CONTROL_SELECTOR,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Glyph, Heading, StatusLine, TextArea,
        TextField, TextTone,
    };
}
