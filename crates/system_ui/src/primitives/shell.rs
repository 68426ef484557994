use super::*;

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical column of desktop icons, anchored to one screen edge via `ui_slot`.
pub fn DesktopIconColumn(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class="ui-desktop-icon-column"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-column"
            data-ui-slot=ui_slot
        >
            {children()}
        </nav>
    }
}

#[component]
/// Desktop icon launcher button. Launches on double-click.
pub fn DesktopIconButton(
    glyph: &'static str,
    label: &'static str,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            title=title
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            <Glyph glyph=glyph layout_class="ui-desktop-icon-glyph" />
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Glass window frame. Geometry and stacking arrive through `style`.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] dom_id: Option<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<ev::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=dom_id
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-dragging=move || bool_token(dragging.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            // Enter animation runs on the surface only; `style` on the section owns placement.
            <div class="ui-window-surface" data-ui-slot="surface">
                {children()}
            </div>
        </section>
    }
}

#[component]
/// Window title bar. Owns the pointer stream for drag gestures once captured.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<ev::PointerEvent>>,
    #[prop(optional)] on_pointermove: Option<Callback<ev::PointerEvent>>,
    #[prop(optional)] on_pointerup: Option<Callback<ev::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:pointermove=move |ev| {
                if let Some(on_pointermove) = on_pointermove.as_ref() {
                    on_pointermove.call(ev);
                }
            }
            on:pointerup=move |ev| {
                if let Some(on_pointerup) = on_pointerup.as_ref() {
                    on_pointerup.call(ev);
                }
            }
            on:pointercancel=move |ev| {
                if let Some(on_pointerup) = on_pointerup.as_ref() {
                    on_pointerup.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon plus title text for a window title bar.
pub fn WindowTitle(glyph: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            <Glyph glyph=glyph />
            <span data-ui-slot="title-text">{title}</span>
        </div>
    }
}

#[component]
/// Title bar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Title bar control button.
///
/// Pointer presses bubble so outside-press listeners still see them; title bars skip drag
/// start for targets inside [`WINDOW_CONTROL_SELECTOR`].
pub fn WindowControlButton(
    #[prop(into)] kind: MaybeSignal<WindowControlKind>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind=WINDOW_CONTROL_KIND
            data-ui-slot=move || kind.get().token()
            on:dblclick=move |ev: MouseEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span aria-hidden="true">{move || kind.get().glyph()}</span>
        </button>
    }
}

#[component]
/// Scrollable window body.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            tabindex="-1"
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Glass taskbar docked to the bottom edge.
pub fn Taskbar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Taskbar region (start orb, running windows, tray).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button for one open window.
pub fn TaskbarButton(
    glyph: &'static str,
    label: &'static str,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-taskbar-button"
            title=label
            aria-pressed=move || bool_token(active.get())
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-active=move || bool_token(active.get())
            data-ui-minimized=move || bool_token(minimized.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Glyph glyph=glyph />
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}
