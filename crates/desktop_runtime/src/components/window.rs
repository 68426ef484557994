use super::*;
use crate::{
    apps,
    drag::{DragBounds, DragGesture},
};
use system_ui::{
    WindowBody, WindowControlButton, WindowControlKind, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar, WINDOW_CONTROL_SELECTOR,
};
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Desktop surface available to floating windows: the viewport minus the taskbar.
fn desktop_surface_bounds() -> Option<DragBounds> {
    dom::viewport_size().map(|(w, h)| DragBounds {
        w,
        h: (h - TASKBAR_HEIGHT_PX).max(0),
    })
}

fn pressed_window_control(ev: &web_sys::PointerEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(WINDOW_CONTROL_SELECTOR).ok().flatten())
        .is_some()
}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window = create_memo(move |_| runtime.state.get().window(window_id).cloned());
    let is_open = create_memo(move |_| window.get().map(|w| w.is_open).unwrap_or(false));

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <OpenWindowFrame window_id=window_id window=window />
        </Show>
    }
}

#[component]
fn OpenWindowFrame(window_id: WindowId, window: Memo<Option<WindowRecord>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let drag = create_rw_signal(DragGesture::Idle);
    let is_topmost =
        create_memo(move |_| runtime.state.get().topmost_window_id() == Some(window_id));
    let maximized = Signal::derive(move || window.get().map(|w| w.is_maximized).unwrap_or(false));

    let (title, icon) = catalog::catalog_entry(window_id)
        .map(|entry| (entry.title, entry.icon))
        .unwrap_or((window_id.0, ""));

    let style = Signal::derive(move || {
        window
            .get()
            .map(|win| FramePlacement::for_window(&win, drag.get().offset()).style())
            .unwrap_or_default()
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        let minimized = window.get_untracked().map(|w| w.is_minimized).unwrap_or(false);
        if !is_topmost.get_untracked() || minimized {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });

    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) || pressed_window_control(&ev) {
            return;
        }
        let Some(win) = window.get_untracked() else {
            return;
        };
        if win.is_maximized {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        drag.set(DragGesture::begin(win.rect, pointer_from_pointer_event(&ev)));
    });
    let update_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !drag.with_untracked(DragGesture::is_dragging) {
            return;
        }
        let pointer = pointer_from_pointer_event(&ev);
        drag.update(|gesture| gesture.update(pointer, desktop_surface_bounds()));
    });
    let end_move = Callback::new(move |_: web_sys::PointerEvent| {
        if let Some(Some((x, y))) = drag.try_update(DragGesture::finish) {
            runtime.dispatch_action(DesktopAction::UpdatePosition { window_id, x, y });
        }
    });

    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximizeWindow { window_id });
    };

    view! {
        <WindowFrame
            dom_id=window_dom_id(window_id)
            style=style
            aria_label=title.to_string()
            focused=Signal::derive(move || is_topmost.get())
            maximized=maximized
            dragging=Signal::derive(move || drag.with(DragGesture::is_dragging))
            on_pointerdown=focus
        >
            <WindowTitleBar
                on_pointerdown=begin_move
                on_pointermove=update_move
                on_pointerup=end_move
                on_dblclick=Callback::new(move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    toggle_maximize();
                })
            >
                <WindowTitle glyph=icon title=title />
                <WindowControls>
                    <WindowControlButton
                        kind=WindowControlKind::Minimize
                        aria_label="Minimize window".to_string()
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        })
                    />
                    <WindowControlButton
                        kind=Signal::derive(move || {
                            if maximized.get() {
                                WindowControlKind::Restore
                            } else {
                                WindowControlKind::Maximize
                            }
                        })
                        aria_label=Signal::derive(move || {
                            if maximized.get() {
                                "Restore window".to_string()
                            } else {
                                "Maximize window".to_string()
                            }
                        })
                        on_click=Callback::new(move |_| toggle_maximize())
                    />
                    <WindowControlButton
                        kind=WindowControlKind::Close
                        aria_label="Close window".to_string()
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        })
                    />
                </WindowControls>
            </WindowTitleBar>
            <div class="window-body-host" id=window_body_dom_id(window_id) tabindex="-1">
                <WindowBody>{apps::render_window_contents(window_id)}</WindowBody>
            </div>
        </WindowFrame>
    }
}
