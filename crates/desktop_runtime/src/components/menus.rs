use super::*;
use system_ui::{LauncherItem, LauncherMenu, LauncherSection};

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_open = create_memo(move |_| runtime.state.get().start_menu_open);

    // The menu surface and the start button stop pointerdown, so anything reaching the window
    // is an outside press.
    let outside_click_listener = window_event_listener(ev::pointerdown, move |_| {
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if runtime.state.get_untracked().start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
            let _ = focus_element_by_id(super::taskbar::START_BUTTON_DOM_ID);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <Show when=move || is_open.get() fallback=|| ()>
            <LauncherMenu
                id="start-menu"
                aria_label="Start menu"
                on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| ev.stop_propagation())
            >
                <div class="start-menu-header" data-ui-slot="header">
                    <span class="start-menu-avatar" aria-hidden="true">"👤"</span>
                    <span>"Portfolio"</span>
                </div>
                {start_menu_sections()
                    .into_iter()
                    .map(|(section, entries)| {
                        view! {
                            <LauncherSection label=section.label()>
                                {entries
                                    .into_iter()
                                    .map(|entry| {
                                        let window_id = entry.id;
                                        view! {
                                            <LauncherItem
                                                glyph=entry.icon
                                                label=entry.title
                                                on_click=Callback::new(move |_| {
                                                    runtime.dispatch_action(
                                                        DesktopAction::LaunchFromStartMenu {
                                                            window_id,
                                                        },
                                                    );
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </LauncherSection>
                        }
                    })
                    .collect_view()}
            </LauncherMenu>
        </Show>
    }
}
