use std::time::Duration;

use super::*;
use system_ui::{Button, ButtonVariant, Glyph, Taskbar as TaskbarRoot, TaskbarButton, TaskbarSection};

pub(super) const START_BUTTON_DOM_ID: &str = "taskbar-start-button";

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let entries = create_memo(move |_| taskbar_entries(&state.get()));

    view! {
        <TaskbarRoot aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <Button
                    id=START_BUTTON_DOM_ID
                    variant=ButtonVariant::Primary
                    ui_slot="start-orb"
                    aria_label="Start".to_string()
                    pressed=Signal::derive(move || state.get().start_menu_open)
                    on_pointerdown=Callback::new(move |ev: web_sys::PointerEvent| {
                        ev.stop_propagation();
                    })
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    <Glyph glyph="🪟" />
                    <span>"Start"</span>
                </Button>
            </TaskbarSection>

            <TaskbarSection ui_slot="running" aria_label="Open windows">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.window_id.0, entry.minimized)
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        view! {
                            <TaskbarButton
                                glyph=entry.icon
                                label=entry.title
                                active=!entry.minimized
                                minimized=entry.minimized
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(
                                        DesktopAction::ActivateTaskbarWindow { window_id },
                                    );
                                })
                            />
                        }
                    }}
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="tray">
                <time class="taskbar-clock" data-ui-kind="clock">
                    <span data-ui-slot="time">{move || clock_now.get().time_label()}</span>
                    <span data-ui-slot="date">{move || clock_now.get().date_label()}</span>
                </time>
            </TaskbarSection>
        </TaskbarRoot>
    }
}
