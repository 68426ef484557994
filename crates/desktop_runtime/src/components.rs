//! Desktop shell UI composition and interaction surfaces.

mod dom;
mod menus;
mod mobile;
mod taskbar;
mod window;

use leptos::*;

pub use self::mobile::MobileShell;
pub(crate) use self::dom::{focus_element_by_id, focus_is_within};
use self::{menus::StartMenu, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    catalog::{self, CatalogEntry, CatalogSection, TASKBAR_HEIGHT_PX},
    model::{DesktopState, PointerPosition, WindowId, WindowRecord},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};
use system_ui::{DesktopBackdrop, DesktopIconButton, DesktopIconColumn, DesktopWindowLayer};

pub(crate) fn window_dom_id(window_id: WindowId) -> String {
    format!("window-{}", window_id.0)
}

pub(crate) fn window_body_dom_id(window_id: WindowId) -> String {
    format!("window-body-{}", window_id.0)
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where an open window is painted.
enum FramePlacement {
    /// Minimized: kept mounted so app state survives, but not painted.
    Hidden,
    /// Full viewport above the taskbar; the floating rectangle is ignored.
    Maximized { z_index: u32 },
    /// Absolutely positioned floating rectangle, including any in-flight drag offset.
    Floating {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        z_index: u32,
    },
}

impl FramePlacement {
    fn for_window(win: &WindowRecord, drag_offset: (i32, i32)) -> Self {
        if !win.is_visible() {
            return Self::Hidden;
        }
        if win.is_maximized {
            return Self::Maximized {
                z_index: win.z_index,
            };
        }
        let rect = win.rect.offset(drag_offset.0, drag_offset.1);
        Self::Floating {
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            z_index: win.z_index,
        }
    }

    fn style(self) -> String {
        match self {
            Self::Hidden => "display:none;".to_string(),
            Self::Maximized { z_index } => format!(
                "position:fixed;left:0;top:0;right:0;bottom:{TASKBAR_HEIGHT_PX}px;z-index:{z_index};"
            ),
            Self::Floating { x, y, w, h, z_index } => format!(
                "position:absolute;left:{x}px;top:{y}px;width:{w}px;height:{h}px;z-index:{z_index};"
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarEntry {
    window_id: WindowId,
    title: &'static str,
    icon: &'static str,
    minimized: bool,
}

/// Open windows (minimized or not) in catalog order.
fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .registry
        .open_windows()
        .map(|win| TaskbarEntry {
            window_id: win.id,
            title: win.title,
            icon: win.icon,
            minimized: win.is_minimized,
        })
        .collect()
}

fn start_menu_sections() -> Vec<(CatalogSection, Vec<CatalogEntry>)> {
    CatalogSection::ALL
        .into_iter()
        .map(|section| (section, catalog::entries_in_section(section)))
        .filter(|(_, entries)| !entries.is_empty())
        .collect()
}

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// `h:mm AM/PM`.
    fn time_label(self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {suffix}", self.minute)
    }

    /// `Mon D, YYYY`.
    fn date_label(self) -> String {
        let month_index = self.month.clamp(1, 12) as usize - 1;
        format!(
            "{} {}, {}",
            MONTH_ABBREVIATIONS[month_index], self.day, self.year
        )
    }
}

#[component]
/// Renders the full desktop shell: icon columns, window layer, start menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let icon_columns = CatalogSection::ALL
        .into_iter()
        .map(|section| {
            view! {
                <DesktopIconColumn ui_slot=section.token() aria_label=section.label()>
                    <For
                        each=move || catalog::entries_in_section(section)
                        key=|entry| entry.id.0
                        let:entry
                    >
                        {{
                            let window_id = entry.id;
                            view! {
                                <DesktopIconButton
                                    glyph=entry.icon
                                    label=entry.desktop_label
                                    title=entry.title
                                    on_dblclick=Callback::new(move |_| {
                                        runtime.dispatch_action(DesktopAction::OpenWindow {
                                            window_id,
                                        });
                                    })
                                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            runtime.dispatch_action(DesktopAction::OpenWindow {
                                                window_id,
                                            });
                                        }
                                    })
                                />
                            }
                        }}
                    </For>
                </DesktopIconColumn>
            }
        })
        .collect_view();

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-start-menu-open=move || state.get().start_menu_open.to_string()
        >
            <DesktopBackdrop>
                <div data-ui-slot="wallpaper" aria-hidden="true"></div>
                {icon_columns}
                <DesktopWindowLayer>
                    <For
                        each=|| catalog::window_catalog().to_vec()
                        key=|entry| entry.id.0
                        let:entry
                    >
                        <DesktopWindow window_id=entry.id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <StartMenu />
            <Taskbar />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reducer::reduce_desktop;

    const ABOUT: WindowId = WindowId("about");
    const PROJECTS: WindowId = WindowId("projects");
    const RESUME: WindowId = WindowId("resume");
    const SNAKE: WindowId = WindowId("snake");

    fn apply(state: &mut DesktopState, action: DesktopAction) {
        reduce_desktop(state, action).expect("valid action");
    }

    fn record(state: &DesktopState, id: WindowId) -> WindowRecord {
        state.window(id).cloned().expect("catalog window")
    }

    #[test]
    fn taskbar_lists_open_windows_in_catalog_order_regardless_of_focus() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::OpenWindow { window_id: SNAKE });
        apply(&mut state, DesktopAction::OpenWindow { window_id: PROJECTS });
        apply(&mut state, DesktopAction::OpenWindow { window_id: ABOUT });
        apply(&mut state, DesktopAction::MinimizeWindow { window_id: PROJECTS });
        apply(&mut state, DesktopAction::FocusWindow { window_id: SNAKE });

        let entries = taskbar_entries(&state);
        let ids: Vec<WindowId> = entries.iter().map(|e| e.window_id).collect();
        assert_eq!(ids, vec![ABOUT, PROJECTS, SNAKE]);
        assert!(entries[1].minimized);
        assert!(!entries[0].minimized);
    }

    #[test]
    fn taskbar_lists_a_window_iff_it_is_open() {
        let mut state = DesktopState::default();
        assert!(taskbar_entries(&state).is_empty());

        apply(&mut state, DesktopAction::OpenWindow { window_id: RESUME });
        apply(&mut state, DesktopAction::MinimizeWindow { window_id: RESUME });
        assert_eq!(taskbar_entries(&state).len(), 1);

        apply(&mut state, DesktopAction::CloseWindow { window_id: RESUME });
        assert!(taskbar_entries(&state).is_empty());
    }

    #[test]
    fn maximized_placement_spans_viewport_above_taskbar() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::OpenWindow { window_id: RESUME });
        apply(
            &mut state,
            DesktopAction::ToggleMaximizeWindow { window_id: RESUME },
        );
        let resume = record(&state, RESUME);

        let placement = FramePlacement::for_window(&resume, (30, 40));
        assert_eq!(
            placement,
            FramePlacement::Maximized {
                z_index: resume.z_index
            }
        );
        assert_eq!(
            placement.style(),
            format!(
                "position:fixed;left:0;top:0;right:0;bottom:{TASKBAR_HEIGHT_PX}px;z-index:{};",
                resume.z_index
            )
        );
    }

    #[test]
    fn floating_placement_applies_drag_offset_without_touching_size() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::OpenWindow { window_id: RESUME });
        let resume = record(&state, RESUME);

        let placement = FramePlacement::for_window(&resume, (-20, 15));
        assert_eq!(
            placement,
            FramePlacement::Floating {
                x: resume.rect.x - 20,
                y: resume.rect.y + 15,
                w: resume.rect.w,
                h: resume.rect.h,
                z_index: resume.z_index,
            }
        );
        assert!(placement.style().starts_with("position:absolute;"));
    }

    #[test]
    fn minimized_window_is_hidden_and_keeps_its_rectangle() {
        let mut state = DesktopState::default();
        apply(&mut state, DesktopAction::OpenWindow { window_id: ABOUT });
        let floating = record(&state, ABOUT).rect;
        apply(&mut state, DesktopAction::MinimizeWindow { window_id: ABOUT });

        let about = record(&state, ABOUT);
        assert_eq!(FramePlacement::for_window(&about, (0, 0)), FramePlacement::Hidden);
        assert_eq!(FramePlacement::Hidden.style(), "display:none;");
        assert_eq!(about.rect, floating);
    }

    #[test]
    fn start_menu_groups_whole_catalog_by_section() {
        let sections = start_menu_sections();
        let labels: Vec<&str> = sections.iter().map(|(s, _)| s.label()).collect();
        assert_eq!(labels, vec!["Programs", "Games"]);

        let listed: usize = sections.iter().map(|(_, entries)| entries.len()).sum();
        assert_eq!(listed, catalog::window_catalog().len());
        assert!(sections[1].1.iter().any(|entry| entry.id == SNAKE));
    }

    #[test]
    fn clock_uses_twelve_hour_time_and_short_date() {
        let midnight = TaskbarClockSnapshot {
            year: 2024,
            month: 3,
            day: 7,
            hour: 0,
            minute: 5,
        };
        assert_eq!(midnight.time_label(), "12:05 AM");
        assert_eq!(midnight.date_label(), "Mar 7, 2024");

        let afternoon = TaskbarClockSnapshot {
            hour: 13,
            minute: 45,
            ..midnight
        };
        assert_eq!(afternoon.time_label(), "1:45 PM");

        let noon = TaskbarClockSnapshot {
            hour: 12,
            minute: 0,
            month: 12,
            ..midnight
        };
        assert_eq!(noon.time_label(), "12:00 PM");
        assert_eq!(noon.date_label(), "Dec 7, 2024");
    }

    #[test]
    fn dom_ids_are_stable_per_window() {
        assert_eq!(window_dom_id(ABOUT), "window-about");
        assert_eq!(window_body_dom_id(ABOUT), "window-body-about");
    }
}
