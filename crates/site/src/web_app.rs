use desktop_runtime::{DesktopProvider, DesktopShell, MobileShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Widest viewport, in CSS pixels, that still gets the single-page layout.
const MOBILE_BREAKPOINT_PX: f64 = 768.0;

fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Vista Portfolio" />
        <Meta name="description" content="A Windows Vista-style desktop portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/mobile" view=MobileEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Desktop shell, or the mobile layout while the viewport is at or below the breakpoint.
pub fn DesktopEntry() -> impl IntoView {
    let narrow = create_rw_signal(viewport_width().map(is_mobile_width).unwrap_or(false));

    let resize_listener = window_event_listener(ev::resize, move |_| {
        if let Some(width) = viewport_width() {
            let now_narrow = is_mobile_width(width);
            if narrow.get_untracked() != now_narrow {
                logging::log!("viewport crossed the mobile breakpoint at {width}px");
                narrow.set(now_narrow);
            }
        }
    });
    on_cleanup(move || resize_listener.remove());

    view! {
        <Show
            when=move || !narrow.get()
            fallback=|| view! { <MobileShell /> }
        >
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </Show>
    }
}

#[component]
pub fn MobileEntry() -> impl IntoView {
    view! { <MobileShell /> }
}
