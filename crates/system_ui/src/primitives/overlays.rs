use super::*;

#[component]
/// Start-menu style launcher panel anchored above the taskbar.
pub fn LauncherMenu(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<ev::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class="ui-launcher-menu"
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="launcher-menu"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Labeled group of launcher items.
pub fn LauncherSection(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <section
            class="ui-launcher-section"
            role="group"
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="launcher-section"
        >
            <h3 data-ui-slot="section-label">{label}</h3>
            {children()}
        </section>
    }
}

#[component]
/// Single launcher entry.
pub fn LauncherItem(
    glyph: &'static str,
    label: &'static str,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-launcher-item"
            role="menuitem"
            data-ui-primitive="true"
            data-ui-kind="launcher-item"
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
