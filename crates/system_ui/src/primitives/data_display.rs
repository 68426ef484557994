use super::*;

#[component]
/// Decorative emoji/icon glyph, hidden from assistive technology.
pub fn Glyph(
    glyph: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-glyph", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="glyph"
        >
            {glyph}
        </span>
    }
}

#[component]
/// Section heading with a fixed document level.
pub fn Heading(
    #[prop(default = 2)] level: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    match level {
        1 => view! { <h1 class=class data-ui-kind="heading">{children()}</h1> }.into_view(),
        2 => view! { <h2 class=class data-ui-kind="heading">{children()}</h2> }.into_view(),
        _ => view! { <h3 class=class data-ui-kind="heading">{children()}</h3> }.into_view(),
    }
}

#[component]
/// Glass card surface.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="card"
        >
            {children()}
        </article>
    }
}

#[component]
/// Compact tag/badge.
pub fn Badge(
    #[prop(default = TextTone::Accent)] tone: TextTone,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class="ui-badge"
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Live status line announced politely to screen readers.
pub fn StatusLine(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional, into)] tone: MaybeSignal<TextTone>,
) -> impl IntoView {
    view! {
        <p
            class="ui-status-line"
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="status-line"
            data-ui-tone=move || tone.get().token()
        >
            {move || text.get()}
        </p>
    }
}
