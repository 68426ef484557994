use desktop_app_portfolio::{AboutApp, BlogApp, ContactApp, ProjectsApp, ResumeApp};
use leptos::*;

/// Section anchor id and navigation label, top to bottom.
pub(super) const MOBILE_SECTIONS: [(&str, &str); 5] = [
    ("about", "About"),
    ("projects", "Projects"),
    ("resume", "Resume"),
    ("contact", "Contact"),
    ("blog", "Blog"),
];

fn section_view(anchor: &'static str) -> View {
    match anchor {
        "about" => view! { <AboutApp /> }.into_view(),
        "projects" => view! { <ProjectsApp /> }.into_view(),
        "resume" => view! { <ResumeApp /> }.into_view(),
        "contact" => view! { <ContactApp /> }.into_view(),
        _ => view! { <BlogApp /> }.into_view(),
    }
}

#[component]
/// Single-page portfolio layout for narrow viewports. Games are desktop-only.
pub fn MobileShell() -> impl IntoView {
    view! {
        <div class="mobile-shell" data-ui-kind="mobile-shell">
            <header class="mobile-header">
                <strong class="mobile-title">"Portfolio"</strong>
                <nav class="mobile-nav" aria-label="Sections">
                    {MOBILE_SECTIONS
                        .iter()
                        .map(|(anchor, label)| view! { <a href=format!("#{anchor}")>{*label}</a> })
                        .collect_view()}
                </nav>
            </header>
            <main class="mobile-sections">
                {MOBILE_SECTIONS
                    .iter()
                    .map(|(anchor, label)| {
                        view! {
                            <section id=*anchor class="mobile-section" aria-label=*label>
                                {section_view(*anchor)}
                            </section>
                        }
                    })
                    .collect_view()}
            </main>
        </div>
    }
}
