//! Portfolio content windows: About, Projects, Resume, Contact, and Blog.
//!
//! Every widget reads the bundled [`content::PortfolioContent`] document; none of them know
//! about the desktop that hosts them.

pub mod blog;
pub mod contact;
pub mod content;

use leptos::*;
use system_ui::prelude::*;

use crate::{
    blog::{Block, Inline},
    contact::ContactForm,
    content::{portfolio_content, BlogPost},
};

#[component]
fn SectionTitle(children: Children) -> impl IntoView {
    view! { <Heading level=3 layout_class="portfolio-section-title">{children()}</Heading> }
}

#[component]
/// Bio, education, goals, and skills.
pub fn AboutApp() -> impl IntoView {
    let content = portfolio_content();
    let profile = &content.profile;

    view! {
        <div class="app-shell portfolio-about">
            <header class="portfolio-profile">
                <div class="portfolio-avatar" aria-hidden="true">{profile.initials.clone()}</div>
                <div>
                    <Heading level=1>{profile.name.clone()}</Heading>
                    <p class="portfolio-headline">{profile.headline.clone()}</p>
                    <Show when=move || !content.profile.location.is_empty() fallback=|| ()>
                        <p class="portfolio-location">
                            {format!("📍 {}", content.profile.location)}
                        </p>
                    </Show>
                </div>
            </header>

            <section>
                <SectionTitle>"About"</SectionTitle>
                <p>{profile.bio.clone()}</p>
            </section>

            <Show when=move || !content.education.is_empty() fallback=|| ()>
                <section>
                    <SectionTitle>"Education"</SectionTitle>
                    {content
                        .education
                        .iter()
                        .map(|edu| {
                            view! {
                                <Card layout_class="portfolio-education">
                                    <strong>{edu.degree.clone()}</strong>
                                    <span>{edu.institution.clone()}</span>
                                    <Badge tone=TextTone::Secondary>{edu.years.clone()}</Badge>
                                </Card>
                            }
                        })
                        .collect_view()}
                </section>
            </Show>

            <Show when=move || !content.profile.goals.is_empty() fallback=|| ()>
                <section>
                    <SectionTitle>"Goals"</SectionTitle>
                    <p>{content.profile.goals.clone()}</p>
                </section>
            </Show>

            <section>
                <SectionTitle>"Skills"</SectionTitle>
                <ul class="portfolio-skills">
                    {content
                        .skills
                        .iter()
                        .map(|skill| {
                            view! {
                                <li title=skill.description.clone()>
                                    <span>{skill.name.clone()}</span>
                                    <Badge>{skill.level.clone()}</Badge>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}

#[component]
/// Project cards with tech badges and outbound links.
pub fn ProjectsApp() -> impl IntoView {
    let content = portfolio_content();

    view! {
        <div class="app-shell portfolio-projects">
            {content
                .projects
                .iter()
                .map(|project| {
                    view! {
                        <Card layout_class="portfolio-project" aria_label=project.title.clone()>
                            <Heading level=3>{project.title.clone()}</Heading>
                            <p>{project.description.clone()}</p>
                            <div class="portfolio-tech">
                                {project
                                    .tech
                                    .iter()
                                    .map(|tech| view! { <Badge>{tech.clone()}</Badge> })
                                    .collect_view()}
                            </div>
                            <div class="portfolio-links">
                                {project
                                    .source_url
                                    .clone()
                                    .map(|href| external_link(href, "Source"))}
                                {project
                                    .live_url
                                    .clone()
                                    .map(|href| external_link(href, "Live demo"))}
                            </div>
                        </Card>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn external_link(href: String, label: &'static str) -> impl IntoView {
    view! {
        <a class="portfolio-link" href=href target="_blank" rel="noopener noreferrer">
            {label}
        </a>
    }
}

#[component]
/// Résumé download plus social links.
pub fn ResumeApp() -> impl IntoView {
    let social = &portfolio_content().social;

    view! {
        <div class="app-shell portfolio-resume">
            <Card layout_class="portfolio-resume-card">
                <Heading level=2>"Résumé"</Heading>
                {match social.resume_url.clone() {
                    Some(href) => {
                        view! {
                            <a class="portfolio-download" href=href download="">
                                "⬇ Download PDF"
                            </a>
                        }
                            .into_view()
                    }
                    None => view! { <p>"Résumé available on request."</p> }.into_view(),
                }}
            </Card>
            <Card layout_class="portfolio-social">
                <Heading level=3>"Find me online"</Heading>
                {social.github.clone().map(|href| external_link(href, "GitHub"))}
                {social.linkedin.clone().map(|href| external_link(href, "LinkedIn"))}
                {external_link(format!("mailto:{}", social.email), "E-mail")}
            </Card>
        </div>
    }
}

fn open_mail_client(url: &str) {
    if let Err(err) = window().location().set_href(url) {
        logging::warn!("could not open mail client: {err:?}");
    }
}

#[component]
/// Contact form that validates locally and hands off to the visitor's mail client.
pub fn ContactApp() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let message = create_rw_signal(String::new());
    let status = create_rw_signal(None::<(TextTone, String)>);

    let send = Callback::new(move |_: ev::MouseEvent| {
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match form.mailto_url(&portfolio_content().social.email) {
            Ok(url) => {
                open_mail_client(&url);
                status.set(Some((
                    TextTone::Success,
                    "Opening your mail app. Thanks for reaching out!".to_string(),
                )));
            }
            Err(err) => status.set(Some((TextTone::Danger, err.to_string()))),
        }
    });

    view! {
        <div class="app-shell portfolio-contact">
            <Heading level=2>"Get in touch"</Heading>
            <TextField label="Name" value=name placeholder="Your name" />
            <TextField label="E-mail" value=email input_type="email" placeholder="you@example.com" />
            <TextArea label="Message" value=message rows=5 placeholder="Say hello…" />
            <Button variant=ButtonVariant::Primary on_click=send>
                "Send ✉"
            </Button>
            <Show when=move || status.get().is_some() fallback=|| ()>
                <StatusLine
                    text=Signal::derive(move || {
                        status.get().map(|(_, text)| text).unwrap_or_default()
                    })
                    tone=Signal::derive(move || {
                        status.get().map(|(tone, _)| tone).unwrap_or_default()
                    })
                />
            </Show>
        </div>
    }
}

fn tag_label(tag: &str) -> String {
    format!("#{tag}")
}

fn render_inline(spans: Vec<Inline>) -> impl IntoView {
    spans
        .into_iter()
        .map(|span| match span {
            Inline::Text(text) => text.into_view(),
            Inline::Strong(text) => view! { <strong>{text}</strong> }.into_view(),
            Inline::Emphasis(text) => view! { <em>{text}</em> }.into_view(),
        })
        .collect_view()
}

fn render_post_body(body: &str) -> impl IntoView {
    blog::parse_body(body)
        .into_iter()
        .map(|block| match block {
            Block::Title(text) => view! { <h2>{text}</h2> }.into_view(),
            Block::Subtitle(text) => view! { <h3>{text}</h3> }.into_view(),
            Block::Rule => view! { <hr /> }.into_view(),
            Block::Break => view! { <br /> }.into_view(),
            Block::Paragraph(spans) => view! { <p>{render_inline(spans)}</p> }.into_view(),
        })
        .collect_view()
}

#[component]
fn BlogPostView(post: BlogPost, on_back: Callback<()>) -> impl IntoView {
    view! {
        <article class="portfolio-post">
            <div class="portfolio-post-bar">
                <Button size=ButtonSize::Sm on_click=Callback::new(move |_| on_back.call(()))>
                    "← Back"
                </Button>
                <span class="portfolio-post-date">{post.date.clone()}</span>
            </div>
            <Heading level=2>{post.title.clone()}</Heading>
            <div class="portfolio-post-tags">
                {post
                    .tags
                    .iter()
                    .map(|tag| {
                        let label = tag_label(tag);
                        view! { <Badge>{label}</Badge> }
                    })
                    .collect_view()}
            </div>
            <div class="portfolio-post-body">{render_post_body(&post.body)}</div>
        </article>
    }
}

#[component]
/// Post list with tag filter; selecting a post opens its body.
pub fn BlogApp() -> impl IntoView {
    let content = portfolio_content();
    let selected = create_rw_signal(None::<String>);
    let tag_filter = create_rw_signal(None::<String>);

    let visible_posts = create_memo(move |_| {
        let filter = tag_filter.get();
        content
            .posts_newest_first()
            .into_iter()
            .filter(|post| filter.as_ref().map_or(true, |tag| post.tags.contains(tag)))
            .collect::<Vec<_>>()
    });
    let back = Callback::new(move |()| selected.set(None));

    view! {
        <div class="app-shell portfolio-blog">
            {move || {
                if let Some(post) = selected.get().and_then(|slug| content.post(&slug).cloned()) {
                    return view! { <BlogPostView post=post on_back=back /> }.into_view();
                }
                if content.posts.is_empty() {
                    return view! { <p class="portfolio-empty">"📝 No posts yet."</p> }.into_view();
                }
                view! {
                    <div class="portfolio-tag-filter" role="group" aria-label="Filter by tag">
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Quiet
                            pressed=Signal::derive(move || tag_filter.get().is_none())
                            on_click=Callback::new(move |_| tag_filter.set(None))
                        >
                            "All"
                        </Button>
                        {content
                            .post_tags()
                            .into_iter()
                            .map(|tag| {
                                let label = tag_label(&tag);
                                let pressed_tag = tag.clone();
                                view! {
                                    <Button
                                        size=ButtonSize::Sm
                                        variant=ButtonVariant::Quiet
                                        pressed=Signal::derive(move || {
                                            tag_filter.get().as_deref() == Some(pressed_tag.as_str())
                                        })
                                        on_click=Callback::new(move |_| tag_filter.set(Some(tag.clone())))
                                    >
                                        {label}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ul class="portfolio-post-list">
                        <For
                            each=move || visible_posts.get()
                            key=|post| post.slug.clone()
                            let:post
                        >
                            {{
                                let slug = post.slug.clone();
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="portfolio-post-link"
                                            on:click=move |_| selected.set(Some(slug.clone()))
                                        >
                                            <strong>{post.title.clone()}</strong>
                                            <span>{post.date.clone()}</span>
                                            <span>{post.summary.clone()}</span>
                                        </button>
                                    </li>
                                }
                            }}
                        </For>
                    </ul>
                }
                    .into_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_labels_are_prefixed_with_hash() {
        assert_eq!(tag_label("rust"), "#rust");
        assert_eq!(tag_label("web assembly"), "#web assembly");
    }
}
