//! Window content mounting for catalog entries.

use desktop_app_minesweeper::MinesweeperApp;
use desktop_app_portfolio::{AboutApp, BlogApp, ContactApp, ProjectsApp, ResumeApp};
use desktop_app_snake::SnakeApp;
use desktop_app_tictactoe::TicTacToeApp;
use leptos::*;

use crate::model::WindowId;

/// Renders the application hosted inside the window identified by `window_id`.
pub fn render_window_contents(window_id: WindowId) -> View {
    match window_id.as_str() {
        "about" => view! { <AboutApp /> }.into_view(),
        "projects" => view! { <ProjectsApp /> }.into_view(),
        "resume" => view! { <ResumeApp /> }.into_view(),
        "contact" => view! { <ContactApp /> }.into_view(),
        "blog" => view! { <BlogApp /> }.into_view(),
        "snake" => view! { <SnakeApp /> }.into_view(),
        "minesweeper" => view! { <MinesweeperApp /> }.into_view(),
        "tictactoe" => view! { <TicTacToeApp /> }.into_view(),
        other => {
            logging::warn!("no application registered for window `{other}`");
            view! {
                <div class="app app-missing">
                    <p>{format!("Nothing to show for `{other}`.")}</p>
                </div>
            }
            .into_view()
        }
    }
}
