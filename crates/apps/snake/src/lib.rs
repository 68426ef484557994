//! Snake: arrows or WASD to steer, space to restart after a crash.

mod engine;

use std::time::Duration;

use leptos::*;
use system_ui::prelude::*;
use wasm_bindgen::JsCast;

use crate::engine::{key_direction, Phase, Point, SnakeGame, TickResult, GRID};

const TICK: Duration = Duration::from_millis(120);

fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        return js_sys::Date::now() as u64;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5A4E
    }
}

fn typing_into_field(ev: &ev::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA"))
        .unwrap_or(false)
}

/// A minimized window has no offset parent, so the board counts as hidden.
fn board_visible(root: NodeRef<html::Div>) -> bool {
    root.get_untracked()
        .map(|el| el.offset_parent().is_some())
        .unwrap_or(false)
}

/// Only a running game on a painted board advances; other ticks leave the signal untouched.
fn should_tick(phase: Phase, visible: bool) -> bool {
    visible && phase == Phase::Running
}

fn status_text(phase: Phase) -> &'static str {
    match phase {
        Phase::Ready => "Press an arrow key or WASD to start.",
        Phase::Running => "Eat the food. Avoid the walls and your tail.",
        Phase::Dead => "Game over. Press space to play again.",
    }
}

#[component]
pub fn SnakeApp() -> impl IntoView {
    let game = create_rw_signal(SnakeGame::new(session_seed()));
    let root = create_node_ref::<html::Div>();

    match set_interval_with_handle(
        move || {
            let phase = game.with_untracked(|g| g.phase);
            if !should_tick(phase, board_visible(root)) {
                return;
            }
            if game.try_update(SnakeGame::tick) == Some(TickResult::Died) {
                let score = game.with_untracked(|g| g.score);
                logging::log!("snake game over with score {score}");
            }
        },
        TICK,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("snake timer unavailable: {err:?}"),
    }

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || typing_into_field(&ev) || !board_visible(root) {
            return;
        }

        let key = ev.key();
        if let Some(direction) = key_direction(&key) {
            ev.prevent_default();
            game.update(|g| {
                g.steer(direction);
            });
        } else if key == " " && game.with_untracked(|g| g.phase == Phase::Dead) {
            ev.prevent_default();
            game.update(SnakeGame::reset);
        }
    });
    on_cleanup(move || key_listener.remove());

    view! {
        <div class="app-shell app-snake" node_ref=root>
            <div class="snake-scores" aria-label="Score">
                <span>"Score " <b>{move || game.with(|g| g.score)}</b></span>
                <span>"Best " <b>{move || game.with(|g| g.best)}</b></span>
            </div>

            <div
                class="snake-grid"
                role="img"
                aria-label="Snake board"
                style=format!("grid-template-columns:repeat({GRID},1fr);")
                data-phase=move || format!("{:?}", game.with(|g| g.phase)).to_lowercase()
            >
                {(0..GRID * GRID)
                    .map(|i| {
                        let point = Point { x: i % GRID, y: i / GRID };
                        let kind = move || {
                            game.with(|g| {
                                if g.head() == point {
                                    "head"
                                } else if g.occupies(point) {
                                    "body"
                                } else if g.food == point {
                                    "food"
                                } else {
                                    "empty"
                                }
                            })
                        };
                        view! { <div class="snake-cell" data-cell=kind></div> }
                    })
                    .collect_view()}
            </div>

            <StatusLine
                text=Signal::derive(move || status_text(game.with(|g| g.phase)).to_string())
                tone=Signal::derive(move || match game.with(|g| g.phase) {
                    Phase::Dead => TextTone::Danger,
                    _ => TextTone::Secondary,
                })
            />
            <Button
                variant=ButtonVariant::Primary
                size=ButtonSize::Sm
                on_click=Callback::new(move |_| game.update(SnakeGame::reset))
            >
                "Restart"
            </Button>
        </div>
    }
}
