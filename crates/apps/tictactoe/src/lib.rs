//! Tic-Tac-Toe against an unbeatable minimax opponent.

mod engine;

use leptos::*;
use system_ui::prelude::*;

use crate::engine::{GameState, MoveResult, CELL_COUNT};

#[component]
pub fn TicTacToeApp() -> impl IntoView {
    let game = create_rw_signal(GameState::default());

    let play = move |cell: usize| {
        if let Some(MoveResult::Finished(outcome)) = game.try_update(|state| state.play(cell)) {
            logging::log!("tic-tac-toe round finished: {outcome:?}");
        }
    };

    view! {
        <div class="app-shell app-tictactoe">
            <div class="ttt-scores" aria-label="Score">
                <div><strong>{move || game.get().scores.x}</strong><span>"You (X)"</span></div>
                <div><strong>{move || game.get().scores.draws}</strong><span>"Draw"</span></div>
                <div><strong>{move || game.get().scores.o}</strong><span>"AI (O)"</span></div>
            </div>

            <StatusLine
                text=Signal::derive(move || game.get().status_text().to_string())
                tone=Signal::derive(move || match game.get().outcome {
                    None => TextTone::Accent,
                    Some(_) => TextTone::Primary,
                })
            />

            <div class="ttt-board" role="grid" aria-label="Board">
                {(0..CELL_COUNT)
                    .map(|cell| {
                        view! {
                            <button
                                type="button"
                                class="ttt-cell"
                                role="gridcell"
                                data-winning=move || game.get().is_winning_cell(cell).to_string()
                                data-mark=move || {
                                    game.get().board[cell].map(|m| m.symbol()).unwrap_or("")
                                }
                                on:click=move |_| play(cell)
                            >
                                {move || game.get().board[cell].map(|m| m.symbol()).unwrap_or("")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Button
                variant=ButtonVariant::Primary
                on_click=Callback::new(move |_| game.update(GameState::reset))
            >
                {move || if game.get().outcome.is_some() { "Play Again" } else { "Reset" }}
            </Button>
            <p class="ttt-hint">"You are X · AI never loses"</p>
        </div>
    }
}
