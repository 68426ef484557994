//! Minesweeper: 9×9 board, 10 mines, first click always safe.

mod engine;

use leptos::*;
use system_ui::prelude::*;

use crate::engine::{Board, Cell, Status, COLS, ROWS};

fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        return js_sys::Date::now() as u64;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0x5EED
    }
}

fn cell_label(cell: Cell) -> String {
    if cell.flagged && !cell.revealed {
        return "🚩".to_string();
    }
    if !cell.revealed {
        return String::new();
    }
    if cell.mine {
        return "💣".to_string();
    }
    if cell.count == 0 {
        String::new()
    } else {
        cell.count.to_string()
    }
}

#[component]
pub fn MinesweeperApp() -> impl IntoView {
    let board = create_rw_signal(Board::new(session_seed()));

    let reveal = move |idx: usize| {
        let before = board.with_untracked(|b| b.status);
        board.update(|b| b.reveal(idx));
        let after = board.with_untracked(|b| b.status);
        if after != before && after.is_over() {
            logging::log!("minesweeper game over: {after:?}");
        }
    };

    view! {
        <div class="app-shell app-minesweeper">
            <div class="mines-header">
                <span class="mines-counter">"💣 " <b>{move || board.with(Board::mines_left)}</b></span>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Sm
                    aria_label="New game".to_string()
                    on_click=Callback::new(move |_| board.set(Board::new(session_seed())))
                >
                    {move || board.with(|b| b.status.face())}
                </Button>
                <span class="mines-counter">"🚩 " <b>{move || board.with(Board::flag_count)}</b></span>
            </div>

            <div
                class="mines-grid"
                role="grid"
                aria-label="Minefield"
                style=format!("grid-template-columns:repeat({COLS},1fr);")
            >
                {(0..ROWS * COLS)
                    .map(|idx| {
                        let cell = move || board.with(|b| b.cells[idx]);
                        view! {
                            <button
                                type="button"
                                class="mines-cell"
                                role="gridcell"
                                data-revealed=move || cell().revealed.to_string()
                                data-count=move || cell().count.to_string()
                                on:click=move |_| reveal(idx)
                                on:contextmenu=move |ev: ev::MouseEvent| {
                                    ev.prevent_default();
                                    board.update(|b| b.toggle_flag(idx));
                                }
                            >
                                {move || cell_label(cell())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <StatusLine
                text=Signal::derive(move || {
                    match board.with(|b| b.status) {
                        Status::Fresh => "Click any cell to start.",
                        Status::Playing => "Right-click to flag a mine.",
                        Status::Won => "Cleared! 🎉",
                        Status::Lost => "Boom. Try again?",
                    }
                        .to_string()
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_hide_unrevealed_cells_and_blank_zeroes() {
        let hidden = Cell::default();
        assert_eq!(cell_label(hidden), "");
        assert_eq!(
            cell_label(Cell {
                flagged: true,
                ..hidden
            }),
            "🚩"
        );
        assert_eq!(
            cell_label(Cell {
                revealed: true,
                count: 3,
                ..hidden
            }),
            "3"
        );
        assert_eq!(
            cell_label(Cell {
                revealed: true,
                ..hidden
            }),
            ""
        );
        assert_eq!(
            cell_label(Cell {
                revealed: true,
                mine: true,
                ..hidden
            }),
            "💣"
        );
    }
}
