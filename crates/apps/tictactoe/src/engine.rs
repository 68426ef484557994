//! Tic-Tac-Toe rules and the minimax opponent.

pub(crate) const CELL_COUNT: usize = 9;

const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    /// The human player.
    X,
    /// The computer.
    O,
}

impl Mark {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

pub(crate) type Board = [Option<Mark>; CELL_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Win { mark: Mark, line: [usize; 3] },
    Draw,
}

pub(crate) fn outcome(board: &Board) -> Option<Outcome> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(Outcome::Win { mark, line });
            }
        }
    }
    if board.iter().all(Option::is_some) {
        return Some(Outcome::Draw);
    }
    None
}

/// Depth-aware score from O's point of view: sooner wins score higher, sooner losses lower.
fn minimax(board: &mut Board, o_to_move: bool, depth: i32) -> i32 {
    match outcome(board) {
        Some(Outcome::Win { mark: Mark::O, .. }) => return 10 - depth,
        Some(Outcome::Win { mark: Mark::X, .. }) => return depth - 10,
        Some(Outcome::Draw) => return 0,
        None => {}
    }

    let mark = if o_to_move { Mark::O } else { Mark::X };
    let mut best = if o_to_move { i32::MIN } else { i32::MAX };
    for cell in 0..CELL_COUNT {
        if board[cell].is_some() {
            continue;
        }
        board[cell] = Some(mark);
        let score = minimax(board, !o_to_move, depth + 1);
        board[cell] = None;
        best = if o_to_move {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Best reply for O; ties resolve to the lowest cell index.
pub(crate) fn best_move(board: &Board) -> Option<usize> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;
    for cell in 0..CELL_COUNT {
        if scratch[cell].is_some() {
            continue;
        }
        scratch[cell] = Some(Mark::O);
        let score = minimax(&mut scratch, false, 1);
        scratch[cell] = None;
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
    }
    best.map(|(cell, _)| cell)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Scores {
    pub(crate) x: u32,
    pub(crate) o: u32,
    pub(crate) draws: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveResult {
    /// Occupied cell, or the round is already over.
    Ignored,
    /// Both players moved and the round goes on.
    Continued,
    /// The round ended on this turn.
    Finished(Outcome),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct GameState {
    pub(crate) board: Board,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) scores: Scores,
}

impl GameState {
    /// Places X at `cell` and, unless that ends the round, answers immediately with O.
    pub(crate) fn play(&mut self, cell: usize) -> MoveResult {
        if self.outcome.is_some() || cell >= CELL_COUNT || self.board[cell].is_some() {
            return MoveResult::Ignored;
        }
        self.board[cell] = Some(Mark::X);
        if let Some(done) = self.settle() {
            return MoveResult::Finished(done);
        }

        if let Some(reply) = best_move(&self.board) {
            self.board[reply] = Some(Mark::O);
        }
        match self.settle() {
            Some(done) => MoveResult::Finished(done),
            None => MoveResult::Continued,
        }
    }

    fn settle(&mut self) -> Option<Outcome> {
        let done = outcome(&self.board)?;
        match done {
            Outcome::Win { mark: Mark::X, .. } => self.scores.x += 1,
            Outcome::Win { mark: Mark::O, .. } => self.scores.o += 1,
            Outcome::Draw => self.scores.draws += 1,
        }
        self.outcome = Some(done);
        Some(done)
    }

    /// Clears the board for a new round; the score tally survives.
    pub(crate) fn reset(&mut self) {
        self.board = [None; CELL_COUNT];
        self.outcome = None;
    }

    pub(crate) fn is_winning_cell(&self, cell: usize) -> bool {
        matches!(self.outcome, Some(Outcome::Win { line, .. }) if line.contains(&cell))
    }

    pub(crate) fn status_text(&self) -> &'static str {
        match self.outcome {
            None => "Your turn (X)",
            Some(Outcome::Draw) => "It's a draw!",
            Some(Outcome::Win { mark: Mark::X, .. }) => "🎉 You win!",
            Some(Outcome::Win { mark: Mark::O, .. }) => "🤖 AI wins!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        let mut out = [None; CELL_COUNT];
        for (idx, ch) in cells.chars().filter(|c| !c.is_whitespace()).enumerate() {
            out[idx] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        out
    }

    #[test]
    fn detects_wins_with_line_and_draws() {
        assert_eq!(
            outcome(&board("X X X O O . . . .")),
            Some(Outcome::Win {
                mark: Mark::X,
                line: [0, 1, 2]
            })
        );
        assert_eq!(
            outcome(&board("O X . X O . . X O")),
            Some(Outcome::Win {
                mark: Mark::O,
                line: [0, 4, 8]
            })
        );
        assert_eq!(outcome(&board("X O X X O O O X X")), Some(Outcome::Draw));
        assert_eq!(outcome(&board(". . . . . . . . .")), None);
    }

    #[test]
    fn ai_takes_an_immediate_win_over_a_block() {
        // O can win at 5; X threatens at 2.
        assert_eq!(best_move(&board("X X . O O . X . .")), Some(5));
    }

    #[test]
    fn ai_blocks_an_immediate_threat() {
        assert_eq!(best_move(&board("X X . . O . . . .")), Some(2));
    }

    #[test]
    fn occupied_cells_and_finished_rounds_are_ignored() {
        let mut game = GameState::default();
        assert_eq!(game.play(4), MoveResult::Continued);
        let before = game.clone();
        assert_eq!(game.play(4), MoveResult::Ignored);
        assert_eq!(game.play(9), MoveResult::Ignored);
        assert_eq!(game, before);
    }

    fn assert_ai_never_loses(game: &GameState) {
        for cell in 0..CELL_COUNT {
            let mut next = game.clone();
            match next.play(cell) {
                MoveResult::Ignored => {}
                MoveResult::Continued => assert_ai_never_loses(&next),
                MoveResult::Finished(done) => assert!(
                    !matches!(done, Outcome::Win { mark: Mark::X, .. }),
                    "human won with board {:?}",
                    next.board
                ),
            }
        }
    }

    #[test]
    fn ai_never_loses_against_any_human_strategy() {
        assert_ai_never_loses(&GameState::default());
    }

    #[test]
    fn scores_accumulate_across_rounds_and_reset_keeps_them() {
        let mut game = GameState::default();
        let mut rounds = 0;
        while rounds < 2 {
            let cell = (0..CELL_COUNT)
                .find(|&c| game.board[c].is_none())
                .expect("free cell while round is running");
            if let MoveResult::Finished(_) = game.play(cell) {
                rounds += 1;
                assert!(game.status_text() != "Your turn (X)");
                game.reset();
            }
        }
        assert_eq!(game.scores.x, 0);
        assert_eq!(game.scores.o + game.scores.draws, 2);
        assert_eq!(game.board, [None; CELL_COUNT]);
        assert_eq!(game.outcome, None);
    }

    #[test]
    fn winning_cells_are_highlighted() {
        let mut game = GameState {
            board: board("X . . O O . . . X"),
            ..GameState::default()
        };
        // X ignores the threat; O completes row 3-4-5.
        assert_eq!(
            game.play(1),
            MoveResult::Finished(Outcome::Win {
                mark: Mark::O,
                line: [3, 4, 5]
            })
        );
        assert!(game.is_winning_cell(5));
        assert!(!game.is_winning_cell(0));
        assert_eq!(game.status_text(), "🤖 AI wins!");
    }
}
