//! Minesweeper board rules.
//!
//! Mines are laid on the first reveal so the first click is always safe. Placement draws from a
//! seedable xorshift generator, which keeps boards reproducible under test.

pub(crate) const ROWS: usize = 9;
pub(crate) const COLS: usize = 9;
pub(crate) const MINES: usize = 10;
const CELL_COUNT: usize = ROWS * COLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct XorShift64(u64);

impl XorShift64 {
    pub(crate) fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub(crate) fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    /// Adjacent mines.
    pub(crate) count: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Status {
    /// Waiting for the first reveal; no mines placed yet.
    Fresh,
    Playing,
    Won,
    Lost,
}

impl Status {
    pub(crate) fn face(self) -> &'static str {
        match self {
            Self::Fresh | Self::Playing => "🙂",
            Self::Won => "😎",
            Self::Lost => "😵",
        }
    }

    pub(crate) fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

fn neighbors(idx: usize) -> impl Iterator<Item = usize> {
    let (row, col) = ((idx / COLS) as isize, (idx % COLS) as isize);
    (-1..=1isize)
        .flat_map(move |dr| (-1..=1isize).map(move |dc| (row + dr, col + dc)))
        .filter(move |&(r, c)| {
            (r, c) != (row, col) && r >= 0 && c >= 0 && r < ROWS as isize && c < COLS as isize
        })
        .map(|(r, c)| r as usize * COLS + c as usize)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Board {
    pub(crate) cells: Vec<Cell>,
    pub(crate) status: Status,
    rng: XorShift64,
}

impl Board {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            cells: vec![Cell::default(); CELL_COUNT],
            status: Status::Fresh,
            rng: XorShift64::new(seed),
        }
    }

    fn lay_mines(&mut self, safe: usize) {
        let mut placed = 0;
        while placed < MINES {
            let idx = self.rng.below(CELL_COUNT);
            if idx == safe || self.cells[idx].mine {
                continue;
            }
            self.cells[idx].mine = true;
            placed += 1;
        }
        for idx in 0..CELL_COUNT {
            let count = neighbors(idx).filter(|&n| self.cells[n].mine).count();
            self.cells[idx].count = count as u8;
        }
    }

    /// Reveals `idx`. Flagged and revealed cells, and finished games, are left alone.
    pub(crate) fn reveal(&mut self, idx: usize) {
        if self.status.is_over() || idx >= CELL_COUNT {
            return;
        }
        let cell = self.cells[idx];
        if cell.revealed || cell.flagged {
            return;
        }
        if self.status == Status::Fresh {
            self.lay_mines(idx);
            self.status = Status::Playing;
        }

        if self.cells[idx].mine {
            for cell in self.cells.iter_mut().filter(|c| c.mine) {
                cell.revealed = true;
            }
            self.status = Status::Lost;
            return;
        }

        self.flood_reveal(idx);
        if self.cells.iter().all(|c| c.mine || c.revealed) {
            self.status = Status::Won;
        }
    }

    fn flood_reveal(&mut self, start: usize) {
        let mut pending = vec![start];
        while let Some(idx) = pending.pop() {
            let cell = &mut self.cells[idx];
            if cell.revealed || cell.flagged || cell.mine {
                continue;
            }
            cell.revealed = true;
            if cell.count == 0 {
                pending.extend(neighbors(idx).filter(|&n| !self.cells[n].revealed));
            }
        }
    }

    pub(crate) fn toggle_flag(&mut self, idx: usize) {
        if self.status.is_over() || idx >= CELL_COUNT || self.cells[idx].revealed {
            return;
        }
        self.cells[idx].flagged = !self.cells[idx].flagged;
    }

    pub(crate) fn flag_count(&self) -> usize {
        self.cells.iter().filter(|c| c.flagged).count()
    }

    /// Mines not yet accounted for by flags; negative when over-flagged.
    pub(crate) fn mines_left(&self) -> i32 {
        MINES as i32 - self.flag_count() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_count(board: &Board) -> usize {
        board.cells.iter().filter(|c| c.mine).count()
    }

    #[test]
    fn xorshift_is_deterministic_and_survives_zero_seed() {
        let mut a = XorShift64::new(42);
        let mut b = XorShift64::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        assert_ne!(XorShift64::new(0).next_u64(), 0);
    }

    #[test]
    fn neighbors_respect_edges() {
        assert_eq!(neighbors(0).count(), 3);
        assert_eq!(neighbors(COLS - 1).count(), 3);
        assert_eq!(neighbors(COLS + 1).count(), 8);
        assert_eq!(neighbors(COLS).count(), 5);
    }

    #[test]
    fn first_reveal_is_always_safe() {
        for seed in 1..200 {
            for idx in [0, 40, CELL_COUNT - 1] {
                let mut board = Board::new(seed);
                board.reveal(idx);
                assert_ne!(board.status, Status::Lost, "seed {seed} idx {idx}");
                assert_eq!(mine_count(&board), MINES);
                assert!(board.cells[idx].revealed);
            }
        }
    }

    #[test]
    fn counts_match_adjacent_mines() {
        let mut board = Board::new(7);
        board.reveal(40);
        for idx in 0..CELL_COUNT {
            let expected = neighbors(idx).filter(|&n| board.cells[n].mine).count();
            assert_eq!(board.cells[idx].count as usize, expected);
        }
    }

    #[test]
    fn zero_cells_flood_until_numbered_border() {
        let mut board = Board::new(11);
        board.reveal(40);
        for idx in 0..CELL_COUNT {
            let cell = board.cells[idx];
            if cell.revealed && cell.count == 0 {
                assert!(neighbors(idx).all(|n| board.cells[n].revealed));
            }
            assert!(!(cell.revealed && cell.mine));
        }
    }

    #[test]
    fn revealing_a_mine_loses_and_exposes_every_mine() {
        let mut board = Board::new(3);
        board.reveal(0);
        let mine = board
            .cells
            .iter()
            .position(|c| c.mine)
            .expect("mines laid");
        board.reveal(mine);
        assert_eq!(board.status, Status::Lost);
        assert!(board.cells.iter().filter(|c| c.mine).all(|c| c.revealed));

        let before = board.clone();
        board.reveal(mine);
        board.toggle_flag(1);
        assert_eq!(board, before);
    }

    #[test]
    fn revealing_every_safe_cell_wins() {
        let mut board = Board::new(5);
        board.reveal(0);
        for idx in 0..CELL_COUNT {
            if !board.cells[idx].mine {
                board.reveal(idx);
            }
        }
        assert_eq!(board.status, Status::Won);
        assert_eq!(board.status.face(), "😎");
    }

    #[test]
    fn flags_block_reveal_and_track_mines_left() {
        let mut board = Board::new(9);
        board.toggle_flag(10);
        assert_eq!(board.mines_left(), MINES as i32 - 1);
        board.reveal(10);
        assert!(!board.cells[10].revealed);
        assert_eq!(board.status, Status::Fresh);

        board.toggle_flag(10);
        assert_eq!(board.flag_count(), 0);
        board.reveal(10);
        assert!(board.cells[10].revealed);
        board.toggle_flag(10);
        assert!(!board.cells[10].flagged);
    }
}
