//! Snake on a fixed, wall-bounded grid.

use std::collections::VecDeque;

pub(crate) const GRID: i32 = 20;
pub(crate) const FOOD_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Point {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Point {
    fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    fn in_bounds(self) -> bool {
        (0..GRID).contains(&self.x) && (0..GRID).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Arrow keys and WASD.
pub(crate) fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Waiting for the first steering key.
    Ready,
    Running,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickResult {
    Idle,
    Moved,
    Ate,
    Died,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SnakeGame {
    /// Head first.
    pub(crate) body: VecDeque<Point>,
    /// Direction of the last completed step.
    heading: Direction,
    /// Direction the next step will take.
    queued: Direction,
    pub(crate) food: Point,
    pub(crate) phase: Phase,
    pub(crate) score: u32,
    /// Best score this session; survives resets.
    pub(crate) best: u32,
    rng: u64,
}

const START: Point = Point { x: 10, y: 10 };
const START_FOOD: Point = Point { x: 15, y: 10 };

impl SnakeGame {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            body: VecDeque::from([START]),
            heading: Direction::Right,
            queued: Direction::Right,
            food: START_FOOD,
            phase: Phase::Ready,
            score: 0,
            best: 0,
            rng: if seed == 0 { 0x2545_F491_4F6C_DD1D } else { seed },
        }
    }

    pub(crate) fn head(&self) -> Point {
        self.body.front().copied().unwrap_or(START)
    }

    /// Queues a turn; reversing onto the neck is ignored. Steering a fresh game starts it.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        if self.phase == Phase::Dead || direction == self.heading.opposite() {
            return false;
        }
        self.queued = direction;
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
        true
    }

    pub(crate) fn tick(&mut self) -> TickResult {
        if self.phase != Phase::Running {
            return TickResult::Idle;
        }
        let next = self.head().step(self.queued);
        let eating = next == self.food;
        // The tail moves out of the way unless the snake is growing this step.
        let body_len = if eating {
            self.body.len()
        } else {
            self.body.len().saturating_sub(1)
        };
        let hits_self = self.body.iter().take(body_len).any(|&p| p == next);
        if !next.in_bounds() || hits_self {
            self.phase = Phase::Dead;
            return TickResult::Died;
        }

        self.heading = self.queued;
        self.body.push_front(next);
        if !eating {
            self.body.pop_back();
            return TickResult::Moved;
        }

        self.score += FOOD_POINTS;
        self.best = self.best.max(self.score);
        match self.free_cell() {
            Some(food) => self.food = food,
            None => self.phase = Phase::Dead,
        }
        TickResult::Ate
    }

    fn next_random(&mut self) -> u64 {
        let mut x = self.rng;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.rng = x;
        x
    }

    fn free_cell(&mut self) -> Option<Point> {
        let free: Vec<Point> = (0..GRID * GRID)
            .map(|i| Point {
                x: i % GRID,
                y: i / GRID,
            })
            .filter(|p| !self.body.contains(p))
            .collect();
        if free.is_empty() {
            return None;
        }
        let pick = (self.next_random() % free.len() as u64) as usize;
        Some(free[pick])
    }

    /// New round; the session best is kept.
    pub(crate) fn reset(&mut self) {
        let best = self.best;
        let rng = self.rng;
        *self = Self::new(rng);
        self.best = best;
    }

    pub(crate) fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }
}
