//! Game state and the per-tick step function.

use crate::rng::Lcg;

use super::grid::{Cell, Grid};
use super::snake::{Heading, Snake};

/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 10;

/// Result of one simulation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved; `ate` is set when it consumed the food this tick.
    Moved { ate: bool },
    /// The candidate head landed on the body; the run is over. The board is
    /// left exactly as it was before the step.
    Ended,
}

/// All mutable state of one run, owned by the driver and passed explicitly
/// into step and render.
#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub heading: Heading,
    pub food: Cell,
    pub score: u32,
    rng: Lcg,
}

impl GameState {
    /// Fresh state for a grid: single-cell snake at the center, heading
    /// right, food three quarters of the way down the diagonal (the classic
    /// (15,15) on a 20-tile board).
    pub fn new(grid: Grid, seed: u32) -> Self {
        let t = grid.tile_count();
        Self {
            grid,
            snake: Snake::spawn(grid.center()),
            heading: Heading::Right,
            food: Cell::new(t * 3 / 4, t * 3 / 4),
            score: 0,
            rng: Lcg::new(seed),
        }
    }

    /// Starts a new run on the same board. Food and the generator carry over
    /// from the previous run; only snake, score and heading reset.
    pub fn reset(&mut self) {
        self.snake = Snake::spawn(self.grid.center());
        self.heading = Heading::Right;
        self.score = 0;
    }

    /// Requests a heading change. The exact opposite of the current heading
    /// is rejected; anything else takes effect immediately, so of several
    /// presses between ticks the last valid one wins.
    pub fn steer(&mut self, heading: Heading) {
        if !self.heading.opposes(heading) {
            self.heading = heading;
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// The candidate head is wrapped per axis, then checked against the
    /// pre-move body. The check runs before the tail is vacated, so stepping
    /// onto the current tail cell ends the run even though that cell would
    /// have been freed by a non-eating move.
    pub fn step(&mut self) -> StepOutcome {
        let (dx, dy) = self.heading.delta();
        let head = self.snake.head();
        let candidate = self.grid.wrap(Cell::new(head.x + dx, head.y + dy));

        if self.snake.contains(candidate) {
            return StepOutcome::Ended;
        }

        let ate = candidate == self.food;
        self.snake.advance(candidate, ate);
        if ate {
            self.score += FOOD_SCORE;
            self.place_food();
        }
        StepOutcome::Moved { ate }
    }

    /// Resamples the food uniformly over the grid, rejecting snake cells.
    /// Once the board is dense enough that rejection keeps missing, the free
    /// cells are enumerated and sampled directly, which also makes the
    /// one-free-cell endgame deterministic. A fully covered board leaves the
    /// food untouched.
    fn place_food(&mut self) {
        let tiles = self.grid.tile_count() as u32;
        for _ in 0..tiles.saturating_mul(tiles) {
            let cell = Cell::new(
                self.rng.next_below(tiles) as i32,
                self.rng.next_below(tiles) as i32,
            );
            if !self.snake.contains(cell) {
                self.food = cell;
                return;
            }
        }

        let free: Vec<Cell> = (0..self.grid.tile_count())
            .flat_map(|y| (0..self.grid.tile_count()).map(move |x| Cell::new(x, y)))
            .filter(|c| !self.snake.contains(*c))
            .collect();
        if let Some(cell) = free.get(self.rng.next_below(free.len() as u32) as usize) {
            self.food = *cell;
        }
    }

    /// Test-friendly constructor for a specific board layout.
    pub fn with_layout(
        grid: Grid,
        snake: Snake,
        heading: Heading,
        food: Cell,
        seed: u32,
    ) -> Self {
        Self {
            grid,
            snake,
            heading,
            food,
            score: 0,
            rng: Lcg::new(seed),
        }
    }
}
