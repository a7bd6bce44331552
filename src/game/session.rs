//! Run lifecycle: Idle -> Running -> GameOver -> Running.
//!
//! The session is the timer-free half of the driver. It owns the game state
//! and the phase, and is advanced by whoever owns the actual clock, so the
//! whole lifecycle is testable by calling [`Session::tick`] in a loop.

use super::grid::Grid;
use super::snake::Heading;
use super::state::{GameState, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No run yet; the host overlay invites the first start.
    Idle,
    /// Ticks advance the simulation.
    Running,
    /// The last run ended; a retry returns to Running.
    GameOver,
}

/// Result of one driver tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened; the session is not running.
    Idle,
    Stepped { ate: bool },
    /// The run just ended. The timer must be cancelled and the score
    /// compared against the persisted best.
    Ended { final_score: u32 },
}

#[derive(Clone, Debug)]
pub struct Session {
    game: GameState,
    phase: Phase,
}

impl Session {
    pub fn new(grid: Grid, seed: u32) -> Self {
        Self {
            game: GameState::new(grid, seed),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Start or retry. Valid from every phase; starting over an active run
    /// just resets it (the caller swaps the timer, so no duplicate clocks).
    pub fn start(&mut self) {
        self.game.reset();
        self.phase = Phase::Running;
    }

    /// Heading request from the input adapter. Applied whenever it arrives;
    /// `start` re-fixes the initial heading anyway.
    pub fn steer(&mut self, heading: Heading) {
        self.game.steer(heading);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }
        match self.game.step() {
            StepOutcome::Moved { ate } => TickOutcome::Stepped { ate },
            StepOutcome::Ended => {
                self.phase = Phase::GameOver;
                TickOutcome::Ended {
                    final_score: self.game.score,
                }
            }
        }
    }
}
