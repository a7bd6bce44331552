//! Frame composition for the snake board.
//!
//! Pure over [`Surface`]: no state is retained between frames, and every
//! color decision is derived from the passed-in theme.

use crate::surface::Surface;
use crate::theme::Theme;

use super::grid::GRID_SIZE;
use super::state::GameState;

const BG_DARK: &str = "#0d0d0d";
const BG_LIGHT: &str = "#f0f4f8";
const GRID_LINE: &str = "rgba(255, 255, 255, 0.05)";
const FOOD_COLOR: &str = "#ffd700";

const SNAKE_GLOW: f64 = 10.0;
const FOOD_GLOW: f64 = 15.0;
const CORNER_RADIUS: f64 = 4.0;

/// Draws one frame: background, grid lines, snake head to tail, food.
pub fn draw_frame(state: &GameState, theme: &Theme, surface: &mut impl Surface) {
    let cell = f64::from(GRID_SIZE);
    let edge = state.grid.edge_px();

    let bg = if theme.light { BG_LIGHT } else { BG_DARK };
    surface.fill_rect(0.0, 0.0, edge, edge, bg);

    for i in 0..state.grid.tile_count() {
        let at = f64::from(i) * cell;
        surface.stroke_line(at, 0.0, at, edge, GRID_LINE, 1.0);
        surface.stroke_line(0.0, at, edge, at, GRID_LINE, 1.0);
    }

    for segment in state.snake.cells() {
        surface.fill_round_rect(
            f64::from(segment.x) * cell + 1.0,
            f64::from(segment.y) * cell + 1.0,
            cell - 2.0,
            CORNER_RADIUS,
            &theme.accent,
            SNAKE_GLOW,
        );
    }

    surface.fill_circle(
        f64::from(state.food.x) * cell + cell / 2.0,
        f64::from(state.food.y) * cell + cell / 2.0,
        cell / 2.0 - 2.0,
        FOOD_COLOR,
        FOOD_GLOW,
    );
}
