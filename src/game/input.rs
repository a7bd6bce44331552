//! Keyboard mapping for the snake game.
//!
//! Only the four arrow keys matter; everything else is ignored. Reversal
//! rejection lives in [`GameState::steer`](super::state::GameState::steer),
//! the single place headings change.

use super::snake::Heading;

/// Maps a `KeyboardEvent.key` value to a heading request.
pub fn heading_for_key(key: &str) -> Option<Heading> {
    match key {
        "ArrowUp" => Some(Heading::Up),
        "ArrowDown" => Some(Heading::Down),
        "ArrowLeft" => Some(Heading::Left),
        "ArrowRight" => Some(Heading::Right),
        _ => None,
    }
}
