//! Dragonfolio front-end crate.
//!
//! Canvas behavior for the portfolio page: the snake mini-game plus the
//! decorative animations (particle backdrop, typewriter headline, dragon
//! chain). Simulation logic is pure Rust and unit-tested natively; browser
//! coupling is confined to the wiring modules. The host page owns layout,
//! theme switching and everything network-related.

use wasm_bindgen::prelude::*;

pub mod fx;
pub mod game;
pub mod rng;
pub mod score;
pub mod surface;
pub mod theme;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Headline phrases for the typewriter effect.
pub const TYPING_PHRASES: &[&str] = &[
    "Python Developer",
    "Asset Manager",
    "Channel Specialist",
    "Community Manager",
    "Profile Optimizer",
];

/// Wires every page component. Each one checks for its own mount point and
/// silently skips when the markup is absent, so partial pages work.
#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    fx::start_backdrop()?;
    fx::start_typing_effect()?;
    fx::start_dragon_chain()?;
    game::start_snake_game()?;
    Ok(())
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
