//! Snake mini-game wiring.
//!
//! The simulation itself lives in the submodules and knows nothing about the
//! browser; this module owns the canvas, the HUD elements, the keyboard
//! listener and the fixed-period tick timer, and feeds them into the
//! [`Session`] state machine.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, KeyboardEvent,
    Window, window,
};

pub mod grid;
pub mod input;
pub mod render;
pub mod session;
pub mod snake;
pub mod state;

pub use grid::{Cell, GRID_SIZE, Grid};
pub use session::{Phase, Session, TickOutcome};
pub use snake::{Heading, Snake};
pub use state::{FOOD_SCORE, GameState, StepOutcome};

use crate::score::{self, HighScore};
use crate::surface::CanvasSurface;
use crate::theme;

/// Simulation period. One tick every 100ms, regardless of display refresh.
const TICK_MS: i32 = 100;

const CANVAS_ID: &str = "snake-game-canvas";

thread_local! {
    static GAME: RefCell<Option<GameApp>> = RefCell::new(None);
}

/// Cancellable wrapper around `setInterval`. Dropping the handle clears the
/// timer; `cancel` clears it while keeping the closure allocation alive,
/// which matters when the timer is torn down from inside its own callback.
struct Interval {
    window: Window,
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    fn start(
        window: Window,
        period_ms: i32,
        closure: Closure<dyn FnMut()>,
    ) -> Result<Self, JsValue> {
        let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            window,
            id: Some(id),
            _closure: closure,
        })
    }

    fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Score labels, overlay and start button. Every element is optional so a
/// stripped-down host page still gets a playable board.
struct Hud {
    overlay: Option<HtmlElement>,
    message: Option<Element>,
    score: Option<Element>,
    best: Option<Element>,
    best_date: Option<Element>,
    start_button: Option<Element>,
}

impl Hud {
    fn locate(doc: &Document) -> Self {
        let overlay = doc
            .get_element_by_id("game-overlay")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let message = overlay
            .as_ref()
            .and_then(|el| el.query_selector("h3").ok().flatten());
        Self {
            overlay,
            message,
            score: doc.get_element_by_id("current-score"),
            best: doc.get_element_by_id("all-time-high"),
            best_date: doc.get_element_by_id("high-score-date"),
            start_button: doc.get_element_by_id("start-game-btn"),
        }
    }

    fn set_score(&self, value: u32) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&value.to_string()));
        }
    }

    fn show_best(&self, record: &HighScore) {
        if let Some(el) = &self.best {
            el.set_text_content(Some(&record.score.to_string()));
        }
        if let Some(el) = &self.best_date {
            el.set_text_content(Some(&format!("Achieved on: {}", record.date)));
        }
    }

    fn hide_overlay(&self) {
        if let Some(overlay) = &self.overlay {
            let style = overlay.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("pointer-events", "none");
        }
    }

    fn show_game_over(&self) {
        if let Some(overlay) = &self.overlay {
            let style = overlay.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("pointer-events", "auto");
        }
        if let Some(el) = &self.message {
            el.set_text_content(Some("MISSION FAILED"));
        }
        if let Some(el) = &self.start_button {
            el.set_text_content(Some("RETRY MISSION"));
        }
    }
}

struct GameApp {
    session: Session,
    surface: CanvasSurface,
    hud: Hud,
    timer: Option<Interval>,
    /// Timer cancelled from within its own callback; its closure must stay
    /// allocated until the callback has returned, so it is parked here and
    /// freed on the next start.
    _retired: Option<Interval>,
}

/// Sets up the snake game if the host page carries the board markup.
/// A page without `#snake-game-canvas` skips initialization silently.
#[wasm_bindgen]
pub fn start_snake_game() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let Some(canvas) = doc.get_element_by_id(CANVAS_ID) else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let hud = Hud::locate(&doc);
    hud.show_best(&score::load());

    let grid = Grid::from_canvas(canvas.width());
    let app = GameApp {
        session: Session::new(grid, seed()),
        surface: CanvasSurface::new(ctx),
        hud,
        timer: None,
        _retired: None,
    };

    let keydown = Closure::wrap(Box::new(move |evt: KeyboardEvent| {
        if let Some(heading) = input::heading_for_key(&evt.key()) {
            GAME.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    app.session.steer(heading);
                }
            });
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    if let Some(button) = app.hud.start_button.clone() {
        let click = Closure::wrap(Box::new(move || {
            GAME.with(|cell| {
                if let Some(app) = cell.borrow_mut().as_mut() {
                    begin_run(app);
                }
            });
        }) as Box<dyn FnMut()>);
        button.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    GAME.with(|cell| cell.replace(Some(app)));
    Ok(())
}

/// Start or retry: reset the session, clear the HUD and swap in a fresh
/// interval. Replacing the old handle cancels it, so a double start never
/// leaves two timers running.
fn begin_run(app: &mut GameApp) {
    app.session.start();
    app.hud.set_score(0);
    app.hud.hide_overlay();

    app._retired = None;
    let Some(win) = window() else { return };
    let closure = Closure::wrap(Box::new(move || {
        GAME.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                drive_tick(app);
            }
        });
    }) as Box<dyn FnMut()>);
    app.timer = Interval::start(win, TICK_MS, closure).ok();
}

fn drive_tick(app: &mut GameApp) {
    match app.session.tick() {
        TickOutcome::Idle => {}
        TickOutcome::Stepped { ate } => {
            if ate {
                app.hud.set_score(app.session.game().score);
            }
            let theme = theme::detect();
            render::draw_frame(app.session.game(), &theme, &mut app.surface);
        }
        TickOutcome::Ended { final_score } => {
            // The terminal frame is not drawn; the board freezes as it was.
            if let Some(mut timer) = app.timer.take() {
                timer.cancel();
                app._retired = Some(timer);
            }
            let stored = score::load();
            if stored.beaten_by(final_score) {
                let record = HighScore {
                    score: final_score,
                    date: score::now_label(),
                };
                score::store(&record);
                app.hud.show_best(&record);
            }
            app.hud.show_game_over();
        }
    }
}

fn seed() -> u32 {
    #[cfg(feature = "rng")]
    {
        let mut buf = [0u8; 4];
        if getrandom::getrandom(&mut buf).is_ok() {
            return u32::from_le_bytes(buf);
        }
    }
    crate::performance_now() as u32
}
