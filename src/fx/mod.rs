//! Decorative page animations: particle backdrop, typewriter headline and
//! the pointer-trailing dragon chain.
//!
//! Each effect keeps its simulation in a pure submodule and only does DOM
//! and scheduling work here. All three decline silently when the host page
//! lacks their mount point.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlElement, MouseEvent, window};

pub mod chain;
pub mod particles;
pub mod typing;

use crate::surface::CanvasSurface;
use crate::theme;

use chain::{SEGMENT_COUNT, SEGMENT_GAP, SegmentChain};
use particles::ParticleField;
use typing::TypingEffect;

thread_local! {
    static BACKDROP: RefCell<Option<Backdrop>> = RefCell::new(None);
    static TYPING: RefCell<Option<Typing>> = RefCell::new(None);
    static CHAIN: RefCell<Option<Chain>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type TimeoutCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop.
fn start_raf_loop(mut tick: impl FnMut() + 'static) {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        tick();
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn window_size() -> (f64, f64) {
    let Some(w) = window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

// --- Particle backdrop -------------------------------------------------------

struct Backdrop {
    field: ParticleField,
    surface: CanvasSurface,
    canvas: HtmlCanvasElement,
}

/// Full-window particle network behind the page content. Skipped when
/// `#particle-canvas` is absent.
#[wasm_bindgen]
pub fn start_backdrop() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(canvas) = doc.get_element_by_id("particle-canvas") else {
        return Ok(());
    };
    let canvas: HtmlCanvasElement = canvas.dyn_into()?;

    let (width, height) = window_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    BACKDROP.with(|cell| {
        cell.replace(Some(Backdrop {
            field: ParticleField::new(width, height, crate::performance_now() as u32),
            surface: CanvasSurface::new(ctx),
            canvas,
        }))
    });

    let resize = Closure::wrap(Box::new(move || {
        let (width, height) = window_size();
        BACKDROP.with(|cell| {
            if let Some(backdrop) = cell.borrow_mut().as_mut() {
                backdrop.canvas.set_width(width as u32);
                backdrop.canvas.set_height(height as u32);
                backdrop.field.resize(width, height);
            }
        });
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    start_raf_loop(|| {
        let accent = theme::accent_rgb(&theme::detect().accent).unwrap_or((255, 0, 0));
        BACKDROP.with(|cell| {
            if let Some(backdrop) = cell.borrow_mut().as_mut() {
                backdrop.field.set_color(accent);
                backdrop.field.step();
                backdrop.field.render(&mut backdrop.surface);
            }
        });
    });
    Ok(())
}

// --- Typing headline ---------------------------------------------------------

struct Typing {
    fx: TypingEffect,
    el: Element,
}

/// Typewriter loop over the skill phrases. Skipped when `#typing-skill` is
/// absent.
#[wasm_bindgen]
pub fn start_typing_effect() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(el) = doc.get_element_by_id("typing-skill") else {
        return Ok(());
    };

    TYPING.with(|cell| {
        cell.replace(Some(Typing {
            fx: TypingEffect::new(crate::TYPING_PHRASES),
            el,
        }))
    });

    // Timeout chain: every tick schedules the next one with the delay the
    // effect asks for.
    let f: TimeoutCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut delay_ms = 0;
        TYPING.with(|cell| {
            if let Some(typing) = cell.borrow_mut().as_mut() {
                let step = typing.fx.tick();
                typing.el.set_text_content(Some(&step.text));
                delay_ms = step.delay_ms as i32;
            }
        });
        if delay_ms > 0 {
            if let Some(w) = window() {
                let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    delay_ms,
                );
            }
        }
    }) as Box<dyn FnMut()>));
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        0,
    )?;
    Ok(())
}

// --- Dragon chain ------------------------------------------------------------

struct Chain {
    chain: SegmentChain,
    target: (f64, f64),
    elements: Vec<HtmlElement>,
}

/// Segment chain trailing the pointer. Skipped when `#css-dragon` is absent.
#[wasm_bindgen]
pub fn start_dragon_chain() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let Some(container) = doc.get_element_by_id("css-dragon") else {
        return Ok(());
    };

    let (width, height) = window_size();
    let origin = (width / 2.0, height / 2.0);

    let mut elements = Vec::with_capacity(SEGMENT_COUNT);
    for i in 0..SEGMENT_COUNT {
        let seg: HtmlElement = doc.create_element("div")?.dyn_into()?;
        seg.set_class_name(if i == 0 {
            "dragon-segment dragon-head-segment"
        } else {
            "dragon-segment"
        });
        container.append_child(&seg)?;
        elements.push(seg);
    }

    CHAIN.with(|cell| {
        cell.replace(Some(Chain {
            chain: SegmentChain::new(SEGMENT_COUNT, SEGMENT_GAP, origin),
            target: origin,
            elements,
        }))
    });

    let mousemove = Closure::wrap(Box::new(move |evt: MouseEvent| {
        CHAIN.with(|cell| {
            if let Some(chain) = cell.borrow_mut().as_mut() {
                chain.target = (f64::from(evt.client_x()), f64::from(evt.client_y()));
            }
        });
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
    mousemove.forget();

    start_raf_loop(|| {
        CHAIN.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                let target = state.target;
                state.chain.follow(target);
                let angles = state.chain.angles();
                for (i, el) in state.elements.iter().enumerate() {
                    let (x, y) = state.chain.segments()[i];
                    let style = format!(
                        "left:{x}px; top:{y}px; transform:translate(-50%, -50%) rotate({a}rad) scale({s});",
                        a = angles[i],
                        s = SegmentChain::scale(i),
                    );
                    let _ = el.set_attribute("style", &style);
                }
            }
        });
    });
    Ok(())
}
