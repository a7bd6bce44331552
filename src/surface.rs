//! Drawing-surface abstraction.
//!
//! The renderers are pure functions over this trait, so game and backdrop
//! frames can be asserted against a recording implementation in tests while
//! the browser build draws on a 2D canvas context.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Minimal set of draw calls the page needs. Colors are CSS color strings,
/// coordinates are canvas pixels.
pub trait Surface {
    /// Resets the surface to full transparency.
    fn clear(&mut self, width: f64, height: f64);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64);

    /// Rounded square with an optional glow (canvas shadow blur radius;
    /// 0.0 disables the glow).
    fn fill_round_rect(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        radius: f64,
        color: &str,
        glow: f64,
    );

    /// Filled circle with an optional glow.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str, glow: f64);
}

/// Canvas-backed surface used in the browser.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn round_rect_path(&self, x: f64, y: f64, size: f64, radius: f64) -> Result<(), JsValue> {
        let r = radius.min(size / 2.0);
        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        self.ctx.arc_to(x + size, y, x + size, y + size, r)?;
        self.ctx.arc_to(x + size, y + size, x, y + size, r)?;
        self.ctx.arc_to(x, y + size, x, y, r)?;
        self.ctx.arc_to(x, y, x + size, y, r)?;
        self.ctx.close_path();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, width, height);
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(x1, y1);
        self.ctx.line_to(x2, y2);
        self.ctx.stroke();
    }

    fn fill_round_rect(
        &mut self,
        x: f64,
        y: f64,
        size: f64,
        radius: f64,
        color: &str,
        glow: f64,
    ) {
        self.ctx.set_fill_style_str(color);
        if glow > 0.0 {
            self.ctx.set_shadow_blur(glow);
            self.ctx.set_shadow_color(color);
        }
        if self.round_rect_path(x, y, size, radius).is_ok() {
            self.ctx.fill();
        }
        self.ctx.set_shadow_blur(0.0);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str, glow: f64) {
        self.ctx.set_fill_style_str(color);
        if glow > 0.0 {
            self.ctx.set_shadow_blur(glow);
            self.ctx.set_shadow_color(color);
        }
        self.ctx.begin_path();
        let _ = self.ctx.arc(cx, cy, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
        self.ctx.set_shadow_blur(0.0);
    }
}
