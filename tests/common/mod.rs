//! Shared test double: a surface that records draw calls instead of
//! painting, so frame composition can be asserted without a canvas.

use dragonfolio::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear {
        width: f64,
        height: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    RoundRect {
        x: f64,
        y: f64,
        size: f64,
        radius: f64,
        color: String,
        glow: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: String,
        glow: f64,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(Op::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.ops.push(Op::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.ops.push(Op::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            width,
        });
    }

    fn fill_round_rect(&mut self, x: f64, y: f64, size: f64, radius: f64, color: &str, glow: f64) {
        self.ops.push(Op::RoundRect {
            x,
            y,
            size,
            radius,
            color: color.to_string(),
            glow,
        });
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: &str, glow: f64) {
        self.ops.push(Op::Circle {
            cx,
            cy,
            radius,
            color: color.to_string(),
            glow,
        });
    }
}
