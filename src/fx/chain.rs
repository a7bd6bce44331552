//! Pointer-trailing segment chain.
//!
//! The head eases toward the pointer; every follower is pulled to a fixed
//! gap behind its predecessor. Positions are window pixels; the DOM glue
//! only applies them to absolutely-positioned elements.

pub const SEGMENT_COUNT: usize = 18;
pub const SEGMENT_GAP: f64 = 20.0;
const HEAD_EASE: f64 = 0.1;

#[derive(Clone, Debug)]
pub struct SegmentChain {
    segments: Vec<(f64, f64)>,
    gap: f64,
}

impl SegmentChain {
    pub fn new(count: usize, gap: f64, origin: (f64, f64)) -> Self {
        Self {
            segments: vec![origin; count.max(1)],
            gap,
        }
    }

    pub fn segments(&self) -> &[(f64, f64)] {
        &self.segments
    }

    /// Advances one frame toward `target` (the pointer position).
    pub fn follow(&mut self, target: (f64, f64)) {
        let head = &mut self.segments[0];
        head.0 += (target.0 - head.0) * HEAD_EASE;
        head.1 += (target.1 - head.1) * HEAD_EASE;

        for i in 1..self.segments.len() {
            let (px, py) = self.segments[i - 1];
            let (cx, cy) = self.segments[i];
            let dx = px - cx;
            let dy = py - cy;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance > self.gap {
                let angle = dy.atan2(dx);
                self.segments[i] = (px - angle.cos() * self.gap, py - angle.sin() * self.gap);
            }
        }
    }

    /// Facing angle per segment: along the chain toward the next segment,
    /// with the tail reusing its predecessor's direction.
    pub fn angles(&self) -> Vec<f64> {
        let n = self.segments.len();
        (0..n)
            .map(|i| {
                let (sx, sy) = self.segments[i];
                if i + 1 < n {
                    let (nx, ny) = self.segments[i + 1];
                    (sy - ny).atan2(sx - nx)
                } else {
                    let (px, py) = self.segments[i - 1];
                    (py - sy).atan2(px - sx)
                }
            })
            .collect()
    }

    /// Scale factor for segment `i`, shrinking down the tail.
    pub fn scale(i: usize) -> f64 {
        1.2 - i as f64 * 0.04
    }
}
