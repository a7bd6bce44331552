//! Particle network backdrop.
//!
//! A loose cloud of drifting dots, pairwise linked when close. The field is
//! pure state stepped once per animation frame; drawing goes through
//! [`Surface`] so the link/alpha rules are testable without a canvas.

use crate::rng::Lcg;
use crate::surface::Surface;

/// One particle per this many square pixels of window area.
const AREA_PER_PARTICLE: f64 = 15_000.0;
/// Particles closer than this are linked.
pub const LINK_DISTANCE: f64 = 150.0;
const LINE_WIDTH: f64 = 0.5;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    color: (u8, u8, u8),
    rng: Lcg,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, seed: u32) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            color: (255, 0, 0),
            rng: Lcg::new(seed),
        };
        field.populate();
        field
    }

    /// Repopulates for a new viewport size (window resize).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    pub fn set_color(&mut self, rgb: (u8, u8, u8)) {
        self.color = rgb;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    fn populate(&mut self) {
        let count = (self.width * self.height / AREA_PER_PARTICLE).floor() as usize;
        self.particles = (0..count)
            .map(|_| Particle {
                x: self.rng.next_f64() * self.width,
                y: self.rng.next_f64() * self.height,
                size: self.rng.next_f64() * 2.0 + 1.0,
                vx: (self.rng.next_f64() - 0.5) * 0.5,
                vy: (self.rng.next_f64() - 0.5) * 0.5,
            })
            .collect();
    }

    /// Integrates one frame: drift, reflecting velocity at the edges.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
            }
        }
    }

    /// Draws the field: each particle as a translucent dot, then its links
    /// to every later particle within [`LINK_DISTANCE`].
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear(self.width, self.height);
        let (r, g, b) = self.color;
        let dot = format!("rgba({r}, {g}, {b}, 0.5)");
        for (i, p) in self.particles.iter().enumerate() {
            surface.fill_circle(p.x, p.y, p.size, &dot, 0.0);
            for q in &self.particles[i + 1..] {
                let dist = ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt();
                if dist < LINK_DISTANCE {
                    let alpha = link_alpha(dist);
                    let link = format!("rgba({r}, {g}, {b}, {alpha:.4})");
                    surface.stroke_line(p.x, p.y, q.x, q.y, &link, LINE_WIDTH);
                }
            }
        }
    }
}

/// Link opacity falls off linearly with distance, peaking at 0.1.
pub fn link_alpha(dist: f64) -> f64 {
    (1.0 - dist / LINK_DISTANCE) * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_tracks_area() {
        let field = ParticleField::new(300.0, 200.0, 1);
        assert_eq!(field.particles().len(), 4); // 60000 / 15000

        let field = ParticleField::new(100.0, 100.0, 1);
        assert_eq!(field.particles().len(), 0);
    }

    #[test]
    fn particles_spawn_inside_viewport() {
        let field = ParticleField::new(640.0, 480.0, 3);
        for p in field.particles() {
            assert!((0.0..=640.0).contains(&p.x));
            assert!((0.0..=480.0).contains(&p.y));
            assert!((1.0..3.0).contains(&p.size));
            assert!(p.vx.abs() <= 0.25);
            assert!(p.vy.abs() <= 0.25);
        }
    }

    #[test]
    fn edges_reflect_velocity() {
        let mut field = ParticleField::new(300.0, 200.0, 5);
        // Long enough for every particle to have met an edge many times over.
        for _ in 0..100_000 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.x > -1.0 && p.x < 301.0, "x escaped: {}", p.x);
            assert!(p.y > -1.0 && p.y < 201.0, "y escaped: {}", p.y);
        }
    }

    #[test]
    fn link_alpha_falls_off() {
        assert!((link_alpha(0.0) - 0.1).abs() < 1e-9);
        assert!((link_alpha(75.0) - 0.05).abs() < 1e-9);
        assert!(link_alpha(150.0).abs() < 1e-9);
    }
}
