//! Chaos-game simulation state.
//!
//! N attractors sit evenly on the unit circle; a single moving point is
//! repeatedly pulled toward a randomly chosen attractor by a weighted
//! average, and every landing pixel gains green intensity. With weight
//! below 1 and three or more attractors the long-run point cloud traces a
//! self-similar fractal (the Sierpinski triangle for N = 3).

use macroquad::rand;
use std::f64::consts::PI;

use crate::pixels::{PixelBuffer, BLACK, MARKER_BLUE};

pub const DEFAULT_ATTRACTORS: usize = 3;
pub const DEFAULT_WEIGHT: f64 = 0.5;
pub const DEFAULT_SCALE: f64 = 180.0;
pub const POINTS_PER_FRAME: u32 = 1024;

const MIN_ATTRACTORS: usize = 2;
const WEIGHT_STEP: f64 = 0.01;
const COLOUR_STEP_MIN: u16 = 1;
const COLOUR_STEP_MAX: u16 = 256;
const MARKER_SIZE: i64 = 32;

/// N points evenly spaced on the unit circle, starting at the top.
pub fn unit_circle(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * 2.0 * PI / n as f64;
            (angle.sin(), -angle.cos())
        })
        .collect()
}

pub struct Simulation {
    x: f64,
    y: f64,
    attractors: Vec<(f64, f64)>,
    num_attractors: usize,
    weight: f64,
    scale: f64,
    colour_step: u16,
    points_per_frame: u32,
    pub show_markers: bool,
    pub show_info: bool,
    pub show_help: bool,
    pub info_screen_space: bool,
}

impl Simulation {
    pub fn new(num_attractors: usize, weight: f64, scale: f64) -> Self {
        let num_attractors = num_attractors.max(MIN_ATTRACTORS);
        Self {
            x: 0.0,
            y: 0.0,
            attractors: unit_circle(num_attractors),
            num_attractors,
            weight,
            scale,
            colour_step: COLOUR_STEP_MAX,
            points_per_frame: POINTS_PER_FRAME,
            show_markers: true,
            show_info: false,
            show_help: false,
            info_screen_space: false,
        }
    }

    /// Clear the frame, regenerate the attractor set, and return the moving
    /// point to the origin. Markers are baked in here with the scale at
    /// reset time; later scale changes do not move them.
    pub fn reset(&mut self, frame: &mut PixelBuffer) {
        frame.fill(BLACK);
        self.x = 0.0;
        self.y = 0.0;
        self.attractors = unit_circle(self.num_attractors);
        if self.show_markers {
            self.draw_markers(frame);
        }
    }

    fn draw_markers(&self, frame: &mut PixelBuffer) {
        let half = MARKER_SIZE / 2;
        for &(ax, ay) in &self.attractors {
            let sx = (frame.width() as f64 / 2.0 + ax * self.scale * 2.0) as i64;
            let sy = (frame.height() as f64 / 2.0 + ay * self.scale * 2.0) as i64;
            frame.fill_rect(sx - half, sy - half, MARKER_SIZE, MARKER_SIZE, MARKER_BLUE);
        }
    }

    /// One frame's worth of chaos-game iterations.
    pub fn advance(&mut self, frame: &mut PixelBuffer) {
        for _ in 0..self.points_per_frame {
            let chosen = rand::gen_range(0, self.num_attractors);
            self.step(chosen);
            let (sx, sy) = self.to_screen(frame.width(), frame.height());
            frame.add_green(sx, sy, self.colour_step);
        }
    }

    /// Pull the moving point toward the chosen attractor.
    pub fn step(&mut self, chosen: usize) {
        let (ax, ay) = self.attractors[chosen];
        self.x = self.x * self.weight + ax;
        self.y = self.y * self.weight + ay;
    }

    /// Map the current position to a pixel, wrapping at the screen edges.
    /// Truncation toward zero, then Euclidean remainder, so the result is
    /// in-range for any finite position and scale.
    pub fn to_screen(&self, width: usize, height: usize) -> (usize, usize) {
        let sx = (width as f64 / 2.0 + self.x * self.scale) as i64;
        let sy = (height as f64 / 2.0 + self.y * self.scale) as i64;
        (
            sx.rem_euclid(width as i64) as usize,
            sy.rem_euclid(height as i64) as usize,
        )
    }

    // Parameter transitions. The clamps here are the only thing keeping
    // the count and colour-step invariants.

    pub fn remove_attractor(&mut self) {
        self.num_attractors = self.num_attractors.saturating_sub(1).max(MIN_ATTRACTORS);
    }

    pub fn add_attractor(&mut self, frame: &mut PixelBuffer) {
        self.num_attractors += 1;
        self.reset(frame);
    }

    pub fn double_scale(&mut self) {
        self.scale *= 2.0;
    }

    pub fn halve_scale(&mut self) {
        self.scale /= 2.0;
    }

    pub fn decrease_weight(&mut self) {
        self.weight -= WEIGHT_STEP;
    }

    pub fn increase_weight(&mut self) {
        self.weight += WEIGHT_STEP;
    }

    pub fn halve_colour_step(&mut self) {
        self.colour_step = (self.colour_step / 2).max(COLOUR_STEP_MIN);
    }

    pub fn double_colour_step(&mut self) {
        self.colour_step = (self.colour_step * 2).min(COLOUR_STEP_MAX);
    }

    #[inline]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn num_attractors(&self) -> usize {
        self.num_attractors
    }

    #[inline]
    pub fn attractors(&self) -> &[(f64, f64)] {
        &self.attractors
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn colour_step(&self) -> u16 {
        self.colour_step
    }

    #[inline]
    pub fn points_per_frame(&self) -> u32 {
        self.points_per_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_unit_circle_on_circle() {
        for n in 2..=12 {
            let points = unit_circle(n);
            assert_eq!(points.len(), n);
            for (x, y) in points {
                assert!(((x * x + y * y).sqrt() - 1.0).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_unit_circle_three_angles() {
        let points = unit_circle(3);
        for (i, &(x, y)) in points.iter().enumerate() {
            let angle = i as f64 * 2.0 * PI / 3.0;
            assert!((x - angle.sin()).abs() < EPS);
            assert!((y + angle.cos()).abs() < EPS);
        }
        // First attractor sits at the top of the circle.
        assert!((points[0].0).abs() < EPS);
        assert!((points[0].1 + 1.0).abs() < EPS);
    }

    #[test]
    fn test_attractor_count_floor() {
        let mut frame = PixelBuffer::new(16, 16);
        let mut sim = Simulation::new(3, 0.5, 180.0);
        for _ in 0..10 {
            sim.remove_attractor();
        }
        assert_eq!(sim.num_attractors(), 2);
        sim.add_attractor(&mut frame);
        sim.remove_attractor();
        assert_eq!(sim.num_attractors(), 2);
    }

    #[test]
    fn test_remove_attractor_keeps_old_set() {
        let mut sim = Simulation::new(3, 0.5, 180.0);
        sim.remove_attractor();
        // No reset: the set still holds three points, only two reachable.
        assert_eq!(sim.num_attractors(), 2);
        assert_eq!(sim.attractors().len(), 3);
    }

    #[test]
    fn test_colour_step_range() {
        let mut sim = Simulation::new(3, 0.5, 180.0);
        for _ in 0..20 {
            sim.halve_colour_step();
        }
        assert_eq!(sim.colour_step(), 1);
        for _ in 0..20 {
            sim.double_colour_step();
        }
        assert_eq!(sim.colour_step(), 256);
    }

    #[test]
    fn test_weight_steps_unclamped() {
        let mut sim = Simulation::new(3, 0.5, 180.0);
        for _ in 0..60 {
            sim.decrease_weight();
        }
        assert!(sim.weight() < 0.0);
        for _ in 0..200 {
            sim.increase_weight();
        }
        assert!(sim.weight() > 1.0);
    }

    #[test]
    fn test_first_step_from_origin() {
        // N=3, weight 0.5, scale 180: the weighted term vanishes at the
        // origin, so the first step lands exactly on attractor 0 = (0, -1).
        let mut sim = Simulation::new(3, 0.5, 180.0);
        sim.step(0);
        let (x, y) = sim.position();
        assert!(x.abs() < EPS);
        assert!((y + 1.0).abs() < EPS);

        let (sx, sy) = sim.to_screen(1280, 800);
        assert_eq!(sx, 1280 / 2);
        assert_eq!(sy, 800 / 2 - 180);
    }

    #[test]
    fn test_screen_wrap_in_bounds() {
        let mut sim = Simulation::new(3, 0.5, 180.0);
        let positions = [
            (0.0, 0.0),
            (-1.0, -1.0),
            (7.3, -9.8),
            (-1234.5, 987.6),
            (1e6, -1e6),
        ];
        for (x, y) in positions {
            sim.x = x;
            sim.y = y;
            let (sx, sy) = sim.to_screen(1280, 800);
            assert!(sx < 1280);
            assert!(sy < 800);
        }
        // Doubling the scale arbitrarily many times still wraps in-range.
        sim.x = 1.0;
        sim.y = 1.0;
        for _ in 0..10 {
            sim.double_scale();
            let (sx, sy) = sim.to_screen(1280, 800);
            assert!(sx < 1280 && sy < 800);
        }
    }

    #[test]
    fn test_reset_clears_frame_and_position() {
        let mut frame = PixelBuffer::new(64, 64);
        let mut sim = Simulation::new(3, 0.5, 8.0);
        sim.show_markers = false;
        sim.advance(&mut frame);
        let (lit, _) = frame.stats();
        assert!(lit > 0);

        sim.reset(&mut frame);
        assert_eq!(frame.stats(), (0, 0));
        assert_eq!(sim.position(), (0.0, 0.0));
        assert_eq!(sim.attractors().len(), sim.num_attractors());
    }

    #[test]
    fn test_reset_bakes_markers() {
        let mut frame = PixelBuffer::new(256, 256);
        let mut sim = Simulation::new(3, 0.5, 40.0);
        sim.show_markers = true;
        sim.reset(&mut frame);
        // Attractor 0 marker is centred at (w/2, h/2 - scale*2).
        assert_eq!(frame.get(128, 128 - 80), Some(MARKER_BLUE));
        sim.show_markers = false;
        sim.reset(&mut frame);
        assert_eq!(frame.get(128, 128 - 80), Some(BLACK));
    }

    #[test]
    fn test_advance_accumulates_green_only() {
        let mut frame = PixelBuffer::new(64, 64);
        let mut sim = Simulation::new(3, 0.5, 8.0);
        sim.show_markers = false;
        sim.reset(&mut frame);
        sim.advance(&mut frame);
        for px in frame.pixels() {
            assert_eq!(px[0], 0);
            assert_eq!(px[2], 0);
            assert_eq!(px[3], 255);
        }
    }
}
