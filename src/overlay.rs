//! On-screen overlays: the parameter info panel and the key-binding help.
//!
//! The info panel clears a fixed rect in the persistent buffer (so it eats
//! accumulated pixels underneath) and draws yellow lines on top. Help text
//! is transient and redrawn every frame.

use macroquad::prelude::{draw_text, WHITE, YELLOW};

use crate::pixels::{PixelBuffer, BLACK};
use crate::simulation::Simulation;

const PANEL_X: i64 = 16;
const PANEL_Y: i64 = 16;
const PANEL_W: i64 = 320;
const PANEL_H: i64 = 256;
const LINE_HEIGHT: f32 = 16.0;
const FONT_SIZE: f32 = 16.0;

/// The info panel's text, one string per line.
pub fn info_lines(sim: &Simulation, width: usize, height: usize) -> Vec<String> {
    let mut lines = vec![
        format!("Number of Attractors : {}", sim.num_attractors()),
        format!("Weight : {}", sim.weight()),
        format!("Colour increase per point : {}", sim.colour_step()),
        format!("Points drawn per frame : {}", sim.points_per_frame()),
        format!("Scale multiplier : {}", sim.scale()),
    ];
    if sim.info_screen_space {
        let (sx, sy) = sim.to_screen(width, height);
        lines.push(format!("Current point : ({}, {}) px", sx, sy));
    } else {
        let (x, y) = sim.position();
        lines.push(format!("Current point : ({:.3}, {:.3})", x, y));
    }
    lines
}

/// Black out the panel region of the persistent buffer. The only lasting
/// side effect of the info overlay.
pub fn clear_info_panel(frame: &mut PixelBuffer) {
    frame.fill_rect(PANEL_X, PANEL_Y, PANEL_W, PANEL_H, BLACK);
}

pub fn draw_info(sim: &Simulation, width: usize, height: usize) {
    for (i, line) in info_lines(sim, width, height).iter().enumerate() {
        let y = PANEL_Y as f32 + LINE_HEIGHT * (i + 1) as f32;
        draw_text(line, PANEL_X as f32, y, FONT_SIZE, YELLOW);
    }
}

pub fn draw_help() {
    let lines = [
        "Simple IFS Controls:",
        "r      - Reset attractors and screen",
        "c      - Clear screen only",
        "z / x  - Remove / add an attractor",
        "= / -  - Double / halve scale",
        ", / .  - Decrease / increase weight",
        "[ / ]  - Halve / double colour step",
        "a      - Toggle attractor markers",
        "Tab    - Toggle info panel",
        "i      - Info panel in screen space",
        "/      - Toggle this help",
        "Escape - Quit",
    ];
    let x = 10.0;
    let size = 20.0;
    let line_height = 20.0;
    for (i, line) in lines.iter().enumerate() {
        let y = 10.0 + line_height * (i + 1) as f32;
        draw_text(line, x, y, size, WHITE);
    }
}
