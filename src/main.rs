use macroquad::miniquad;
use macroquad::prelude::*;

mod input;
mod overlay;
mod pixels;
mod simulation;

use input::Action;
use pixels::PixelBuffer;
use simulation::{Simulation, DEFAULT_ATTRACTORS, DEFAULT_SCALE, DEFAULT_WEIGHT};

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 800;
const TARGET_FPS: f32 = 50.0;
const STATS_INTERVAL: u64 = 300;

fn window_conf() -> Conf {
    Conf {
        window_title: "Simple IFS in 2D".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    rand::srand(miniquad::date::now() as u64);

    let w = WINDOW_WIDTH as usize;
    let h = WINDOW_HEIGHT as usize;

    let mut sim = Simulation::new(DEFAULT_ATTRACTORS, DEFAULT_WEIGHT, DEFAULT_SCALE);
    let mut frame = PixelBuffer::new(w, h);
    sim.reset(&mut frame);

    let mut image = Image::gen_image_color(w as u16, h as u16, BLACK);
    let texture = Texture2D::from_image(&image);

    let mut frame_count: u64 = 0;

    'mainloop: loop {
        for action in input::pending_actions() {
            if action == Action::Quit {
                break 'mainloop;
            }
            input::apply(action, &mut sim, &mut frame);
        }

        sim.advance(&mut frame);

        if sim.show_info {
            overlay::clear_info_panel(&mut frame);
        }

        image.get_image_data_mut().copy_from_slice(frame.pixels());
        texture.update(&image);
        draw_texture(&texture, 0.0, 0.0, WHITE);

        if sim.show_info {
            overlay::draw_info(&sim, w, h);
        }
        if sim.show_help {
            overlay::draw_help();
        }

        frame_count += 1;
        if frame_count % STATS_INTERVAL == 0 {
            let (lit, maxed) = frame.stats();
            println!(
                "frame {}: {} pixels lit ({:.1}%), {} maxed, {} fps",
                frame_count,
                lit,
                lit as f64 * 100.0 / (w * h) as f64,
                maxed,
                get_fps()
            );
        }

        // Lock the frame rate at 50 FPS.
        let frame_budget = 1.0 / TARGET_FPS;
        let frame_time = get_frame_time();
        if frame_time < frame_budget {
            let to_sleep = (frame_budget - frame_time) * 1000.0;
            std::thread::sleep(std::time::Duration::from_millis(to_sleep as u64));
        }

        next_frame().await
    }
}
