//! Keyboard dispatch.
//!
//! Raw key codes translate into a small `Action` vocabulary through one
//! table, so every transition can be exercised without a window. The main
//! loop drains the keys pressed this frame and applies each action once.

use macroquad::input::{get_keys_pressed, KeyCode};

use crate::pixels::{PixelBuffer, BLACK};
use crate::simulation::Simulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Reset,
    ClearScreen,
    RemoveAttractor,
    AddAttractor,
    DoubleScale,
    HalveScale,
    DecreaseWeight,
    IncreaseWeight,
    HalveColourStep,
    DoubleColourStep,
    ToggleMarkers,
    ToggleInfo,
    ToggleHelp,
    ToggleScreenSpace,
}

/// The key binding table. Unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Escape => Some(Action::Quit),
        KeyCode::R => Some(Action::Reset),
        KeyCode::C => Some(Action::ClearScreen),
        KeyCode::Z => Some(Action::RemoveAttractor),
        KeyCode::X => Some(Action::AddAttractor),
        KeyCode::Equal => Some(Action::DoubleScale),
        KeyCode::Minus => Some(Action::HalveScale),
        KeyCode::Comma => Some(Action::DecreaseWeight),
        KeyCode::Period => Some(Action::IncreaseWeight),
        KeyCode::LeftBracket => Some(Action::HalveColourStep),
        KeyCode::RightBracket => Some(Action::DoubleColourStep),
        KeyCode::A => Some(Action::ToggleMarkers),
        KeyCode::Tab => Some(Action::ToggleInfo),
        KeyCode::Slash => Some(Action::ToggleHelp),
        KeyCode::I => Some(Action::ToggleScreenSpace),
        _ => None,
    }
}

/// Actions for every key that went down this frame.
pub fn pending_actions() -> Vec<Action> {
    get_keys_pressed().into_iter().filter_map(action_for).collect()
}

/// Apply one action to the simulation. `Quit` is the caller's business.
pub fn apply(action: Action, sim: &mut Simulation, frame: &mut PixelBuffer) {
    match action {
        Action::Quit => {}
        Action::Reset => sim.reset(frame),
        Action::ClearScreen => frame.fill(BLACK),
        Action::RemoveAttractor => sim.remove_attractor(),
        Action::AddAttractor => sim.add_attractor(frame),
        Action::DoubleScale => sim.double_scale(),
        Action::HalveScale => sim.halve_scale(),
        Action::DecreaseWeight => sim.decrease_weight(),
        Action::IncreaseWeight => sim.increase_weight(),
        Action::HalveColourStep => sim.halve_colour_step(),
        Action::DoubleColourStep => sim.double_colour_step(),
        Action::ToggleMarkers => sim.show_markers = !sim.show_markers,
        Action::ToggleInfo => sim.show_info = !sim.show_info,
        Action::ToggleHelp => sim.show_help = !sim.show_help,
        Action::ToggleScreenSpace => sim.info_screen_space = !sim.info_screen_space,
    }
}
