//! Boundary between the simulation and whatever draws it.
//!
//! The simulation never touches a window, sprite or sound directly. It calls
//! into a [`Presenter`] and a rendering backend decides what that means.

use std::collections::HashSet;

use log::{info, warn};

use crate::control::satellite::CraftState;
use crate::simulation::Snapshot;
use crate::trajectory_system::flight_path::PathSegment;
use crate::utils::vector2d::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);
    pub const LT_BLUE: Color = Color(173, 216, 230);
}

pub const INTRO_TEXT: [&str; 3] = [
    " The Mars Orbiter experienced an error during Orbit insertion.",
    " Use thrusters to correct to a circular mapping orbit without",
    " running out of propellant or burning up in the atmosphere.",
];

pub const RULES_TEXT: [&str; 3] = [
    "Orbital altitude must be within 69-120 miles",
    "Orbital Eccentricity must be < 0.05",
    "Avoid top of atmosphere at 68 miles",
];

pub const CONTROLS_TEXT: [&str; 6] = [
    "Left Arrow = Decrease Dx",
    "Right Arrow = Increase Dx",
    "Up Arrow = Decrease Dy",
    "Down Arrow = Increase Dy",
    "Space Bar = Clear Path",
    "Escape = Exit Full Screen",
];

pub const INTRO_POSITION: Vector2D = Vector2D { x: 0.0, y: 15.0 };
pub const FAILURE_POSITION: Vector2D = Vector2D { x: 340.0, y: 195.0 };
pub const RULES_POSITION: Vector2D = Vector2D { x: 10.0, y: 10.0 };
pub const CONTROLS_POSITION: Vector2D = Vector2D { x: 560.0, y: 470.0 };

/// Capabilities the simulation calls into once per tick.
///
/// Everything except banner text is optional, so a headless backend only
/// implements what it cares about.
pub trait Presenter {
    fn draw_path_segment(&mut self, _segment: &PathSegment) {}

    fn clear_path(&mut self) {}

    fn play_thrust_sound(&mut self) {}

    fn stop_thrust_sound(&mut self) {}

    /// Draws a block of text lines; called every tick the banner should be visible.
    fn render_status_message(&mut self, lines: &[&str], color: Color, position: Vector2D);

    fn set_craft_visual(&mut self, _state: CraftState) {}

    fn toggle_mapping_view(&mut self, _enabled: bool) {}

    fn exit_fullscreen(&mut self) {}

    fn present(&mut self, _snapshot: &Snapshot) {}
}

#[derive(Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render_status_message(&mut self, _lines: &[&str], _color: Color, _position: Vector2D) {}
}

/// Headless backend: reports banners and craft changes through the logger,
/// each distinct banner only once per mission.
#[derive(Debug, Default)]
pub struct LogPresenter {
    logged_banners: HashSet<String>,
    segments_drawn: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        LogPresenter::default()
    }

    pub fn segments_drawn(&self) -> u64 {
        self.segments_drawn
    }
}

impl Presenter for LogPresenter {
    fn draw_path_segment(&mut self, _segment: &PathSegment) {
        self.segments_drawn += 1;
    }

    // A cleared trail means a new mission or a fresh view, banners may show again
    fn clear_path(&mut self) {
        info!("path cleared");
        self.logged_banners.clear();
    }

    fn render_status_message(&mut self, lines: &[&str], color: Color, _position: Vector2D) {
        let banner = lines.join("\n");
        if self.logged_banners.contains(&banner) {
            return;
        }
        if color == Color::RED {
            warn!("{banner}");
        } else {
            info!("{banner}");
        }
        self.logged_banners.insert(banner);
    }

    fn set_craft_visual(&mut self, state: CraftState) {
        info!("craft is now {state:?}");
    }

    fn toggle_mapping_view(&mut self, enabled: bool) {
        info!("mapping view {}", if enabled { "on" } else { "off" });
    }
}
