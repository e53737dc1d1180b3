//!
//! The window module contains code to set up the base engine and create the
//! fixed-size window in which the pong game is played.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::window::WindowResolution;

use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

const PONG_WINDOW_TITLE: &str = "Pong";
const EXIT_WINDOW_KEY: KeyCode = KeyCode::Escape;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The PongWindowPlugin is the main type required to be added to the game to implement
/// the window for pong. The plugin creates a single window matching the gameplay area,
/// which cannot be resized. Frames are paced by vsync. It also handles the exit key.
///
pub struct PongWindowPlugin;

impl Plugin for PongWindowPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window()),
            ..default()
        }))
        .add_systems(Update, handle_exit_pressed);
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

// Detects when the exit key is pressed, and gracefully shuts down the window and app
fn handle_exit_pressed(keys: Res<ButtonInput<KeyCode>>, mut exit_events: EventWriter<AppExit>) {
    if keys.just_pressed(EXIT_WINDOW_KEY) {
        info!("Exit key pressed, closing window");
        exit_events.write(AppExit::Success);
    }
}

// -------------------------------------------------------------------------------------------------
// Private Functions

fn primary_window() -> Window {
    Window {
        title: PONG_WINDOW_TITLE.to_string(),
        resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        present_mode: PresentMode::AutoVsync,
        resizable: false,
        ..default()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
