//!
//! The arena module contains code to set up the environment in which the
//! pong game is played: the camera that renders the scene and the background
//! color the screen is cleared to each frame. It also owns the mapping between
//! gameplay screen coordinates and the engine's world coordinates.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

const BACKGROUND_COLOR: Color = Color::srgb_u8(28, 31, 28);

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The ArenaPlugin is the main type required to be added to the game to implement
/// the environment of pong. The plugin sets the clear color of the screen and adds a
/// single 2d camera which sees exactly SCREEN_WIDTH x SCREEN_HEIGHT world units.
///
pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(Startup, setup_camera.in_set(Systems::CameraSetup));
    }
}

/// These SystemSets are used to control any system ordering dependencies on this plugin
#[derive(SystemSet, Debug, Clone, Hash, PartialEq, Eq)]
pub enum Systems {
    /// Implements all logic to create the 2d camera entity. Must be in Startup.
    CameraSetup,
}

///
/// Converts a point in screen coordinates (origin at top-left, y growing downward)
/// into world coordinates (origin at screen center, y growing upward) at the given z.
///
pub fn screen_to_world(screen_pos: Vec2, z: f32) -> Vec3 {
    Vec3::new(
        screen_pos.x - (SCREEN_WIDTH / 2f32),
        (SCREEN_HEIGHT / 2f32) - screen_pos.y,
        z,
    )
}

// -------------------------------------------------------------------------------------------------
// Private Systems

// Sets up the 2D camera focused on the screen area of the game world
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: SCREEN_WIDTH,
                min_height: SCREEN_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
