//!
//! This module contains code to manage the ball within the game: its data, creation,
//! integration over time, and the on-screen circle which mirrors its state. Collisions
//! and scoring are decided by the game session, which mutates the ball directly.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;

use crate::arena::screen_to_world;
use crate::common::*;

// -------------------------------------------------------------------------------------------------
// Constants

/// Radius of the ball while it is in play
pub const BALL_RADIUS: f32 = 5.0;
/// Velocity the ball is created with, in pixels per second
pub const BALL_START_VELOCITY: Vec2 = Vec2::new(250.0, 250.0);

const BALL_COLOR: Color = Color::srgb_u8(196, 192, 165);

// -------------------------------------------------------------------------------------------------
// Public API

///
/// This plugin adds the pong ball to the screen and keeps its visuals in sync with
/// the Ball component. The exposed system sets should be used to order gameplay systems
/// before the visual sync so changes are drawn in the same frame.
///
pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ball.in_set(Systems::BallCreation))
            .add_systems(Update, sync_ball_visuals.in_set(Systems::SyncVisuals));
    }
}

///
/// System sets to allow modules consuming this plugin to create ordering constraints
/// based on functionality exposed in the API of the Plugin.
///
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Systems {
    /// Startup systems which create the ball. After this, one Ball entity will exist.
    BallCreation,

    ///
    /// Update systems which copy the Ball state onto its Transform and Visibility.
    /// Anything that moves the ball should be ordered before this set.
    ///
    SyncVisuals,
}

///
/// The ball, in screen coordinates (origin top-left, y down). A radius of zero means the
/// ball is hidden, which only happens once the game is over.
///
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Ball::new(SCREEN_CENTER, BALL_START_VELOCITY, BALL_RADIUS)
    }
}

impl Ball {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Ball {
            position,
            velocity,
            radius,
        }
    }

    /// Moves the ball along its velocity for `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Puts the ball back at `center` with its in-play radius. Velocity is kept.
    pub fn reinit_at(&mut self, center: Vec2) {
        self.position = center;
        self.radius = BALL_RADIUS;
    }

    /// Shrinks the ball to nothing, so it disappears from the screen.
    pub fn hide(&mut self) {
        self.radius = 0f32;
    }

    pub fn is_hidden(&self) -> bool {
        self.radius <= 0f32
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Adds the Ball entity to the app as a circle mesh of unit radius. The transform
// scale carries the actual radius, so resizing the ball never touches the mesh.
//
fn setup_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let ball = Ball::default();
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(1f32))),
        MeshMaterial2d(materials.add(ColorMaterial::from_color(BALL_COLOR))),
        ball_transform(&ball),
        Visibility::Visible,
        ball,
    ));
}

// Mirrors any changed Ball state onto the on-screen circle
fn sync_ball_visuals(balls: Query<(&Ball, &mut Transform, &mut Visibility), Changed<Ball>>) {
    for (ball, mut ball_tf, mut vis) in balls {
        *ball_tf = ball_transform(ball);
        *vis = if ball.is_hidden() {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}

// -------------------------------------------------------------------------------------------------
// Private Functions

fn ball_transform(ball: &Ball) -> Transform {
    Transform {
        translation: screen_to_world(ball.position, Z_GAMEPLAY),
        scale: Vec3::new(ball.radius, ball.radius, 1f32),
        ..default()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
