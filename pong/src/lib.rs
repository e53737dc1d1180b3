//!
//! A two-player Pong game. Each plugin in PongPlugins owns one piece of the game: the
//! window and camera, the paddles and ball, the fixed-step game session, the on-screen
//! text and the hit sound.
//!

mod arena;
mod audio;
mod ball;
mod common;
mod game;
mod hud;
mod input;
mod paddle;
mod window;

use bevy::prelude::*;

pub use common::{SCREEN_HEIGHT, SCREEN_WIDTH, Side, WIN_SCORE};
pub use game::{FrameSignal, Game, GameState};

///
/// Adds the engine, window and every game plugin to the app. This is the only plugin
/// the binary needs.
///
pub struct PongPlugins;

impl Plugin for PongPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            window::PongWindowPlugin,
            arena::ArenaPlugin,
            paddle::PaddlePlugin,
            ball::BallPlugin,
            game::GamePlugin,
            hud::HudPlugin,
            audio::HitSoundPlugin,
        ));
    }
}
