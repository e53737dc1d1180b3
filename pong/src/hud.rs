//!
//! The hud module contains the HudPlugin, which manages the on-screen texts that
//! describe the session: each side's score, the prompt to continue while paused,
//! and the winner announcement with its restart prompt once the game is over.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;
use bevy::sprite::Anchor;

use crate::arena::screen_to_world;
use crate::common::*;
use crate::game::Game;

// -------------------------------------------------------------------------------------------------
// Constants

const SCORE_FONT_SIZE: f32 = 30.0;
const CONTINUE_FONT_SIZE: f32 = 40.0;
const WINNER_FONT_SIZE: f32 = 60.0;
const RESTART_FONT_SIZE: f32 = 30.0;

const CONTINUE_TEXT: &str = "Press Enter to Continue..";
const RESTART_TEXT: &str = "Press Enter To Restart The Game";

const SCORE_COLOR: Color = Color::srgb_u8(63, 84, 61);
const WINNER_COLOR: Color = Color::srgba_u8(218, 165, 32, 155);
const PROMPT_COLOR: Color = Color::srgb_u8(84, 61, 61);

// Screen coordinates of each text's anchor point
const LEFT_SCORE_POS: Vec2 = Vec2::new(100.0, 10.0);
const RIGHT_SCORE_POS: Vec2 = Vec2::new(SCREEN_WIDTH - 240.0, 10.0);
const CONTINUE_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2f32, (SCREEN_HEIGHT * 0.3) - 30.0);
const WINNER_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2f32, (SCREEN_HEIGHT / 3f32) - 30.0);
const RESTART_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2f32, (SCREEN_HEIGHT / 2f32) - 30.0);

// -------------------------------------------------------------------------------------------------
// Public API

///
/// This plugin adds all on-screen text to the game. It never changes game state;
/// it only reads the Game resource, in Update, after any game steps for the frame.
///
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup.in_set(Systems::Startup))
            .add_systems(Update, refresh_hud.in_set(Systems::Refresh));
    }
}

///
/// Contains the SystemSets relevant to external code using this plugin.
/// These are exposed to enable proper ordering constraints in the game.
///
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Systems {
    /// Spawns every text entity. They live for the whole session.
    Startup,

    /// Rewrites texts and visibility from the Game resource. Must be in Update.
    Refresh,
}

// -------------------------------------------------------------------------------------------------
// Private Components

// Identifies each text entity managed by the hud
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
enum HudText {
    Score(Side),
    Continue,
    Winner,
    Restart,
}

impl HudText {
    // The text this entity should show, or None if its text never changes
    fn content(self, game: &Game) -> Option<String> {
        match self {
            HudText::Score(side) => Some(format!("Score: [{}]", game.score(side))),
            HudText::Winner => Some(game.winner_text.unwrap_or_default().to_string()),
            HudText::Continue | HudText::Restart => None,
        }
    }

    fn visible(self, game: &Game) -> bool {
        match self {
            HudText::Score(_) => true,
            HudText::Continue => game.awaiting_continue(),
            HudText::Winner | HudText::Restart => game.winner_text.is_some(),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Setup system to spawn each on-screen text entity. The scores are anchored by their
// top-left corner near the top of the screen. The prompts and winner announcement are
// horizontally centered, and start hidden.
//
fn setup(mut commands: Commands) {
    let game = Game::default();

    for (hud_text, pos, anchor, font_size, color) in [
        (
            HudText::Score(Side::Left),
            LEFT_SCORE_POS,
            Anchor::TopLeft,
            SCORE_FONT_SIZE,
            SCORE_COLOR,
        ),
        (
            HudText::Score(Side::Right),
            RIGHT_SCORE_POS,
            Anchor::TopLeft,
            SCORE_FONT_SIZE,
            SCORE_COLOR,
        ),
        (
            HudText::Continue,
            CONTINUE_POS,
            Anchor::TopCenter,
            CONTINUE_FONT_SIZE,
            PROMPT_COLOR,
        ),
        (
            HudText::Winner,
            WINNER_POS,
            Anchor::TopCenter,
            WINNER_FONT_SIZE,
            WINNER_COLOR,
        ),
        (
            HudText::Restart,
            RESTART_POS,
            Anchor::TopCenter,
            RESTART_FONT_SIZE,
            PROMPT_COLOR,
        ),
    ] {
        let text = match hud_text {
            HudText::Continue => CONTINUE_TEXT.to_string(),
            HudText::Restart => RESTART_TEXT.to_string(),
            _ => hud_text.content(&game).unwrap_or_default(),
        };
        let visibility = if hud_text.visible(&game) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        commands.spawn((
            hud_text,
            Text2d::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(color),
            anchor,
            Transform::from_translation(screen_to_world(pos, Z_FOREGROUND)),
            visibility,
        ));
    }
}

// Rewrites every text and its visibility whenever the Game resource changed.
fn refresh_hud(game: Res<Game>, texts: Query<(&HudText, &mut Text2d, &mut Visibility)>) {
    if !game.is_changed() {
        return;
    }

    for (hud_text, mut text, mut vis) in texts {
        if let Some(content) = hud_text.content(&game) {
            if text.0 != content {
                text.0 = content;
            }
        }

        let new_vis = if hud_text.visible(&game) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        vis.set_if_neq(new_vis);
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
