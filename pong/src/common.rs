//!
//! This module contains a subset of items that are relevant across the pong codebase
//! and will be included by many of the core modules.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::math::Vec2;

// -------------------------------------------------------------------------------------------------
// Constants

/// Width of the playing screen in pixels
pub const SCREEN_WIDTH: f32 = 800.0;
/// Height of the playing screen in pixels
pub const SCREEN_HEIGHT: f32 = 600.0;
/// Center of the playing screen, in screen coordinates (origin top-left, y down)
pub const SCREEN_CENTER: Vec2 = Vec2::new(SCREEN_WIDTH / 2f32, SCREEN_HEIGHT / 2f32);

/// Score at which a side wins and the game ends
pub const WIN_SCORE: u8 = 5;
/// Factor applied to the ball's horizontal speed on every paddle bounce
pub const BOUNCE_SPEEDUP: f32 = 1.1;
/// Clearance in pixels the paddles keep from the top and bottom screen edges
pub const WALL_MARGIN: f32 = 15.0;
/// Size of the paddle collision box, independent of the paddle's own width/height
pub const PADDLE_BOX_SIZE: Vec2 = Vec2::new(10.0, 100.0);

/// Z index for the ball and paddles
pub const Z_GAMEPLAY: f32 = 0f32;
/// Z index for components in the foreground, in front of core gameplay
pub const Z_FOREGROUND: f32 = 1f32;

// -------------------------------------------------------------------------------------------------
// Public Types

/// Identifies one of the two sides of the screen, and the player controlling it
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Text announcing this side as the winner of the game.
    pub fn winner_text(self) -> &'static str {
        match self {
            Side::Left => "Left Player Wins!",
            Side::Right => "Right Player Wins!",
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Public Traits and Blanket Impls

///
/// A trait that can be implemented for any type that contains some data T for both
/// sides of the game. It allows retrieval of the data per-side.
///
pub trait AsPerSideData<T> {
    ///
    /// Required Method:
    /// Consumes the value and returns a tuple of T types for the left and right sides.
    /// The first tuple item is for the left side. The second is for the right side.
    ///
    fn as_per_side(self) -> (T, T);
}

impl<T, U> AsPerSideData<T> for U
where
    U: Iterator<Item = (Side, T)>,
{
    ///
    /// Consumes the iterator (assuming it contains exactly 1 entry for each side)
    /// and identifies which side each item T belongs to. Then returns the appropriate tuple.
    ///
    /// This is intended for queries whose results exist once per side (e.g. paddles).
    /// The query iterator can be mapped to (Side, T) and then split with this function.
    ///
    fn as_per_side(mut self) -> (T, T) {
        let item1 = self.next();
        let item2 = self.next();
        assert!(
            self.next().is_none(),
            "Expected 1 iterator entry for each side. Got more than 2."
        );

        match (item1, item2) {
            (Some(item1), Some(item2)) => {
                if item1.0 == Side::Left {
                    assert!(
                        item2.0 == Side::Right,
                        "Expected 1 iterator entry for each side. Got 2 for Left"
                    );
                    (item1.1, item2.1)
                } else {
                    assert!(
                        item2.0 == Side::Left,
                        "Expected 1 iterator entry for each side. Got 2 for Right"
                    );
                    (item2.1, item1.1)
                }
            }
            _ => panic!("Expected 1 iterator entry for each side. Got less than 2."),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
