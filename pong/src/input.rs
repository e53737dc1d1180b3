//!
//! Keyboard bindings for both players, and the per-step snapshot of player intents
//! that the game session consumes. Nothing here mutates game state; the snapshot is
//! plain data so the update step can be driven without a keyboard in tests.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;

// -------------------------------------------------------------------------------------------------
// Constants

pub const LEFT_UP_KEY: KeyCode = KeyCode::KeyW;
pub const LEFT_DOWN_KEY: KeyCode = KeyCode::KeyS;
pub const RIGHT_UP_KEY: KeyCode = KeyCode::ArrowUp;
pub const RIGHT_DOWN_KEY: KeyCode = KeyCode::ArrowDown;
/// Toggles pause during play, and restarts the game once it is over
pub const CONFIRM_KEY: KeyCode = KeyCode::Enter;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// Represents any of the possible directions a player is asking their paddle to move
/// in during the current frame. Up is toward the top of the screen.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MoveDirection {
    #[default]
    None,
    Up,
    Down,
}

impl MoveDirection {
    /// Resolves a held key pair into a direction. Holding both (or neither) cancels out.
    pub fn from_held(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => MoveDirection::Up,
            (false, true) => MoveDirection::Down,
            _ => MoveDirection::None,
        }
    }
}

/// Everything the game session needs to know about the outside world for one frame.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct FrameInput {
    /// Seconds elapsed since the previous frame
    pub dt: f32,
    pub left: MoveDirection,
    pub right: MoveDirection,
    /// True only on the frame the confirm key went down
    pub confirm_pressed: bool,
}

impl FrameInput {
    ///
    /// Builds the snapshot for one game step from the held keys. The confirm press is
    /// passed in, since it is latched between steps rather than read from the keyboard.
    ///
    pub fn from_keys(keys: &ButtonInput<KeyCode>, dt: f32, confirm_pressed: bool) -> Self {
        FrameInput {
            dt,
            left: MoveDirection::from_held(keys.pressed(LEFT_UP_KEY), keys.pressed(LEFT_DOWN_KEY)),
            right: MoveDirection::from_held(
                keys.pressed(RIGHT_UP_KEY),
                keys.pressed(RIGHT_DOWN_KEY),
            ),
            confirm_pressed,
        }
    }
}

///
/// Remembers a confirm key press until the next game step consumes it. Rendered frames
/// and game steps do not line up one to one, so a press may land on a frame with no step
/// at all, or on a frame with two.
///
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmLatch(bool);

impl ConfirmLatch {
    /// Records a press if the confirm key went down this frame.
    pub fn latch(&mut self, keys: &ButtonInput<KeyCode>) {
        if keys.just_pressed(CONFIRM_KEY) {
            self.0 = true;
        }
    }

    /// Returns whether a press is pending, and clears it.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_held() {
        assert_eq!(MoveDirection::from_held(false, false), MoveDirection::None);
        assert_eq!(MoveDirection::from_held(true, false), MoveDirection::Up);
        assert_eq!(MoveDirection::from_held(false, true), MoveDirection::Down);
        assert_eq!(
            MoveDirection::from_held(true, true),
            MoveDirection::None,
            "Expected both keys held to cancel out",
        );
    }

    #[test]
    fn test_from_keys_no_keys_down() {
        let keys = ButtonInput::<KeyCode>::default();
        assert_eq!(
            FrameInput::from_keys(&keys, 0.016, false),
            FrameInput {
                dt: 0.016,
                ..default()
            },
        );
    }

    #[test]
    fn test_from_keys_w_down_arrow_up() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyW);
        keys.press(KeyCode::ArrowDown);

        let input = FrameInput::from_keys(&keys, 0.5, false);
        assert_eq!(input.left, MoveDirection::Up, "Expected W to move left paddle up");
        assert_eq!(
            input.right,
            MoveDirection::Down,
            "Expected ArrowDown to move right paddle down",
        );
        assert!(!input.confirm_pressed, "Expected no confirm press");
    }

    #[test]
    fn test_confirm_latch_is_edge_triggered() {
        let mut latch = ConfirmLatch::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(CONFIRM_KEY);
        latch.latch(&keys);

        // Next frame, Enter is still held but no longer "just pressed"
        keys.clear();
        latch.latch(&keys);
        assert!(latch.take(), "Expected the press to be pending");
        assert!(!latch.take(), "Expected the press consumed by the first take");

        latch.latch(&keys);
        assert!(!latch.take(), "Expected no press while Enter is merely held");
    }

    #[test]
    fn test_confirm_latch_survives_frames_without_a_step() {
        let mut latch = ConfirmLatch::default();
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(CONFIRM_KEY);
        latch.latch(&keys);

        // Two more frames pass before the next game step runs
        keys.release(CONFIRM_KEY);
        keys.clear();
        latch.latch(&keys);
        latch.latch(&keys);
        assert!(latch.take(), "Expected the press kept until a step consumes it");
    }
}
