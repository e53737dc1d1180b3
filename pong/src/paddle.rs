//!
//! Contains code to setup and manage the paddles on either side of the pong screen:
//! their data, the geometry queries used for collisions and wall clamping, and the
//! on-screen rectangles which mirror their state.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::prelude::*;

use crate::arena::screen_to_world;
use crate::common::*;
use crate::input::MoveDirection;

// -------------------------------------------------------------------------------------------------
// Constants

/// Movement speed of a paddle in pixels per second
pub const PADDLE_SPEED: f32 = 500.0;
/// Configured width and height of each paddle
pub const PADDLE_SIZE: Vec2 = Vec2::new(10.0, 100.0);
/// Horizontal distance from the screen edge to the center of each paddle
pub const PADDLE_EDGE_OFFSET: f32 = 50.0;

const PADDLE_COLOR: Color = Color::srgba_u8(40, 58, 66, 180);

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The PaddlePlugin adds 2 paddles to the screen, one on each side, and keeps their
/// on-screen rectangles in sync with the Paddle components. Movement itself is applied
/// by the game session, which owns the per-frame ordering of clamping and input.
///
pub struct PaddlePlugin;

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_paddles.in_set(Systems::PaddleCreation))
            .add_systems(Update, sync_paddle_visuals.in_set(Systems::SyncVisuals));
    }
}

/// These SystemSets are used to control any system ordering dependencies on this plugin
#[derive(SystemSet, Debug, Clone, Hash, PartialEq, Eq)]
pub enum Systems {
    /// Creates the paddle entities. Must be in Startup.
    PaddleCreation,

    ///
    /// Copies each Paddle's bounding box onto its sprite Transform. Anything that moves
    /// the paddles should be ordered before this set. Must be in Update.
    ///
    SyncVisuals,
}

///
/// A paddle, in screen coordinates (origin top-left, y down). The x coordinate is fixed
/// per side; only y changes during play.
///
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub position: Vec2,
    pub speed: f32,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, position: Vec2, speed: f32, size: Vec2) -> Self {
        Paddle {
            side,
            position,
            speed,
            size,
        }
    }

    /// Creates the paddle for the given side at its starting spot, vertically centered.
    pub fn for_side(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_EDGE_OFFSET,
            Side::Right => SCREEN_WIDTH - PADDLE_EDGE_OFFSET,
        };
        Paddle::new(
            side,
            Vec2::new(x, SCREEN_HEIGHT / 2f32),
            PADDLE_SPEED,
            PADDLE_SIZE,
        )
    }

    ///
    /// The rectangle used for collisions and drawing. It is always PADDLE_BOX_SIZE
    /// (10x100) centered on the paddle position, whatever `size` the paddle was
    /// created with. The two only agree because PADDLE_SIZE happens to match; a paddle
    /// built with another size still collides as a 10x100 box.
    ///
    pub fn bounding_box(&self) -> Rect {
        Rect::from_center_size(self.position, PADDLE_BOX_SIZE)
    }

    ///
    /// The (min, max) range of y the paddle center may occupy, keeping WALL_MARGIN
    /// between the paddle and the top/bottom edges of a screen of the given height.
    ///
    pub fn wall_bounds(&self, screen_height: f32) -> (f32, f32) {
        let half_height = self.size.y / 2f32;
        (
            half_height + WALL_MARGIN,
            screen_height - half_height - WALL_MARGIN,
        )
    }

    /// Restricts y into [min_y, max_y]. When the range is inverted, max_y wins.
    pub fn clamp(&mut self, min_y: f32, max_y: f32) {
        if self.position.y <= min_y {
            self.position.y = min_y;
        }
        if self.position.y >= max_y {
            self.position.y = max_y;
        }
    }

    /// Moves the paddle by its speed for `dt` seconds. Up is toward y = 0.
    pub fn apply_move(&mut self, direction: MoveDirection, dt: f32) {
        let distance = self.speed * dt;
        match direction {
            MoveDirection::Up => self.position.y -= distance,
            MoveDirection::Down => self.position.y += distance,
            MoveDirection::None => (),
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

//
// Creates two paddles - one for each player. One paddle is near the left edge of
// the screen, one is near the right edge. They are vertically centered to start.
//
fn setup_paddles(mut commands: Commands) {
    for side in [Side::Left, Side::Right] {
        let paddle = Paddle::for_side(side);
        commands.spawn((
            Sprite {
                color: PADDLE_COLOR,
                custom_size: Some(Vec2::ONE),
                ..default()
            },
            paddle_transform(&paddle),
            paddle,
        ));
    }
}

// Mirrors changed paddle positions onto their on-screen rectangles
fn sync_paddle_visuals(paddles: Query<(&Paddle, &mut Transform), Changed<Paddle>>) {
    for (paddle, mut paddle_tf) in paddles {
        *paddle_tf = paddle_transform(paddle);
    }
}

// -------------------------------------------------------------------------------------------------
// Private Functions

// Sprites are unit sized, so the transform scale is the real on-screen size.
fn paddle_transform(paddle: &Paddle) -> Transform {
    let bbox = paddle.bounding_box();
    Transform {
        translation: screen_to_world(bbox.center(), Z_GAMEPLAY),
        scale: bbox.size().extend(1f32),
        ..default()
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests

#[cfg(test)]
pub mod tests {
    use super::*;
    use bevy_test_helpers::prelude::*;

    #[test]
    fn test_plugin_sys_added_setup() {
        validate_sys_in_plugin(
            PaddlePlugin,
            Startup,
            setup_paddles,
            Some(Systems::PaddleCreation),
        );
    }

    #[test]
    fn test_plugin_sys_added_sync() {
        validate_sys_in_plugin(
            PaddlePlugin,
            Update,
            sync_paddle_visuals,
            Some(Systems::SyncVisuals),
        );
    }

    #[test]
    fn test_setup_paddles_system() {
        let mut world = World::default();

        let setup_sys = world.register_system(setup_paddles);
        world.run_system(setup_sys).unwrap();

        let mut query = world.query::<(&Paddle, &Sprite, &Transform)>();
        let ((left, left_sprite, left_tf), (right, _, right_tf)) = query
            .iter(&world)
            .map(|item| (item.0.side, item))
            .as_per_side();

        assert_eq!(
            left.position,
            Vec2::new(PADDLE_EDGE_OFFSET, SCREEN_HEIGHT / 2f32),
            "Expected left paddle at x={PADDLE_EDGE_OFFSET}, vertically centered",
        );
        assert_eq!(
            right.position,
            Vec2::new(SCREEN_WIDTH - PADDLE_EDGE_OFFSET, SCREEN_HEIGHT / 2f32),
            "Expected right paddle mirrored from the right edge",
        );
        for paddle in [left, right] {
            assert_eq!(paddle.speed, PADDLE_SPEED, "Expected paddle speed {PADDLE_SPEED}");
            assert_eq!(paddle.size, PADDLE_SIZE, "Expected paddle size {PADDLE_SIZE}");
        }
        assert_eq!(
            left_sprite.custom_size,
            Some(Vec2::ONE),
            "Expected sprite size of 1, so transform scale is real effective size",
        );
        assert_eq!(
            left_tf.translation,
            Vec3::new(PADDLE_EDGE_OFFSET - (SCREEN_WIDTH / 2f32), 0f32, Z_GAMEPLAY),
            "Expected left paddle drawn near the left edge of the world, got {}",
            left_tf.translation,
        );
        assert_eq!(
            right_tf.scale,
            PADDLE_BOX_SIZE.extend(1f32),
            "Expected paddle drawn with its bounding box size, got {}",
            right_tf.scale,
        );
    }

    #[test]
    fn test_bounding_box_default_paddle() {
        let paddle = Paddle::for_side(Side::Left);
        let bbox = paddle.bounding_box();
        assert_eq!(bbox.center(), paddle.position, "Expected box centered on paddle");
        assert_eq!(bbox.min, Vec2::new(45f32, 250f32), "Unexpected box min {}", bbox.min);
        assert_eq!(bbox.max, Vec2::new(55f32, 350f32), "Unexpected box max {}", bbox.max);
    }

    #[test]
    fn test_bounding_box_ignores_configured_size() {
        // The collision box stays 10x100 even for a paddle configured at another size
        let paddle = Paddle::new(
            Side::Right,
            Vec2::new(700f32, 200f32),
            PADDLE_SPEED,
            Vec2::new(40f32, 250f32),
        );
        let bbox = paddle.bounding_box();
        assert_eq!(
            bbox.size(),
            Vec2::new(10f32, 100f32),
            "Expected fixed 10x100 box regardless of paddle size, got {}",
            bbox.size(),
        );
        assert_eq!(bbox.center(), Vec2::new(700f32, 200f32));
    }

    #[test]
    fn test_wall_bounds() {
        let paddle = Paddle::for_side(Side::Left);
        assert_eq!(
            paddle.wall_bounds(SCREEN_HEIGHT),
            (65f32, 535f32),
            "Expected bounds of half height + margin from each edge",
        );

        let tall = Paddle::new(Side::Left, Vec2::ZERO, PADDLE_SPEED, Vec2::new(10f32, 200f32));
        assert_eq!(tall.wall_bounds(SCREEN_HEIGHT), (115f32, 485f32));
    }

    #[test]
    fn test_clamp() {
        let mut paddle = Paddle::for_side(Side::Right);
        let (min_y, max_y) = paddle.wall_bounds(SCREEN_HEIGHT);

        paddle.position.y = -40f32;
        paddle.clamp(min_y, max_y);
        assert_eq!(paddle.position.y, min_y, "Expected clamp up to the top bound");

        paddle.position.y = SCREEN_HEIGHT + 40f32;
        paddle.clamp(min_y, max_y);
        assert_eq!(paddle.position.y, max_y, "Expected clamp down to the bottom bound");

        paddle.position.y = 123f32;
        paddle.clamp(min_y, max_y);
        assert_eq!(paddle.position.y, 123f32, "Expected in-range y to be untouched");

        // x never changes
        assert_eq!(paddle.position.x, SCREEN_WIDTH - PADDLE_EDGE_OFFSET);
    }

    #[test]
    fn test_apply_move() {
        let mut paddle = Paddle::for_side(Side::Left);
        let start_y = paddle.position.y;

        paddle.apply_move(MoveDirection::Up, 0.1);
        assert_eq!(paddle.position.y, start_y - 50f32, "Expected up to decrease y");

        paddle.apply_move(MoveDirection::Down, 0.2);
        assert_eq!(paddle.position.y, start_y + 50f32, "Expected down to increase y");

        paddle.apply_move(MoveDirection::None, 10f32);
        assert_eq!(paddle.position.y, start_y + 50f32, "Expected no movement for None");
    }

    #[test]
    fn test_apply_move_can_pass_bounds() {
        // Clamping is a separate step, so a move may overshoot until the next clamp
        let mut paddle = Paddle::for_side(Side::Left);
        let (min_y, _) = paddle.wall_bounds(SCREEN_HEIGHT);
        paddle.position.y = min_y;
        paddle.apply_move(MoveDirection::Up, 0.02);
        assert!(
            paddle.position.y < min_y,
            "Expected paddle to transiently pass the top bound, got {}",
            paddle.position.y,
        );
    }

    #[test]
    fn test_sync_visuals_system() {
        let mut world = World::default();
        let paddle = spawn_test_paddle(&mut world, Side::Right, 100f32);

        let sync_sys = world.register_system(sync_paddle_visuals);
        world.run_system(sync_sys).unwrap();

        let paddle_tf = world.get::<Transform>(paddle).unwrap();
        assert_eq!(
            paddle_tf.translation,
            Vec3::new(
                (SCREEN_WIDTH / 2f32) - PADDLE_EDGE_OFFSET,
                (SCREEN_HEIGHT / 2f32) - 100f32,
                Z_GAMEPLAY,
            ),
            "Expected paddle drawn at its screen position, got {}",
            paddle_tf.translation,
        );
    }

    // --- External API For Other Test Suites ---
    pub fn spawn_test_paddle(world: &mut World, side: Side, y: f32) -> Entity {
        let mut paddle = Paddle::for_side(side);
        paddle.position.y = y;
        world.spawn((paddle, Transform::default())).id()
    }
}
