//!
//! The game module owns the session state (scores, pause, game over) and the single
//! fixed 60 Hz update step which moves the ball, resolves wall and paddle collisions,
//! awards points, applies player input and runs the pause/restart state machine.
//!
//! The update step itself is plain Rust over borrowed data. It never touches the
//! engine; any side effect it wants (a hit sound, a log line) is handed back as a
//! FrameSignal, which the GamePlugin system forwards as an event.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::input::InputSystem;
use bevy::math::bounding::{Aabb2d, BoundingCircle, IntersectsVolume};
use bevy::prelude::*;

use crate::ball::Ball;
use crate::common::*;
use crate::input::{ConfirmLatch, FrameInput};
use crate::paddle::Paddle;

// -------------------------------------------------------------------------------------------------
// Constants

/// Rate in Hz at which the game steps, whatever the display refresh rate
pub const GAME_STEP_HZ: f64 = 60.0;

// -------------------------------------------------------------------------------------------------
// Public API

///
/// The GamePlugin adds the Game session resource and the system which advances the
/// game. The game steps in FixedUpdate at GAME_STEP_HZ, so it runs at 60 Hz on any
/// display. Every change a step makes is reported with FrameSignal events, which
/// systems in Update read in the same rendered frame.
///
/// Must be added after the engine's TimePlugin, since it overrides the fixed timestep.
///
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Game>()
            .init_resource::<ConfirmLatch>()
            .insert_resource(Time::<Fixed>::from_hz(GAME_STEP_HZ))
            .add_event::<FrameSignal>()
            .add_systems(PreUpdate, latch_confirm.after(InputSystem))
            .add_systems(FixedUpdate, run_frame.in_set(Systems::Frame));
    }
}

/// These SystemSets are used to control any system ordering dependencies on this plugin
#[derive(SystemSet, Debug, Clone, Hash, PartialEq, Eq)]
pub enum Systems {
    ///
    /// Runs one game step. Lives in FixedUpdate, which the engine runs before Update,
    /// so visual sync and hud systems in Update always see the latest step.
    ///
    Frame,
}

///
/// The session state of one game. Exactly one of Playing, Paused or GameOver holds at
/// any time (see `state`), and neither score ever goes past WIN_SCORE.
///
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Game {
    pub game_over: bool,
    pub paused: bool,
    pub winner_text: Option<&'static str>,
    pub left_score: u8,
    pub right_score: u8,
}

/// The mutually exclusive states of a Game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Paused,
    GameOver,
}

///
/// Side effects requested by a single call to `Game::update`, in the order they
/// happened during the frame.
///
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSignal {
    /// The ball bounced off the paddle of this side. Plays the hit sound.
    PaddleHit(Side),
    /// This side was awarded a point.
    PointScored(Side),
    /// This side reached WIN_SCORE and the game is over.
    MatchWon(Side),
    /// The player toggled pause. Carries the new paused value.
    PauseToggled(bool),
    /// The game was reset after being over.
    Restarted,
}

impl Game {
    pub fn state(&self) -> GameState {
        if self.game_over {
            GameState::GameOver
        } else if self.paused {
            GameState::Paused
        } else {
            GameState::Playing
        }
    }

    pub fn score(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    /// True while the "press to continue" prompt should be on screen.
    pub fn awaiting_continue(&self) -> bool {
        self.paused && !self.game_over
    }

    /// Starts a fresh game: scores zeroed, flags cleared and the ball back in the center.
    pub fn reinit(&mut self, ball: &mut Ball) {
        *self = Game::default();
        ball.reinit_at(SCREEN_CENTER);
    }

    ///
    /// Advances the game by one frame. The order of the steps is significant, since each
    /// step sees the mutations of the ones before it:
    ///
    /// 1. The ball moves by `input.dt`.
    /// 2. Unless the game is over: the ball bounces off the top/bottom edges, points are
    ///    awarded when it leaves the screen sideways, paddles are clamped into their wall
    ///    bounds and then moved by input (so they may poke past a bound until the next
    ///    frame), the ball bounces off paddles it is heading toward, a paused ball is
    ///    held in the center, and the confirm key toggles pause.
    /// 3. Once the game is over, the confirm key restarts it and nothing else happens.
    ///
    pub fn update(
        &mut self,
        input: &FrameInput,
        ball: &mut Ball,
        left: &mut Paddle,
        right: &mut Paddle,
    ) -> Vec<FrameSignal> {
        let mut signals = Vec::new();

        ball.advance(input.dt);

        if self.game_over {
            if input.confirm_pressed {
                self.reinit(ball);
                signals.push(FrameSignal::Restarted);
            }
            return signals;
        }

        bounce_off_walls(ball);

        if ball.position.x < 0f32 {
            self.award_point(Side::Right, ball, &mut signals);
        }
        if ball.position.x > SCREEN_WIDTH {
            self.award_point(Side::Left, ball, &mut signals);
        }

        for paddle in [&mut *left, &mut *right] {
            let (min_y, max_y) = paddle.wall_bounds(SCREEN_HEIGHT);
            paddle.clamp(min_y, max_y);
        }
        left.apply_move(input.left, input.dt);
        right.apply_move(input.right, input.dt);

        for (side, paddle) in [(Side::Left, &*left), (Side::Right, &*right)] {
            let heading_toward = match side {
                Side::Left => ball.velocity.x < 0f32,
                Side::Right => ball.velocity.x > 0f32,
            };
            if heading_toward && touches_paddle(ball, paddle) {
                ball.velocity.x *= -BOUNCE_SPEEDUP;
                signals.push(FrameSignal::PaddleHit(side));
            }
        }

        if self.paused {
            ball.position = SCREEN_CENTER;
        }

        if input.confirm_pressed && !self.game_over {
            self.paused = !self.paused;
            signals.push(FrameSignal::PauseToggled(self.paused));
        }

        signals
    }

    // Gives the scorer a point and pauses. Ends the game if the scorer reached WIN_SCORE.
    fn award_point(&mut self, scorer: Side, ball: &mut Ball, signals: &mut Vec<FrameSignal>) {
        let score = match scorer {
            Side::Left => &mut self.left_score,
            Side::Right => &mut self.right_score,
        };
        *score += 1;
        self.paused = true;
        signals.push(FrameSignal::PointScored(scorer));

        if *score == WIN_SCORE {
            self.game_over = true;
            self.winner_text = Some(scorer.winner_text());
            ball.hide();
            signals.push(FrameSignal::MatchWon(scorer));
        }
    }
}

// -------------------------------------------------------------------------------------------------
// Private Systems

// Holds on to a confirm press until the next game step, so none is lost or doubled
fn latch_confirm(keys: Res<ButtonInput<KeyCode>>, mut latch: ResMut<ConfirmLatch>) {
    latch.latch(&keys);
}

//
// Gathers this step's input and runs the game update against the ball and both
// paddles, then forwards the resulting signals as events (logging the notable ones).
//
fn run_frame(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut latch: ResMut<ConfirmLatch>,
    mut game: ResMut<Game>,
    mut ball: Single<&mut Ball>,
    paddles: Query<&mut Paddle>,
    mut signal_writer: EventWriter<FrameSignal>,
) {
    let input = FrameInput::from_keys(&keys, time.delta_secs(), latch.take());
    let (mut left, mut right) = paddles
        .into_iter()
        .map(|paddle| (paddle.side, paddle))
        .as_per_side();

    let signals = game.update(&input, &mut ball, &mut left, &mut right);

    for signal in signals {
        match signal {
            FrameSignal::PaddleHit(side) => {
                debug!("Ball hit {side:?} paddle, speed now {}", ball.velocity.x.abs())
            }
            FrameSignal::PointScored(side) => info!(
                "{side:?} player scored ({} - {})",
                game.left_score, game.right_score
            ),
            FrameSignal::MatchWon(side) => info!("{}", side.winner_text()),
            FrameSignal::PauseToggled(paused) => debug!("Pause toggled, paused: {paused}"),
            FrameSignal::Restarted => info!("Game restarted"),
        }
        signal_writer.write(signal);
    }
}

// -------------------------------------------------------------------------------------------------
// Private Functions

// Reflects the ball off the top and bottom edges, pinning it to the edge it crossed.
fn bounce_off_walls(ball: &mut Ball) {
    if ball.position.y < 0f32 {
        ball.position.y = 0f32;
        ball.velocity.y *= -1f32;
    }
    if ball.position.y > SCREEN_HEIGHT {
        ball.position.y = SCREEN_HEIGHT;
        ball.velocity.y *= -1f32;
    }
}

// Circle vs rectangle overlap, touching edges included.
fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let bbox = paddle.bounding_box();
    BoundingCircle::new(ball.position, ball.radius)
        .intersects(&Aabb2d::new(bbox.center(), bbox.half_size()))
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
