//!
//! The audio module plays the hit sound whenever a paddle returns the ball. Each hit
//! spawns its own player entity, which despawns once the clip finishes, so overlapping
//! hits simply overlap.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::asset::AssetLoadFailedEvent;
use bevy::audio::AudioSinkPlayback;
use bevy::prelude::*;

use crate::game::FrameSignal;

// -------------------------------------------------------------------------------------------------
// Constants

const HIT_SOUND_PATH: &str = "sfx/pong_hit.wav";

// -------------------------------------------------------------------------------------------------
// Public API

///
/// Loads the hit sound at startup and plays it for every FrameSignal::PaddleHit.
/// If the sound cannot be loaded, the app exits with an error. Any clip still playing
/// is stopped when the app exits.
///
pub struct HitSoundPlugin;

impl Plugin for HitSoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_hit_sound)
            .add_systems(Update, exit_on_hit_sound_failure)
            .add_systems(Update, play_hit_sound.in_set(Systems::Playback))
            .add_systems(Last, stop_sounds_on_exit);
    }
}

/// System sets exposed so other plugins can order themselves around sound playback.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum Systems {
    /// Spawns one player per paddle hit reported during the frame.
    Playback,
}

// -------------------------------------------------------------------------------------------------
// Private Resources

#[derive(Resource, Debug, Clone)]
struct HitSound(Handle<AudioSource>);

// -------------------------------------------------------------------------------------------------
// Private Systems

fn load_hit_sound(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("Loading hit sound from {HIT_SOUND_PATH}");
    commands.insert_resource(HitSound(asset_server.load(HIT_SOUND_PATH)));
}

// A hit sound that fails to load is fatal: the app exits with an error code.
fn exit_on_hit_sound_failure(
    mut failures: EventReader<AssetLoadFailedEvent<AudioSource>>,
    hit_sound: Res<HitSound>,
    mut exit_events: EventWriter<AppExit>,
) {
    for failure in failures.read() {
        if failure.id == hit_sound.0.id() {
            error!("Failed to load hit sound {}: {}", failure.path, failure.error);
            exit_events.write(AppExit::error());
        }
    }
}

fn play_hit_sound(
    mut commands: Commands,
    mut signals: EventReader<FrameSignal>,
    hit_sound: Res<HitSound>,
) {
    for signal in signals.read() {
        if let FrameSignal::PaddleHit(_) = signal {
            commands.spawn((
                AudioPlayer::new(hit_sound.0.clone()),
                PlaybackSettings::DESPAWN,
            ));
        }
    }
}

// Silences every clip still playing once the app has been asked to exit
fn stop_sounds_on_exit(mut exits: EventReader<AppExit>, sinks: Query<&AudioSink>) {
    if exits.is_empty() {
        return;
    }
    exits.clear();

    for sink in sinks {
        sink.stop();
    }
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
