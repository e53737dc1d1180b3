//!
//! This crate contains helper functions to facilitate easier validation of certain bevy
//! constructs or situations, and to drive frame-based systems from a bare World.
//!

// -------------------------------------------------------------------------------------------------
// Included Symbols

use bevy::ecs::schedule::ScheduleBuildError;
use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

use core::any::type_name;
use std::time::Duration;

// -------------------------------------------------------------------------------------------------
// Public API

/// The prelude includes all basic members of this crate and should be included with prelude::*
pub mod prelude {
    pub use super::{insert_frame_resources, read_events, validate_sys_in_plugin};
}

///
/// Validates the presence of the given system, within the given schedule, after installing
/// the given plugin in a new App. Optionally (if not None), a system set may be specified
/// too, in which case this function also validates the system was added as part of
/// the given set during the plugin build.
///
pub fn validate_sys_in_plugin<P, L, S, Marker, SS>(
    plugin: P,
    schedule: L,
    system: S,
    set: Option<SS>,
) where
    P: Plugin,
    L: ScheduleLabel + Clone,
    S: IntoSystemSet<Marker>,
    SS: SystemSet,
{
    let mut app = App::new();
    app.add_plugins(plugin);

    let sys_name = type_name::<S>();
    let found_system = app
        .get_schedule(schedule.clone())
        .unwrap_or_else(|| {
            panic!(
                "Expected {} schedule to exist in app after adding {} plugin",
                type_name::<L>(),
                type_name::<P>(),
            )
        })
        .graph()
        .systems()
        .any(|(_, boxed_sys, _)| boxed_sys.name() == sys_name);

    assert!(
        found_system,
        "Expected to find system {} in schedule {} after adding {} plugin",
        sys_name,
        type_name::<L>(),
        type_name::<P>(),
    );

    let Some(set) = set else {
        return;
    };

    // Ordering a set before a system inside it must fail the schedule build
    app.configure_sets(schedule.clone(), set.before(system));
    let init_result = app
        .world_mut()
        .try_schedule_scope(schedule, |world, sched| sched.initialize(world))
        .unwrap();
    let Err(ScheduleBuildError::SetsHaveOrderButIntersect(..)) = init_result else {
        panic!(
            concat!(
                "Expected {} schedule build to fail, ",
                "since {} should be in {} system set. But it succeeded unexpectedly, ",
                "suggesting the system is not in the set as it should be"
            ),
            type_name::<L>(),
            sys_name,
            type_name::<SS>(),
        );
    };
}

///
/// Replaces the Time and keyboard resources in the given world with the state of a single
/// frame: the clock advanced by `delta`, and exactly the given keys pressed this frame.
/// Every key given reads as both held and just pressed.
///
pub fn insert_frame_resources(world: &mut World, delta: Duration, keys: &[KeyCode]) {
    let mut time = Time::<()>::default();
    time.advance_by(delta);
    world.insert_resource(time);

    let mut input = ButtonInput::<KeyCode>::default();
    for key in keys {
        input.press(*key);
    }
    world.insert_resource(input);
}

///
/// Returns every event of type E still buffered in the given world, oldest first.
/// Panics if the Events<E> resource was never added.
///
pub fn read_events<E: Event + Clone>(world: &World) -> Vec<E> {
    let events = world.get_resource::<Events<E>>().unwrap_or_else(|| {
        panic!(
            "Expected Events<{}> resource to exist in world",
            type_name::<E>()
        )
    });
    events.get_cursor().read(events).cloned().collect()
}

// -------------------------------------------------------------------------------------------------
// Unit Tests
