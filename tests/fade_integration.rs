//! Fade tick integration tests: the fader system, request/finish events and
//! world time driven through a real `Schedule`.
//!
//! # Usage
//!
//! ```sh
//! cargo test --test fade_integration
//! ```

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;

use canvasfade::components::alphafader::AlphaFader;
use canvasfade::components::canvasgroup::CanvasGroup;
use canvasfade::events::fade::{FadeFinishedEvent, FadeRequestEvent, fade_request_observer};
use canvasfade::resources::worldtime::WorldTime;
use canvasfade::systems::fade::alpha_fader_system;
use canvasfade::systems::time::update_world_time;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[derive(Resource, Default)]
struct FinishedLog(Vec<FadeFinishedEvent>);

fn record_finished(trigger: On<FadeFinishedEvent>, mut log: ResMut<FinishedLog>) {
    log.0.push(*trigger.event());
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.init_resource::<FinishedLog>();
    world.spawn(Observer::new(fade_request_observer));
    world.spawn(Observer::new(record_finished));
    world.flush();
    world
}

fn tick_fade(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(alpha_fader_system);
    schedule.run(world);
}

fn alpha_of(world: &World, entity: Entity) -> f32 {
    world.get::<CanvasGroup>(entity).unwrap().alpha
}

fn in_transition(world: &World, entity: Entity) -> bool {
    world.get::<AlphaFader>(entity).unwrap().is_in_transition()
}

#[test]
fn fade_in_reaches_one_and_reports_finished() {
    let mut world = make_world();
    let panel = world
        .spawn((CanvasGroup::hidden(), AlphaFader::new(1.0).with_direction(false)))
        .id();

    world.trigger(FadeRequestEvent::fade_in(panel));
    assert!(in_transition(&world, panel));

    tick_fade(&mut world, 0.3);
    assert!(approx_eq(alpha_of(&world, panel), 0.3));
    assert!(in_transition(&world, panel));
    assert!(world.resource::<FinishedLog>().0.is_empty());

    tick_fade(&mut world, 1.0);
    assert_eq!(alpha_of(&world, panel), 1.0);
    assert!(!in_transition(&world, panel));

    let log = &world.resource::<FinishedLog>().0;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].entity, panel);
    assert!(log[0].visible);
}

#[test]
fn fade_out_reaches_zero() {
    let mut world = make_world();
    let panel = world.spawn((CanvasGroup::visible(), AlphaFader::new(2.0))).id();

    world.trigger(FadeRequestEvent::fade_out(panel));

    tick_fade(&mut world, 0.4);
    assert!(approx_eq(alpha_of(&world, panel), 0.2));
    assert!(in_transition(&world, panel));

    tick_fade(&mut world, 1.0);
    assert_eq!(alpha_of(&world, panel), 0.0);
    assert!(!in_transition(&world, panel));

    let log = &world.resource::<FinishedLog>().0;
    assert_eq!(log.len(), 1);
    assert!(!log[0].visible);
}

#[test]
fn last_request_before_tick_wins() {
    let mut world = make_world();
    let panel = world.spawn((CanvasGroup::new(0.5), AlphaFader::new(1.0))).id();

    world.trigger(FadeRequestEvent::fade_in(panel));
    world.trigger(FadeRequestEvent::fade_out(panel));

    tick_fade(&mut world, 0.1);
    assert!(approx_eq(alpha_of(&world, panel), 0.4));
}

#[test]
fn redirect_mid_fade_reverses_direction() {
    let mut world = make_world();
    let panel = world
        .spawn((CanvasGroup::hidden(), AlphaFader::new(1.0).with_direction(false)))
        .id();

    world.trigger(FadeRequestEvent::fade_in(panel));
    tick_fade(&mut world, 0.5);
    world.trigger(FadeRequestEvent::fade_out(panel));
    tick_fade(&mut world, 0.2);

    assert!(approx_eq(alpha_of(&world, panel), 0.3));
    assert!(world.resource::<FinishedLog>().0.is_empty());
}

#[test]
fn zero_delta_keeps_alpha() {
    let mut world = make_world();
    let panel = world.spawn((CanvasGroup::new(0.25), AlphaFader::new(3.0))).id();

    world.trigger(FadeRequestEvent::fade_in(panel));
    for _ in 0..5 {
        tick_fade(&mut world, 0.0);
    }
    assert_eq!(alpha_of(&world, panel), 0.25);
    assert!(in_transition(&world, panel));
}

#[test]
fn time_scale_slows_the_fade() {
    let mut world = make_world();
    world.resource_mut::<WorldTime>().time_scale = 0.5;
    let panel = world.spawn((CanvasGroup::hidden(), AlphaFader::new(1.0))).id();

    tick_fade(&mut world, 0.4);
    assert!(approx_eq(alpha_of(&world, panel), 0.2));
}

#[test]
fn fader_drives_a_bound_target_entity() {
    let mut world = make_world();
    let group = world.spawn(CanvasGroup::hidden()).id();
    let controller = world
        .spawn(AlphaFader::new(1.0).with_direction(false).with_target(group))
        .id();

    world.trigger(FadeRequestEvent::fade_in(controller));
    tick_fade(&mut world, 0.25);

    assert!(approx_eq(alpha_of(&world, group), 0.25));
    assert!(world.get::<CanvasGroup>(controller).is_none());
}

#[test]
fn fader_without_group_is_skipped() {
    let mut world = make_world();
    let orphan = world.spawn(AlphaFader::new(1.0)).id();
    let panel = world.spawn((CanvasGroup::hidden(), AlphaFader::new(1.0))).id();

    world.trigger(FadeRequestEvent::fade_in(orphan));
    tick_fade(&mut world, 0.5);

    assert!(in_transition(&world, orphan));
    assert!(approx_eq(alpha_of(&world, panel), 0.5));
}

#[test]
fn request_for_entity_without_fader_is_ignored() {
    let mut world = make_world();
    let plain = world.spawn(CanvasGroup::hidden()).id();

    world.trigger(FadeRequestEvent::fade_in(plain));
    tick_fade(&mut world, 1.0);

    assert_eq!(alpha_of(&world, plain), 0.0);
}

#[test]
fn fade_in_is_monotonic_across_frames() {
    let mut world = make_world();
    let panel = world.spawn((CanvasGroup::hidden(), AlphaFader::new(0.9))).id();

    let mut prev = alpha_of(&world, panel);
    for _ in 0..120 {
        tick_fade(&mut world, 1.0 / 60.0);
        let alpha = alpha_of(&world, panel);
        assert!(alpha >= prev);
        prev = alpha;
    }
    assert_eq!(prev, 1.0);
    assert!(!in_transition(&world, panel));
    assert_eq!(world.resource::<FinishedLog>().0.len(), 1);
}

#[test]
fn resting_group_is_not_marked_changed() {
    let mut world = make_world();
    let panel = world.spawn((CanvasGroup::visible(), AlphaFader::new(1.0))).id();
    world.clear_trackers();

    let mut schedule = Schedule::default();
    schedule.add_systems(alpha_fader_system);
    update_world_time(&mut world, 0.1);
    schedule.run(&mut world);

    let mut changed = world.query_filtered::<Entity, Changed<CanvasGroup>>();
    assert!(changed.iter(&world).all(|e| e != panel));
}

#[test]
fn request_toward_resting_value_keeps_transition_flag() {
    let mut world = make_world();
    let panel = world.spawn((CanvasGroup::visible(), AlphaFader::new(1.0))).id();

    world.trigger(FadeRequestEvent::fade_in(panel));
    tick_fade(&mut world, 0.016);
    tick_fade(&mut world, 0.016);

    assert_eq!(alpha_of(&world, panel), 1.0);
    assert!(in_transition(&world, panel));
    assert!(world.resource::<FinishedLog>().0.is_empty());
}
