//! Viewpoint & Camera Tween Tests
//!
//! Tests for:
//! - Case-insensitive viewpoint lookup, instant jumps
//! - Miss handling (camera untouched, zero writes)
//! - Tween start/skip outcomes and completion tickets
//! - Frame-aligned interpolation reaching the exact target
//! - Overlapping tweens (last started wins each frame)

mod common;

use diorama::headless::StaticAssetLoader;
use diorama::{TweenOutcome, Viewpoint, ViewpointOutcome};
use glam::Vec3;

use common::{running_world, test_settings};

const LOBBY: Vec3 = Vec3::new(0.0, 1.6, 4.0);
const DOCK: Vec3 = Vec3::new(12.0, 2.0, -3.0);

fn viewpoints() -> Vec<Viewpoint> {
    vec![
        Viewpoint::new("Lobby", LOBBY),
        Viewpoint::new("Dock", DOCK),
    ]
}

// ============================================================================
// Instant jumps
// ============================================================================

#[test]
fn jump_matches_title_case_insensitively() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    assert_eq!(world.set_camera_viewpoint("LOBBY"), ViewpointOutcome::Applied);
    assert_eq!(probe.camera_position(), LOBBY);
    assert_eq!(probe.camera_writes(), 1);

    assert_eq!(world.set_camera_viewpoint("dock"), ViewpointOutcome::Applied);
    assert_eq!(probe.camera_position(), DOCK);
}

#[test]
fn jump_miss_leaves_camera_untouched() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    assert_eq!(
        world.set_camera_viewpoint("rooftop"),
        ViewpointOutcome::NotFound
    );
    assert_eq!(probe.camera_position(), Vec3::ZERO);
    assert_eq!(probe.camera_writes(), 0);
}

#[test]
fn replacing_viewpoints_discards_old_titles() {
    let (mut world, _probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());
    world.set_viewpoints(vec![Viewpoint::new("Stage", Vec3::ONE)]);

    assert_eq!(world.viewpoints().len(), 1);
    assert_eq!(
        world.set_camera_viewpoint("Lobby"),
        ViewpointOutcome::NotFound
    );
    assert_eq!(world.set_camera_viewpoint("Stage"), ViewpointOutcome::Applied);
}

// ============================================================================
// Tween outcomes
// ============================================================================

#[test]
fn animate_to_unknown_title_starts_nothing() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    let outcome = world.animate_to_viewpoint("rooftop", 1.0);
    assert!(matches!(outcome, TweenOutcome::NotFound));
    assert_eq!(world.active_tweens(), 0);

    world.advance(0.1);
    assert_eq!(probe.camera_writes(), 0);
}

#[test]
fn animate_skips_when_already_at_target() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());
    world.set_camera_viewpoint("Lobby");
    let writes_after_jump = probe.camera_writes();

    let outcome = world.animate_to_viewpoint("Lobby", 1.0);
    assert!(matches!(outcome, TweenOutcome::Skipped));
    assert_eq!(world.active_tweens(), 0);

    world.advance(0.1);
    assert_eq!(probe.camera_writes(), writes_after_jump, "skip writes nothing");
}

// ============================================================================
// Interpolation over frames
// ============================================================================

#[test]
fn tween_reaches_exact_target_and_resolves_ticket() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    let mut ticket = world
        .animate_to_viewpoint("Dock", 1.0)
        .started()
        .expect("tween started");
    assert_eq!(world.active_tweens(), 1);

    for _ in 0..3 {
        world.advance(0.25);
        assert!(!ticket.try_finished());
    }
    world.advance(0.25);

    assert_eq!(probe.camera_position(), DOCK, "completing sample is exact");
    assert!(ticket.try_finished());
    assert_eq!(world.active_tweens(), 0);
}

#[test]
fn tween_approaches_target_monotonically() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    let _ticket = world.animate_to_viewpoint("Dock", 1.0).started();

    let mut last_distance = probe.camera_position().distance(DOCK);
    for _ in 0..10 {
        world.advance(0.1);
        let distance = probe.camera_position().distance(DOCK);
        assert!(distance <= last_distance + 1e-5);
        last_distance = distance;
    }
}

#[test]
fn overlapping_tweens_last_started_wins() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(vec![
        Viewpoint::new("A", Vec3::new(10.0, 0.0, 0.0)),
        Viewpoint::new("B", Vec3::new(0.0, 10.0, 0.0)),
    ]);

    let mut ticket_a = world.animate_to_viewpoint("A", 1.0).started().expect("A");
    let mut ticket_b = world.animate_to_viewpoint("B", 1.0).started().expect("B");
    assert_eq!(world.active_tweens(), 2);

    // Both write every frame in start order, so B's sample lands last.
    world.advance(0.5);
    let mid = probe.camera_position();
    assert!(mid.y > 0.0 && mid.x == 0.0, "B's sample wins the frame: {mid}");

    world.advance(0.5);
    assert_eq!(probe.camera_position(), Vec3::new(0.0, 10.0, 0.0));
    assert!(ticket_a.try_finished(), "superseded tween still resolves");
    assert!(ticket_b.try_finished());
    assert_eq!(world.active_tweens(), 0);
}

#[test]
fn zero_duration_tween_completes_in_one_frame() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    let mut ticket = world
        .animate_to_viewpoint("Lobby", 0.0)
        .started()
        .expect("tween started");

    world.advance(0.016);
    assert_eq!(probe.camera_position(), LOBBY);
    assert!(ticket.try_finished());
}

#[test]
fn tweens_only_step_while_running() {
    let (mut world, probe) = running_world(StaticAssetLoader::new(), test_settings());
    world.set_viewpoints(viewpoints());

    let _ticket = world.animate_to_viewpoint("Dock", 1.0).started();
    world.stop();

    world.advance(0.5);
    assert_eq!(probe.camera_writes(), 0);
    assert_eq!(world.active_tweens(), 1, "tween neither stepped nor dropped");
}
