//! Scene Object Tests
//!
//! Tests for:
//! - Transform forwarding (position, uniform scale)
//! - Rotation application order (X, then Y, then Z)
//! - Playback starting on construction when clips are present
//! - Clip replacement through the object

mod common;

use std::sync::Arc;

use diorama::engine::SharedRenderable;
use diorama::headless::{Axis, HeadlessRenderable};
use diorama::{LoadedAsset, SceneObject};
use glam::Vec3;

use common::clip;

/// Keeps a concrete handle on the root so writes through the trait object
/// stay observable.
fn object_with_clips(clips: Vec<Arc<diorama::AnimationClip>>) -> (SceneObject, Arc<HeadlessRenderable>) {
    let concrete = HeadlessRenderable::shared();
    let root: SharedRenderable = concrete.clone();
    let object = SceneObject::new(LoadedAsset { root, clips }, None);
    (object, concrete)
}

#[test]
fn forwards_position_and_scale() {
    let (object, root) = object_with_clips(vec![]);

    object.set_position(1.0, 2.0, 3.0);
    object.set_scale(0.5);

    let state = root.state();
    assert_eq!(state.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(state.scale, 0.5);
}

#[test]
fn rotation_applies_x_then_y_then_z() {
    let (object, root) = object_with_clips(vec![]);

    object.set_rotation(0.1, 0.2, 0.3);

    let state = root.state();
    assert_eq!(
        state.rotations,
        vec![(Axis::X, 0.1), (Axis::Y, 0.2), (Axis::Z, 0.3)]
    );
}

#[test]
fn construction_starts_playback() {
    let (mut object, _root) = object_with_clips(vec![clip("walk", 1.0), clip("blink", 0.2)]);

    let mixer = object.animation().mixer().expect("clips install a driver");
    assert_eq!(mixer.actions().len(), 2);
    assert!(mixer.actions().iter().all(|a| a.is_running()));

    object.update(0.1);
    let mixer = object.animation().mixer().expect("driver");
    assert!(mixer.actions().iter().all(|a| a.time > 0.0));
}

#[test]
fn construction_without_clips_has_no_driver() {
    let (mut object, _root) = object_with_clips(vec![]);
    assert!(object.animation().mixer().is_none());

    // Driverless updates are valid.
    object.update(0.1);
}

#[test]
fn set_clips_replaces_without_restarting() {
    let (mut object, _root) = object_with_clips(vec![clip("walk", 1.0)]);

    object.set_clips(vec![clip("run", 0.5)]);
    let mixer = object.animation().mixer().expect("driver");
    assert!(mixer.actions().is_empty(), "nothing runs until play_all");

    object.play_all();
    let mixer = object.animation().mixer().expect("driver");
    assert_eq!(mixer.actions().len(), 1);
    assert!(mixer.actions()[0].is_running());
}
