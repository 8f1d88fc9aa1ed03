use std::sync::Arc;

use glam::Vec3;
use uuid::Uuid;

use crate::animation::{AnimationClip, AnimationState};
use crate::assets::{LoadedAsset, ModelDefinition};
use crate::engine::SharedRenderable;

/// Stable identity for a live scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneObjectId(Uuid);

impl SceneObjectId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SceneObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A loaded renderable paired with its catalog definition (if any) and its
/// animation playback state.
///
/// Construction installs the asset's clips and starts them; objects loaded
/// without clips simply have no driver.
pub struct SceneObject {
    id: SceneObjectId,
    root: SharedRenderable,
    definition: Option<ModelDefinition>,
    animation: AnimationState,
}

impl SceneObject {
    #[must_use]
    pub fn new(asset: LoadedAsset, definition: Option<ModelDefinition>) -> Self {
        let mut animation = AnimationState::new();
        animation.set_clips(&asset.root, asset.clips);
        animation.play_all();

        Self {
            id: SceneObjectId::new(),
            root: asset.root,
            definition,
            animation,
        }
    }

    #[must_use]
    pub fn id(&self) -> SceneObjectId {
        self.id
    }

    #[must_use]
    pub fn root(&self) -> &SharedRenderable {
        &self.root
    }

    /// The catalog record this object was loaded from; `None` for objects
    /// added straight from a URL.
    #[must_use]
    pub fn definition(&self) -> Option<&ModelDefinition> {
        self.definition.as_ref()
    }

    #[must_use]
    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn set_position(&self, x: f32, y: f32, z: f32) {
        self.root.set_position(Vec3::new(x, y, z));
    }

    pub fn set_scale(&self, scale: f32) {
        self.root.set_uniform_scale(scale);
    }

    /// Applies three sequential axis rotations about the object's current
    /// orientation: X, then Y, then Z. Axis rotations do not commute, so the
    /// order is part of the contract.
    pub fn set_rotation(&self, x: f32, y: f32, z: f32) {
        self.root.rotate_x(x);
        self.root.rotate_y(y);
        self.root.rotate_z(z);
    }

    /// Replaces this object's clip sequence (stopping any prior playback
    /// first) without restarting playback.
    pub fn set_clips(&mut self, clips: Vec<Arc<AnimationClip>>) {
        self.animation.set_clips(&self.root, clips);
    }

    /// Starts every clip in the current sequence.
    pub fn play_all(&mut self) {
        self.animation.play_all();
    }

    /// Per-frame hook; forwards to the animation state.
    pub fn update(&mut self, delta_seconds: f32) {
        self.animation.update(delta_seconds);
    }
}
