use std::sync::Arc;

use crate::animation::clip::AnimationClip;
use crate::animation::mixer::AnimationMixer;
use crate::engine::SharedRenderable;

/// Per-object animation playback state.
///
/// Invariant: a driver exists iff the clip sequence is non-empty. An object
/// without animation simply has no driver; that is a valid terminal state,
/// not an error.
#[derive(Default)]
pub struct AnimationState {
    clips: Vec<Arc<AnimationClip>>,
    mixer: Option<AnimationMixer>,
}

impl AnimationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the active clip sequence.
    ///
    /// Any prior driver is fully stopped and released *before* a new one is
    /// constructed, so two drivers are never bound at once and no stale
    /// playback leaks across a clip-set change.
    pub fn set_clips(&mut self, root: &SharedRenderable, clips: Vec<Arc<AnimationClip>>) {
        if let Some(mut mixer) = self.mixer.take() {
            mixer.stop_all_actions();
            mixer.uncache_root();
        }

        self.clips = clips;
        if self.clips.is_empty() {
            return;
        }

        self.mixer = Some(AnimationMixer::new(root.clone()));
    }

    /// Starts every clip in the current sequence from time zero. All clips
    /// run concurrently; layered tracks are the intended use. No-op without
    /// a driver.
    pub fn play_all(&mut self) {
        let Some(mixer) = self.mixer.as_mut() else {
            return;
        };
        for clip in &self.clips {
            mixer.clip_action(clip).reset().play();
        }
    }

    /// Advances the driver clock by `delta_seconds`.
    ///
    /// Zero or negative deltas are tolerated as a no-op advance: the first
    /// frame has no previous timestamp to subtract from.
    pub fn update(&mut self, delta_seconds: f32) {
        if delta_seconds <= 0.0 {
            return;
        }
        if let Some(mixer) = self.mixer.as_mut() {
            mixer.update(delta_seconds);
        }
    }

    #[must_use]
    pub fn clips(&self) -> &[Arc<AnimationClip>] {
        &self.clips
    }

    /// The active driver, if the clip sequence is non-empty.
    #[must_use]
    pub fn mixer(&self) -> Option<&AnimationMixer> {
        self.mixer.as_ref()
    }
}
