use std::sync::Arc;

use uuid::Uuid;

use crate::animation::action::AnimationAction;
use crate::animation::clip::AnimationClip;
use crate::engine::SharedRenderable;

/// Per-object playback driver advancing active clips' clocks each frame.
///
/// A mixer is bound to exactly one renderable root for its whole lifetime.
/// Rebinding means tearing the mixer down (`stop_all_actions` +
/// `uncache_root`) and constructing a fresh one; [`crate::AnimationState`]
/// owns that sequencing.
pub struct AnimationMixer {
    id: Uuid,
    root: SharedRenderable,
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new(root: SharedRenderable) -> Self {
        Self {
            id: Uuid::new_v4(),
            root,
            actions: Vec::new(),
        }
    }

    /// Stable identity of this driver instance.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn root(&self) -> &SharedRenderable {
        &self.root
    }

    /// Returns the cached action for `clip`, creating one on first request.
    pub fn clip_action(&mut self, clip: &Arc<AnimationClip>) -> &mut AnimationAction {
        let index = match self
            .actions
            .iter()
            .position(|action| Arc::ptr_eq(action.clip(), clip))
        {
            Some(index) => index,
            None => {
                self.actions.push(AnimationAction::new(clip.clone()));
                self.actions.len() - 1
            }
        };
        &mut self.actions[index]
    }

    /// Stops every cached action.
    pub fn stop_all_actions(&mut self) {
        for action in &mut self.actions {
            action.stop();
        }
    }

    /// Drops every cached action bound to the root.
    pub fn uncache_root(&mut self) {
        self.actions.clear();
    }

    /// Advances every action's clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for action in &mut self.actions {
            action.update(dt);
        }
    }

    #[must_use]
    pub fn actions(&self) -> &[AnimationAction] {
        &self.actions
    }
}
