//! In-process stand-ins for the engine-facing traits.
//!
//! [`HeadlessEngine`] renders nothing and records what the world asks of it;
//! [`StaticAssetLoader`] serves canned assets by URL. Together they let a
//! host or a test exercise the full session lifecycle without a GPU or a
//! network.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use glam::Vec3;
use parking_lot::Mutex;

use crate::animation::AnimationClip;
use crate::assets::{AssetLoader, LoadProgress, LoadedAsset, ProgressFn};
use crate::engine::{Engine, Renderable, SharedRenderable};
use crate::errors::{DioramaError, Result};

/// Axis tag for recorded rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Transform writes recorded by a [`HeadlessRenderable`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableState {
    pub position: Vec3,
    pub scale: f32,
    /// Axis rotations in application order.
    pub rotations: Vec<(Axis, f32)>,
}

impl Default for RenderableState {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            rotations: Vec::new(),
        }
    }
}

/// Renderable stub that records its transform writes.
#[derive(Debug, Default)]
pub struct HeadlessRenderable {
    state: Mutex<RenderableState>,
}

impl HeadlessRenderable {
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Snapshot of everything written so far.
    #[must_use]
    pub fn state(&self) -> RenderableState {
        self.state.lock().clone()
    }
}

impl Renderable for HeadlessRenderable {
    fn set_position(&self, position: Vec3) {
        self.state.lock().position = position;
    }

    fn set_uniform_scale(&self, scale: f32) {
        self.state.lock().scale = scale;
    }

    fn rotate_x(&self, radians: f32) {
        self.state.lock().rotations.push((Axis::X, radians));
    }

    fn rotate_y(&self, radians: f32) {
        self.state.lock().rotations.push((Axis::Y, radians));
    }

    fn rotate_z(&self, radians: f32) {
        self.state.lock().rotations.push((Axis::Z, radians));
    }
}

struct EngineState {
    surface_creations: usize,
    camera_position: Vec3,
    camera_direction: Vec3,
    camera_writes: usize,
    render_count: usize,
    controls_updates: usize,
    attached: Vec<SharedRenderable>,
    last_resize: Option<(u32, u32)>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            surface_creations: 0,
            camera_position: Vec3::ZERO,
            camera_direction: Vec3::NEG_Z,
            camera_writes: 0,
            render_count: 0,
            controls_updates: 0,
            attached: Vec::new(),
            last_resize: None,
        }
    }
}

/// Read-side handle onto a [`HeadlessEngine`]'s recorded state. Stays valid
/// after the engine is boxed into a world.
#[derive(Clone)]
pub struct EngineProbe {
    state: Arc<Mutex<EngineState>>,
}

impl EngineProbe {
    #[must_use]
    pub fn surface_creations(&self) -> usize {
        self.state.lock().surface_creations
    }

    #[must_use]
    pub fn camera_position(&self) -> Vec3 {
        self.state.lock().camera_position
    }

    /// Total number of camera position writes.
    #[must_use]
    pub fn camera_writes(&self) -> usize {
        self.state.lock().camera_writes
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.state.lock().render_count
    }

    #[must_use]
    pub fn controls_updates(&self) -> usize {
        self.state.lock().controls_updates
    }

    /// Number of subtrees currently attached to the scene graph.
    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.state.lock().attached.len()
    }

    #[must_use]
    pub fn last_resize(&self) -> Option<(u32, u32)> {
        self.state.lock().last_resize
    }
}

/// Engine stub: no drawing, full bookkeeping.
#[derive(Default)]
pub struct HeadlessEngine {
    state: Arc<Mutex<EngineState>>,
}

impl HeadlessEngine {
    /// Creates the engine and a probe observing it.
    #[must_use]
    pub fn new() -> (Self, EngineProbe) {
        let engine = Self::default();
        let probe = EngineProbe {
            state: engine.state.clone(),
        };
        (engine, probe)
    }
}

impl Engine for HeadlessEngine {
    fn create_surface(&mut self) -> Result<()> {
        self.state.lock().surface_creations += 1;
        Ok(())
    }

    fn attach(&mut self, root: &SharedRenderable) {
        self.state.lock().attached.push(root.clone());
    }

    fn detach(&mut self, root: &SharedRenderable) {
        self.state
            .lock()
            .attached
            .retain(|r| !Arc::ptr_eq(r, root));
    }

    fn update_controls(&mut self) {
        self.state.lock().controls_updates += 1;
    }

    fn render(&mut self) {
        self.state.lock().render_count += 1;
    }

    fn camera_position(&self) -> Vec3 {
        self.state.lock().camera_position
    }

    fn set_camera_position(&mut self, position: Vec3) {
        let mut state = self.state.lock();
        state.camera_position = position;
        state.camera_writes += 1;
    }

    fn camera_direction(&self) -> Vec3 {
        self.state.lock().camera_direction
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.state.lock().last_resize = Some((width, height));
    }
}

struct CannedAsset {
    clips: Vec<Arc<AnimationClip>>,
    size_bytes: u64,
}

/// Serves pre-registered assets by exact URL; unknown URLs fail the way a
/// dead transport would.
#[derive(Default)]
pub struct StaticAssetLoader {
    assets: HashMap<String, CannedAsset>,
}

impl StaticAssetLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the clips to hand out for `url`.
    pub fn insert(&mut self, url: impl Into<String>, clips: Vec<Arc<AnimationClip>>) -> &mut Self {
        self.assets.insert(
            url.into(),
            CannedAsset {
                clips,
                size_bytes: 1024,
            },
        );
        self
    }
}

impl AssetLoader for StaticAssetLoader {
    fn load<'a>(
        &'a self,
        url: &'a str,
        scale: f32,
        progress: Option<ProgressFn>,
    ) -> BoxFuture<'a, Result<LoadedAsset>> {
        Box::pin(async move {
            let Some(canned) = self.assets.get(url) else {
                return Err(DioramaError::AssetNotFound(url.to_string()));
            };

            if let Some(progress) = progress {
                progress(LoadProgress {
                    loaded_bytes: canned.size_bytes,
                    total_bytes: Some(canned.size_bytes),
                });
            }

            // Scale is an input to loading, not a post-attach adjustment.
            let root = HeadlessRenderable::shared();
            root.set_uniform_scale(scale);

            Ok(LoadedAsset {
                root,
                clips: canned.clips.clone(),
            })
        })
    }
}
