//! The per-session orchestrator.
//!
//! One [`World`] owns the render-loop state, the live scene-object
//! collection, the named-viewpoint table, and the asset catalog, and
//! sequences asset loads, scene mutation, per-frame updates, and camera
//! tweening. There is no process-wide singleton: a session is an owned value
//! passed by reference to its collaborators.
//!
//! All state mutation happens on the single session thread. Asynchronous
//! operations (catalog fetch, asset load) suspend the calling flow without
//! blocking the frame pipeline, and a loaded subtree is attached to the
//! scene graph strictly before the object joins the live collection, so the
//! frame pipeline never sees a half-inserted object.

use std::time::{Duration, Instant};

use glam::Vec3;

use crate::assets::io::AssetReaderVariant;
use crate::assets::{AssetLoader, LoadProgress, ModelCatalog, ModelDefinition, ProgressFn};
use crate::engine::Engine;
use crate::errors::{DioramaError, Result};
use crate::scene_object::{SceneObject, SceneObjectId};
use crate::tween::{CameraTween, Easing, TweenOutcome};
use crate::utils::time::Timer;
use crate::viewpoint::{Viewpoint, ViewpointOutcome, ViewpointTable};

/// Catalog document location, relative to the asset base.
const CATALOG_INDEX_PATH: &str = "models/index.json";

/// Session lifecycle. Running is entered synchronously inside
/// [`World::create`]; a stopped session does not restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Running,
    Stopped,
}

/// World construction settings.
#[derive(Debug, Clone)]
pub struct WorldSettings {
    /// Base URL (or local directory) prefab assets and the catalog are
    /// resolved against.
    pub assets_base_url: String,
    /// Interval between camera-position status reports.
    pub camera_status_interval: Duration,
    /// Upper bound on the wall-clock frame delta fed to animation, so the
    /// first frame (which has no meaningful previous timestamp) or a stalled
    /// host cannot produce a giant playback jump.
    pub max_frame_delta: f32,
}

/// Default asset bucket; override via [`WorldSettings::assets_base_url`].
pub const DEFAULT_ASSETS_BASE_URL: &str = "https://diorama-assets.s3.amazonaws.com/";

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            assets_base_url: DEFAULT_ASSETS_BASE_URL.to_string(),
            camera_status_interval: Duration::from_secs(3),
            max_frame_delta: 0.25,
        }
    }
}

/// Host sink for the periodic camera status line.
pub type StatusFn = Box<dyn FnMut(&str)>;

/// Coordination state for a single rendering session.
pub struct World {
    engine: Box<dyn Engine>,
    loader: Box<dyn AssetLoader>,
    settings: WorldSettings,

    lifecycle: Lifecycle,
    scene_objects: Vec<SceneObject>,
    viewpoints: ViewpointTable,
    catalog: Option<ModelCatalog>,
    tweens: Vec<CameraTween>,
    timer: Timer,

    status_hook: Option<StatusFn>,
    last_status_at: Option<Instant>,
    last_status_position: Option<Vec3>,
}

impl World {
    #[must_use]
    pub fn new(
        engine: Box<dyn Engine>,
        loader: Box<dyn AssetLoader>,
        settings: WorldSettings,
    ) -> Self {
        Self {
            engine,
            loader,
            settings,
            lifecycle: Lifecycle::Idle,
            scene_objects: Vec::new(),
            viewpoints: ViewpointTable::default(),
            catalog: None,
            tweens: Vec::new(),
            timer: Timer::new(),
            status_hook: None,
            last_status_at: None,
            last_status_position: None,
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Builds the render surface, camera, and controls and enters Running.
    /// Calling this on an already-created session is a no-op.
    pub fn create(&mut self) -> Result<()> {
        if self.lifecycle != Lifecycle::Idle {
            return Ok(());
        }
        self.engine.create_surface()?;
        self.timer.reset();
        self.lifecycle = Lifecycle::Running;
        log::info!("world created, render loop running");
        Ok(())
    }

    /// Stops the session. Subsequent [`World::frame`] calls do nothing.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Running {
            self.lifecycle = Lifecycle::Stopped;
            log::info!("world stopped after {} frames", self.timer.frame_count);
        }
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Fetches and parses the catalog document, replacing the current
    /// catalog wholesale on success. On any failure the previous catalog is
    /// retained untouched: the new document is only installed after a
    /// successful parse.
    pub async fn fetch_prefab_models(&mut self) -> Result<&ModelCatalog> {
        let fetch = async {
            let reader = AssetReaderVariant::from_source(&self.settings.assets_base_url)?;
            let bytes = reader.read_bytes(CATALOG_INDEX_PATH).await?;
            ModelCatalog::from_json(&bytes)
        };
        let catalog = fetch
            .await
            .map_err(|e| DioramaError::CatalogFetch(Box::new(e)))?;

        log::info!(
            "fetched model catalog: {} categories, {} models",
            catalog.categories.len(),
            catalog.models.len()
        );
        Ok(self.catalog.insert(catalog))
    }

    /// First catalog model with the given id; `None` when the catalog is
    /// absent or has no match. Callers must check.
    #[must_use]
    pub fn prefab_model(&self, id: &str) -> Option<&ModelDefinition> {
        self.catalog.as_ref()?.model_by_id(id)
    }

    /// First catalog model with the given display name.
    #[must_use]
    pub fn prefab_model_by_name(&self, name: &str) -> Option<&ModelDefinition> {
        self.catalog.as_ref()?.model_by_name(name)
    }

    #[must_use]
    pub fn model_catalog(&self) -> Option<&ModelCatalog> {
        self.catalog.as_ref()
    }

    // ========================================================================
    // Scene objects
    // ========================================================================

    /// Loads a catalog model and adds it to the scene.
    ///
    /// On success the subtree is attached to the scene graph and the new
    /// object appended to the live collection. On failure both are left
    /// unmodified and the error propagates to the caller; the frame pipeline
    /// keeps running either way.
    pub async fn add_scene_object(
        &mut self,
        definition: &ModelDefinition,
        scale: f32,
    ) -> Result<SceneObjectId> {
        let url = self.resolve_model_url(&definition.path);
        self.spawn_object(url, scale, Some(definition.clone())).await
    }

    /// Loads a model straight from a URL, without a catalog definition.
    pub async fn add_scene_object_from_url(
        &mut self,
        url: &str,
        scale: f32,
    ) -> Result<SceneObjectId> {
        let url = self.resolve_model_url(url);
        self.spawn_object(url, scale, None).await
    }

    async fn spawn_object(
        &mut self,
        url: String,
        scale: f32,
        definition: Option<ModelDefinition>,
    ) -> Result<SceneObjectId> {
        log::info!("loading model from {url}");

        let progress_url = url.clone();
        let progress: ProgressFn = Box::new(move |p: LoadProgress| match p.total_bytes {
            Some(total) if total > 0 => log::debug!(
                "{progress_url}: {:.0}% loaded",
                p.loaded_bytes as f64 / total as f64 * 100.0
            ),
            _ => log::debug!("{progress_url}: {} bytes loaded", p.loaded_bytes),
        });

        let asset = self
            .loader
            .load(&url, scale, Some(progress))
            .await
            .map_err(|source| DioramaError::AssetLoad {
                url: url.clone(),
                source: Box::new(source),
            })?;

        // Attachment precedes membership: the frame pipeline must never see
        // an object whose root is not in the scene graph.
        self.engine.attach(&asset.root);
        let object = SceneObject::new(asset, definition);
        let id = object.id();
        self.scene_objects.push(object);

        log::info!("scene object {id} added ({} live)", self.scene_objects.len());
        Ok(id)
    }

    /// Detaches the object's subtree from the scene graph and drops it.
    /// Returns `false` when the id is not in the live collection. The order
    /// of the remaining objects is preserved.
    pub fn remove_scene_object(&mut self, id: SceneObjectId) -> bool {
        let Some(index) = self.scene_objects.iter().position(|o| o.id() == id) else {
            return false;
        };
        let object = self.scene_objects.remove(index);
        self.engine.detach(object.root());
        true
    }

    #[must_use]
    pub fn scene_object(&self, id: SceneObjectId) -> Option<&SceneObject> {
        self.scene_objects.iter().find(|o| o.id() == id)
    }

    pub fn scene_object_mut(&mut self, id: SceneObjectId) -> Option<&mut SceneObject> {
        self.scene_objects.iter_mut().find(|o| o.id() == id)
    }

    /// Live objects in insertion order.
    #[must_use]
    pub fn scene_objects(&self) -> &[SceneObject] {
        &self.scene_objects
    }

    /// Absolute `http(s)` paths pass through unchanged; everything else is
    /// resolved under the configured asset base's `models/` root.
    fn resolve_model_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = &self.settings.assets_base_url;
        if base.ends_with('/') {
            format!("{base}models/{path}")
        } else {
            format!("{base}/models/{path}")
        }
    }

    // ========================================================================
    // Viewpoints & camera
    // ========================================================================

    /// Replaces the viewpoint table wholesale.
    pub fn set_viewpoints(&mut self, viewpoints: Vec<Viewpoint>) {
        self.viewpoints.replace(viewpoints);
    }

    #[must_use]
    pub fn viewpoints(&self) -> &[Viewpoint] {
        self.viewpoints.viewpoints()
    }

    /// Jumps the camera to a named viewpoint. Titles match case-
    /// insensitively; a miss logs a diagnostic and leaves the camera
    /// untouched.
    pub fn set_camera_viewpoint(&mut self, title: &str) -> ViewpointOutcome {
        let Some(viewpoint) = self.viewpoints.find(title) else {
            log::warn!("viewpoint '{title}' not found");
            return ViewpointOutcome::NotFound;
        };
        let position = viewpoint.position;
        self.engine.set_camera_position(position);
        ViewpointOutcome::Applied
    }

    /// Starts a timed camera move to a named viewpoint using the default
    /// cubic ease-in-out curve.
    pub fn animate_to_viewpoint(&mut self, title: &str, duration_seconds: f32) -> TweenOutcome {
        self.animate_to_viewpoint_with(title, duration_seconds, Easing::default())
    }

    /// Starts a timed camera move with an explicit easing curve.
    ///
    /// A camera already exactly at the target yields [`TweenOutcome::Skipped`]
    /// with zero position writes. Overlapping tweens all write each frame in
    /// start order (last writer per frame wins); a superseded tween still
    /// resolves its ticket when its own parameter reaches 1.0.
    pub fn animate_to_viewpoint_with(
        &mut self,
        title: &str,
        duration_seconds: f32,
        easing: Easing,
    ) -> TweenOutcome {
        let Some(viewpoint) = self.viewpoints.find(title) else {
            log::warn!("viewpoint '{title}' not found");
            return TweenOutcome::NotFound;
        };
        let target = viewpoint.position;

        let current = self.engine.camera_position();
        if current == target {
            return TweenOutcome::Skipped;
        }

        let (tween, ticket) = CameraTween::new(current, target, duration_seconds, easing);
        self.tweens.push(tween);
        TweenOutcome::Started(ticket)
    }

    /// Number of tweens currently in flight.
    #[must_use]
    pub fn active_tweens(&self) -> usize {
        self.tweens.len()
    }

    /// Current camera position and view direction.
    #[must_use]
    pub fn camera_pose(&self) -> (Vec3, Vec3) {
        (
            self.engine.camera_position(),
            self.engine.camera_direction(),
        )
    }

    // ========================================================================
    // Frame pipeline
    // ========================================================================

    /// Runs one wall-clock frame of the render loop.
    ///
    /// Rescheduling lives with the host (the winit runner requests the next
    /// redraw after each one), so this is one self-contained iteration. The
    /// measured delta is clamped to [`WorldSettings::max_frame_delta`].
    pub fn frame(&mut self) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        self.timer.tick();
        let dt = self
            .timer
            .dt_seconds_clamped(self.settings.max_frame_delta);
        self.advance(dt);
    }

    /// Runs one frame with an explicit delta, for hosts driving a fixed
    /// timestep. No-op unless Running.
    ///
    /// The scene is drawn both before and after the update step; the second
    /// draw is the one that reflects this frame's playback advance.
    pub fn advance(&mut self, delta_seconds: f32) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }

        self.engine.update_controls();
        self.engine.render();

        self.step_tweens(delta_seconds);

        for object in &mut self.scene_objects {
            object.update(delta_seconds);
        }

        self.engine.render();

        self.report_camera_status();
    }

    /// One frame-aligned step for every in-flight tween, in start order.
    fn step_tweens(&mut self, delta_seconds: f32) {
        for tween in &mut self.tweens {
            let position = tween.step(delta_seconds);
            self.engine.set_camera_position(position);
        }
        self.tweens.retain(|t| !t.is_finished());
    }

    /// Throttled camera-position diagnostics: at most one report per
    /// interval, skipped entirely while the camera holds still.
    fn report_camera_status(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last_status_at {
            if now.duration_since(last) < self.settings.camera_status_interval {
                return;
            }
        }
        self.last_status_at = Some(now);

        let position = self.engine.camera_position();
        if self.last_status_position == Some(position) {
            return;
        }
        self.last_status_position = Some(position);

        let text = format!(
            "camera at ({:.2}, {:.2}, {:.2})",
            position.x, position.y, position.z
        );
        log::info!("{text}");
        if let Some(hook) = self.status_hook.as_mut() {
            hook(&text);
        }
    }

    // ========================================================================
    // Host integration
    // ========================================================================

    /// Installs a sink for the periodic camera status line (e.g. a UI status
    /// element). The line is always logged as well.
    pub fn set_status_hook(&mut self, hook: impl FnMut(&str) + 'static) {
        self.status_hook = Some(Box::new(hook));
    }

    /// Recomputes surface size and projection for new client dimensions.
    /// Zero-sized dimensions (minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.engine.resize(width, height);
    }

    #[must_use]
    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    #[must_use]
    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> &mut dyn Engine {
        self.engine.as_mut()
    }
}
