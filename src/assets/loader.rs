//! The asset-loading seam consumed by the world.
//!
//! Decoding the engine-native bundle format is the loader's business; the
//! world only sequences the load and attaches the result.

use std::sync::Arc;

use futures::future::BoxFuture;

use crate::animation::AnimationClip;
use crate::engine::SharedRenderable;
use crate::errors::Result;

/// Result of a completed asset load: the renderable subtree root plus the
/// animation clips decoded alongside it (possibly none).
///
/// The subtree's graphics resources live until the owning scene object is
/// removed and its animation driver released; there is no reference counting
/// beyond the handle itself.
pub struct LoadedAsset {
    pub root: SharedRenderable,
    pub clips: Vec<Arc<AnimationClip>>,
}

/// Advisory progress report. `total_bytes` is absent when the transport does
/// not announce a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded_bytes: u64,
    pub total_bytes: Option<u64>,
}

/// Progress callback. Reports must not affect control flow.
pub type ProgressFn = Box<dyn Fn(LoadProgress) + Send>;

/// Asynchronous, single-shot model loading. No retry, no cancellation.
///
/// The returned asset's spatial scale must already reflect `scale`: scale is
/// an input to loading, not a post-hoc adjustment, so scene-graph attachment
/// and progress reporting stay consistent. On failure nothing may have been
/// attached to any scene graph.
pub trait AssetLoader {
    fn load<'a>(
        &'a self,
        url: &'a str,
        scale: f32,
        progress: Option<ProgressFn>,
    ) -> BoxFuture<'a, Result<LoadedAsset>>;
}
