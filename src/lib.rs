pub mod animation;
pub mod assets;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod scene_object;
pub mod tween;
pub mod utils;
pub mod viewpoint;
pub mod world;

#[cfg(feature = "winit")]
pub mod app;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, AnimationState, LoopMode};
pub use assets::{
    AssetLoader, AssetReaderVariant, LoadProgress, LoadedAsset, ModelCatalog, ModelDefinition,
    ProgressFn,
};
pub use engine::{Engine, Renderable, SharedRenderable};
pub use errors::{DioramaError, Result};
pub use scene_object::{SceneObject, SceneObjectId};
pub use tween::{Easing, TweenOutcome, TweenTicket};
pub use utils::time::Timer;
pub use viewpoint::{Viewpoint, ViewpointOutcome};
pub use world::{Lifecycle, World, WorldSettings};

#[cfg(feature = "winit")]
pub use app::App;
