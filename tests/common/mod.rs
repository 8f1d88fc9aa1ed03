//! Shared test rig: a world wired to the headless engine and a canned
//! asset loader, plus the probe for inspecting what the world did.

#![allow(dead_code)]

use std::sync::Arc;

use diorama::headless::{EngineProbe, HeadlessEngine, StaticAssetLoader};
use diorama::{AnimationClip, World, WorldSettings};

pub const TEST_ASSET_BASE: &str = "https://assets.test/";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn test_settings() -> WorldSettings {
    WorldSettings {
        assets_base_url: TEST_ASSET_BASE.to_string(),
        ..WorldSettings::default()
    }
}

/// A world over the headless engine, not yet created.
pub fn idle_world(loader: StaticAssetLoader, settings: WorldSettings) -> (World, EngineProbe) {
    init_logging();
    let (engine, probe) = HeadlessEngine::new();
    let world = World::new(Box::new(engine), Box::new(loader), settings);
    (world, probe)
}

/// A world over the headless engine with its surface created.
pub fn running_world(loader: StaticAssetLoader, settings: WorldSettings) -> (World, EngineProbe) {
    let (mut world, probe) = idle_world(loader, settings);
    world.create().expect("headless surface creation succeeds");
    (world, probe)
}

pub fn clip(name: &str, duration: f32) -> Arc<AnimationClip> {
    Arc::new(AnimationClip::new(name, duration))
}
