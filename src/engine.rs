//! Interface to the external rendering engine.
//!
//! The coordination layer never inspects engine internals: it holds opaque,
//! capability-typed handles and sequences calls into them. Implementations
//! own the scene graph, camera projection, render surface, and input
//! controls. Everything here runs on the single session thread; the render
//! loop only reads engine state for drawing, and the only camera writes come
//! from the same thread (viewpoint jumps and frame-aligned tween steps).

use std::sync::Arc;

use glam::Vec3;

use crate::errors::Result;

/// Opaque handle to a renderable subtree owned by the rendering engine.
///
/// The engine retains the actual node data; a handle is cheap to clone and
/// mutates the underlying subtree through interior mutability, so the
/// transform setters take `&self`.
pub trait Renderable: Send + Sync {
    /// Overwrites the subtree's world position.
    fn set_position(&self, position: Vec3);

    /// Applies a uniform scale to the subtree root.
    fn set_uniform_scale(&self, scale: f32);

    /// Rotates about the subtree's current local X axis.
    fn rotate_x(&self, radians: f32);

    /// Rotates about the subtree's current local Y axis.
    fn rotate_y(&self, radians: f32);

    /// Rotates about the subtree's current local Z axis.
    fn rotate_z(&self, radians: f32);
}

/// Shared ownership of a renderable subtree handle.
pub type SharedRenderable = Arc<dyn Renderable>;

/// The slice of the rendering engine the world drives.
///
/// One instance backs one session. The world calls [`Engine::create_surface`]
/// exactly once, attaches loaded subtrees strictly before exposing them to
/// the frame pipeline, and issues camera writes only between renders.
pub trait Engine {
    /// One-time construction of the render surface, camera, and controls.
    fn create_surface(&mut self) -> Result<()>;

    /// Attaches a loaded subtree to the scene graph.
    fn attach(&mut self, root: &SharedRenderable);

    /// Removes a previously attached subtree from the scene graph.
    fn detach(&mut self, root: &SharedRenderable);

    /// Advances camera controls from accumulated input.
    fn update_controls(&mut self);

    /// Draws the scene through the camera.
    fn render(&mut self);

    /// Current world-space camera position.
    fn camera_position(&self) -> Vec3;

    /// Overwrites the camera position.
    fn set_camera_position(&mut self, position: Vec3);

    /// Unit vector the camera is looking along.
    fn camera_direction(&self) -> Vec3;

    /// Recomputes projection and surface size for new client dimensions.
    fn resize(&mut self, width: u32, height: u32);
}
