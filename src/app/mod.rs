//! Winit-based session runner.
//!
//! [`App`] owns the window event loop and drives a [`World`] with the
//! self-perpetuating redraw pattern: every completed frame requests the
//! next one, so the loop runs unbounded until the window closes or
//! [`World::stop`] is called from the frame hook.
//!
//! # Usage
//!
//! ```rust,ignore
//! use diorama::{App, World, WorldSettings};
//!
//! fn main() -> diorama::Result<()> {
//!     App::new(Box::new(|window| {
//!         let engine = MyEngine::for_window(window)?;
//!         Ok(World::new(Box::new(engine), Box::new(MyLoader::new()), WorldSettings::default()))
//!     }))
//!     .with_title("Showroom")
//!     .run()
//! }
//! ```

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::errors::Result;
use crate::world::World;

/// Builds a world for the window once the event loop hands one out.
/// Window creation is deferred to `resumed`, so so is world construction.
pub type WorldFactory = Box<dyn FnOnce(Arc<Window>) -> Result<World>>;

/// Per-frame hook, called with the frame's wall-clock delta before the
/// world advances.
pub type FrameFn = Box<dyn FnMut(&mut World, f32)>;

/// Configures and launches a windowed session.
pub struct App {
    title: String,
    factory: Option<WorldFactory>,
    frame_fn: Option<FrameFn>,
    window: Option<Arc<Window>>,
    world: Option<World>,
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new(factory: WorldFactory) -> Self {
        Self {
            title: "Diorama".into(),
            factory: Some(factory),
            frame_fn: None,
            window: None,
            world: None,
            last_frame: Instant::now(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Installs a hook that runs before each frame advance. This is where a
    /// host drives gameplay logic, starts tweens, or calls [`World::stop`].
    #[must_use]
    pub fn with_frame_fn(mut self, frame_fn: FrameFn) -> Self {
        self.frame_fn = Some(frame_fn);
        self
    }

    /// Runs the session. Blocks until the window closes.
    ///
    /// # Errors
    ///
    /// Returns an error if event loop creation or execution fails.
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(world) = &mut self.world else {
            return;
        };

        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if let Some(frame_fn) = &mut self.frame_fn {
            frame_fn(world, dt);
        }
        world.frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let Some(factory) = self.factory.take() else {
            return;
        };

        let mut world = match factory(window) {
            Ok(world) => world,
            Err(e) => {
                log::error!("World construction failed: {e}");
                event_loop.exit();
                return;
            }
        };

        if let Err(e) = world.create() {
            log::error!("Surface creation failed: {e}");
            event_loop.exit();
            return;
        }

        self.world = Some(world);
        self.last_frame = Instant::now();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(world) = &mut self.world {
                    world.stop();
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(world) = &mut self.world {
                    world.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(world) = &self.world
                    && !world.is_running()
                {
                    event_loop.exit();
                    return;
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.world.is_some()
            && let Some(window) = &self.window
        {
            window.request_redraw();
        }
    }
}
