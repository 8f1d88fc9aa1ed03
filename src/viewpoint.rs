use glam::Vec3;

/// A named, fixed camera position the host application can jump or animate
/// to.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    pub title: String,
    pub position: Vec3,
}

impl Viewpoint {
    #[must_use]
    pub fn new(title: impl Into<String>, position: Vec3) -> Self {
        Self {
            title: title.into(),
            position,
        }
    }
}

/// Outcome of an instant viewpoint change. A miss is not an error; callers
/// branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ViewpointOutcome {
    Applied,
    /// No viewpoint matched the title; the camera was left untouched.
    NotFound,
}

/// Viewpoint table with case-insensitive title lookup.
#[derive(Debug, Clone, Default)]
pub struct ViewpointTable {
    viewpoints: Vec<Viewpoint>,
}

impl ViewpointTable {
    /// Replaces the whole table; there is no merging.
    pub fn replace(&mut self, viewpoints: Vec<Viewpoint>) {
        self.viewpoints = viewpoints;
    }

    /// First viewpoint whose title matches, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, title: &str) -> Option<&Viewpoint> {
        self.viewpoints
            .iter()
            .find(|v| v.title.eq_ignore_ascii_case(title))
    }

    #[must_use]
    pub fn viewpoints(&self) -> &[Viewpoint] {
        &self.viewpoints
    }
}
