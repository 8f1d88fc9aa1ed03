/// A named, time-bounded animation associated with a loaded model.
///
/// Keyframe tracks stay on the engine side of the fence; the coordination
/// layer only needs a clip's name and duration to drive playback clocks.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Clip length in seconds.
    pub duration: f32,
}

impl AnimationClip {
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}
