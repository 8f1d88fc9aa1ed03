//! Time-based camera position interpolation.
//!
//! A tween captures the camera position at start time and writes one sample
//! per render-loop frame until the interpolation parameter reaches 1.0.
//! Overlapping tweens are allowed: every active tween writes each frame in
//! start order, so the most recently started one wins the frame. That
//! overlap is part of the observable contract, not an accident to guard
//! against.

use futures::channel::oneshot;
use glam::Vec3;

/// Easing curve applied to the normalized tween parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Slow start
    CubicIn,
    /// Slow end
    CubicOut,
    /// Slow start and end
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps a parameter in `[0, 1]` through the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Completion signal for a started tween. Resolves exactly once, when the
/// interpolation parameter reaches 1.0.
#[derive(Debug)]
pub struct TweenTicket {
    rx: oneshot::Receiver<()>,
}

impl TweenTicket {
    /// Waits for the tween to finish. Also returns if the world is dropped
    /// mid-flight.
    pub async fn finished(self) {
        let _ = self.rx.await;
    }

    /// Non-blocking completion probe.
    pub fn try_finished(&mut self) -> bool {
        matches!(self.rx.try_recv(), Ok(Some(())))
    }
}

/// Outcome of starting a viewpoint tween. Misses and no-ops are outcomes,
/// not errors.
#[derive(Debug)]
#[must_use]
pub enum TweenOutcome {
    /// Interpolation started; the ticket resolves on completion.
    Started(TweenTicket),
    /// The camera was already exactly at the target: no interpolation was
    /// started and zero position writes will occur.
    Skipped,
    /// No viewpoint matched the title; nothing was started.
    NotFound,
}

impl TweenOutcome {
    /// The completion ticket, if a tween actually started.
    pub fn started(self) -> Option<TweenTicket> {
        match self {
            Self::Started(ticket) => Some(ticket),
            Self::Skipped | Self::NotFound => None,
        }
    }
}

/// In-flight interpolation of the camera position toward a target.
pub(crate) struct CameraTween {
    from: Vec3,
    to: Vec3,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    done_tx: Option<oneshot::Sender<()>>,
    finished: bool,
}

impl CameraTween {
    pub(crate) fn new(
        from: Vec3,
        to: Vec3,
        duration_seconds: f32,
        easing: Easing,
    ) -> (Self, TweenTicket) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                from,
                to,
                duration: duration_seconds,
                elapsed: 0.0,
                easing,
                done_tx: Some(tx),
                finished: false,
            },
            TweenTicket { rx },
        )
    }

    /// Advances by `dt` seconds and returns the camera position to write
    /// this frame. The completing sample lands exactly on the target and
    /// fires the ticket.
    pub(crate) fn step(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt;
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };

        if t >= 1.0 {
            self.finished = true;
            if let Some(tx) = self.done_tx.take() {
                let _ = tx.send(());
            }
            return self.to;
        }

        self.from.lerp(self.to, self.easing.apply(t))
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }
}
