//! Frame clock — the per-display-frame callback source.
//!
//! The simulator arms the clock when geometry changes; the surface driving
//! the simulator pauses it once the mesh reports rest. Both operations are
//! idempotent.

use wobble_types::constants::DEFAULT_DT;
use wobble_types::Scalar;

/// Contract between the wobble engine and whatever delivers display frames.
pub trait FrameClock {
    /// Starts (or keeps) delivering frames.
    fn resume(&mut self);

    /// Stops delivering frames until the next `resume`.
    fn pause(&mut self);

    /// Returns true while no frames are delivered.
    fn is_paused(&self) -> bool;

    /// Delivers the next frame's interval in seconds, or `None` while
    /// paused.
    fn next_frame(&mut self) -> Option<Scalar>;
}

/// Deterministic in-process clock with a fixed frame interval.
///
/// Starts paused, like a display link that has not been armed yet.
#[derive(Debug, Clone)]
pub struct ManualFrameClock {
    interval: Scalar,
    paused: bool,
    frames_delivered: u64,
    resume_count: u32,
    pause_count: u32,
}

impl ManualFrameClock {
    /// Creates a paused clock ticking every `interval` seconds.
    pub fn new(interval: Scalar) -> Self {
        Self {
            interval,
            paused: true,
            frames_delivered: 0,
            resume_count: 0,
            pause_count: 0,
        }
    }

    /// Seconds between two frames.
    pub fn frame_interval(&self) -> Scalar {
        self.interval
    }

    /// Frames delivered so far.
    pub fn frames_delivered(&self) -> u64 {
        self.frames_delivered
    }

    /// Paused → running transitions so far.
    pub fn resume_count(&self) -> u32 {
        self.resume_count
    }

    /// Running → paused transitions so far.
    pub fn pause_count(&self) -> u32 {
        self.pause_count
    }
}

impl Default for ManualFrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_DT)
    }
}

impl FrameClock for ManualFrameClock {
    fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            self.resume_count += 1;
        }
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.pause_count += 1;
        }
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn next_frame(&mut self) -> Option<Scalar> {
        if self.paused {
            return None;
        }
        self.frames_delivered += 1;
        Some(self.interval)
    }
}
