//! Cooperative per-frame driving.
//!
//! The host calls back once per display refresh; a component keeps running by
//! asking for another frame and stops by not asking. Nothing here blocks or
//! spawns threads.

use crate::foundation::core::{Fps, FrameIndex};

/// Whether a component wants another frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FrameRequest {
    Continue,
    Stop,
}

/// A component driven by the host's per-frame callback.
pub trait FrameDriven {
    /// Called once per frame with the host clock in seconds.
    fn on_frame(&mut self, now_secs: f64) -> FrameRequest;

    /// Called once when the component is unmounted (no more frames will come).
    fn on_unmount(&mut self) {}
}

/// Summary of a [`FrameLoop::run`] invocation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameLoopReport {
    /// Number of `on_frame` calls made.
    pub frames: u64,
    /// Clock value passed to the last `on_frame` call.
    pub last_secs: f64,
    /// `true` when the component asked to stop before the frame budget ran out.
    pub stopped_by_component: bool,
}

/// Deterministic stand-in for the host's frame scheduler.
#[derive(Clone, Copy, Debug)]
pub struct FrameLoop {
    pub fps: Fps,
    /// Clock value of frame 0.
    pub start_secs: f64,
}

impl FrameLoop {
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            start_secs: 0.0,
        }
    }

    pub fn secs_at(&self, frame: FrameIndex) -> f64 {
        self.start_secs + self.fps.frames_to_secs(frame.0)
    }

    /// Drive `component` for at most `max_frames` frames, then unmount it.
    #[tracing::instrument(skip(self, component))]
    pub fn run<D: FrameDriven + ?Sized>(&self, component: &mut D, max_frames: u64) -> FrameLoopReport {
        let mut report = FrameLoopReport {
            frames: 0,
            last_secs: self.start_secs,
            stopped_by_component: false,
        };
        for f in 0..max_frames {
            let now = self.secs_at(FrameIndex(f));
            report.frames += 1;
            report.last_secs = now;
            if component.on_frame(now) == FrameRequest::Stop {
                report.stopped_by_component = true;
                break;
            }
        }
        component.on_unmount();
        tracing::debug!(frames = report.frames, "frame loop finished");
        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/frame.rs"]
mod tests;
