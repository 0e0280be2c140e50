//! Native frame loop
//!
//! Pulls frames from a `PoseSource`, feeds them to a `Workout` and hands each
//! report to a `FrameSink`, one frame at a time on the calling thread. In the
//! browser the JS animation loop plays this role through the bridge.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{error, info};

use crate::engine::PoseFrame;
use crate::error::SourceError;
use crate::exercises::{FrameReport, SessionSummary, Workout};

#[derive(Clone, Debug, PartialEq)]
pub struct SourceFrame {
    /// Capture time in seconds from a monotonic clock
    pub timestamp_secs: f64,
    /// `None` when nobody is in view
    pub pose: Option<PoseFrame>,
}

pub trait PoseSource {
    /// Next captured frame, `Ok(None)` once the stream has ended
    fn next_frame(&mut self) -> Result<Option<SourceFrame>, SourceError>;
}

pub trait FrameSink {
    fn present(&mut self, report: &FrameReport);
}

impl<F: FnMut(&FrameReport)> FrameSink for F {
    fn present(&mut self, report: &FrameReport) {
        self(report)
    }
}

/// Plays back a recorded sequence of frames
#[derive(Default)]
pub struct ReplaySource {
    frames: VecDeque<SourceFrame>,
}

impl ReplaySource {
    pub fn new(frames: impl IntoIterator<Item = SourceFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PoseSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<SourceFrame>, SourceError> {
        Ok(self.frames.pop_front())
    }
}

/// Drive `workout` until the source ends or `exit` is raised
///
/// The flag is checked before every frame. Source errors end the loop and
/// are returned; the workout keeps whatever it counted so far.
pub fn run<S, K>(
    workout: &mut Workout,
    source: &mut S,
    sink: &mut K,
    exit: &AtomicBool,
) -> Result<SessionSummary, SourceError>
where
    S: PoseSource + ?Sized,
    K: FrameSink + ?Sized,
{
    let mut last_timestamp = 0.0;

    while !exit.load(Ordering::Relaxed) {
        let frame = match source.next_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!("pose source finished");
                break;
            }
            Err(e) => {
                error!("pose source failed: {}", e);
                return Err(e);
            }
        };

        last_timestamp = frame.timestamp_secs;
        if let Some(report) = workout.update(frame.pose.as_ref(), frame.timestamp_secs) {
            sink.present(&report);
        }
    }

    Ok(workout.summary(last_timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::exercises::ExerciseKind;
    use crate::engine::{LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST};

    /// Side-view push-up frame with straight hips
    fn push_up(elbow_deg: f32) -> PoseFrame {
        let shoulder = (300.0_f32, 200.0_f32);
        let elbow_dir = 70.0_f32.to_radians();
        let elbow = (shoulder.0 + 80.0 * elbow_dir.cos(), shoulder.1 + 80.0 * elbow_dir.sin());
        // ray elbow -> shoulder points at 250 degrees
        let wrist_dir = (250.0 + elbow_deg).to_radians();
        let wrist = (elbow.0 + 80.0 * wrist_dir.cos(), elbow.1 + 80.0 * wrist_dir.sin());
        PoseFrame::new()
            .with(LEFT_SHOULDER, shoulder.0, shoulder.1)
            .with(LEFT_HIP, 500.0, 200.0)
            .with(LEFT_KNEE, 650.0, 200.0)
            .with(LEFT_ELBOW, elbow.0, elbow.1)
            .with(LEFT_WRIST, wrist.0, wrist.1)
    }

    fn frames(elbows: &[f32]) -> Vec<SourceFrame> {
        elbows
            .iter()
            .enumerate()
            .map(|(i, &e)| SourceFrame {
                timestamp_secs: i as f64,
                pose: Some(push_up(e)),
            })
            .collect()
    }

    struct FailingSource {
        inner: ReplaySource,
    }

    impl PoseSource for FailingSource {
        fn next_frame(&mut self) -> Result<Option<SourceFrame>, SourceError> {
            match self.inner.next_frame()? {
                Some(frame) => Ok(Some(frame)),
                None => Err(SourceError::Disconnected),
            }
        }
    }

    #[test]
    fn test_runs_to_end_of_stream() {
        let mut workout = Workout::new(ExerciseKind::PushUp, &EngineConfig::default());
        let mut source = ReplaySource::new(frames(&[170.0, 170.0, 85.0, 85.0, 170.0]));
        let mut seen = Vec::new();
        let mut sink = |r: &FrameReport| seen.push(r.count);
        let exit = AtomicBool::new(false);

        let summary = run(&mut workout, &mut source, &mut sink, &exit).unwrap();
        assert_eq!(seen, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
        assert_eq!(summary.count, 1.0);
        assert!((summary.duration_secs - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_person_frames_are_not_presented() {
        let mut workout = Workout::new(ExerciseKind::PushUp, &EngineConfig::default());
        let mut all = frames(&[170.0, 85.0]);
        all.insert(
            1,
            SourceFrame {
                timestamp_secs: 0.5,
                pose: None,
            },
        );
        let mut source = ReplaySource::new(all);
        let mut presented = 0;
        let mut sink = |_: &FrameReport| presented += 1;
        let summary = run(&mut workout, &mut source, &mut sink, &AtomicBool::new(false)).unwrap();
        assert_eq!(presented, 2);
        assert_eq!(summary.count, 0.5);
    }

    #[test]
    fn test_exit_flag_stops_before_reading() {
        let mut workout = Workout::new(ExerciseKind::PushUp, &EngineConfig::default());
        let mut source = ReplaySource::new(frames(&[170.0, 85.0]));
        let exit = AtomicBool::new(true);
        let summary = run(&mut workout, &mut source, &mut |_: &FrameReport| {}, &exit).unwrap();
        assert_eq!(source.remaining(), 2);
        assert_eq!(summary.count, 0.0);
    }

    #[test]
    fn test_source_error_is_returned() {
        let mut workout = Workout::new(ExerciseKind::PushUp, &EngineConfig::default());
        let mut source = FailingSource {
            inner: ReplaySource::new(frames(&[170.0, 85.0])),
        };
        let err = run(&mut workout, &mut source, &mut |_: &FrameReport| {}, &AtomicBool::new(false)).unwrap_err();
        assert_eq!(err, SourceError::Disconnected);
        // progress made before the failure is kept
        assert_eq!(workout.count(), 0.5);
    }
}
