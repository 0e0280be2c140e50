//! One exercise session of any kind
//!
//! `Workout` owns the tracker for the chosen exercise and applies the
//! skip-frame policy: no pose, or a pose missing a landmark the exercise
//! needs, leaves every piece of state untouched.

use log::{debug, info};

use super::arm_circles::ArmCircles;
use super::chest_stretch::ChestStretch;
use super::kind::ExerciseKind;
use super::plank::Plank;
use super::profile::RepCounter;
use super::report::{FrameReport, SessionSummary};
use super::tricep_stretch::TricepStretch;
use super::{bicep_curl, jumping_jack, lateral_raise, lunge, push_up, shoulder_press, squat, tricep_dip};
use crate::config::EngineConfig;
use crate::engine::PoseFrame;

/// Per-exercise frame processing
pub trait Tracker {
    /// Process one frame; `None` when the pose lacks a needed landmark
    fn update(&mut self, pose: &PoseFrame, now: f64) -> Option<FrameReport>;
    fn count(&self) -> f32;
    /// Seconds held, for hold exercises
    fn elapsed(&self) -> Option<f64>;
    fn reset(&mut self);
}

fn tracker_for(kind: ExerciseKind, config: &EngineConfig) -> Box<dyn Tracker> {
    match kind {
        ExerciseKind::Squat => Box::new(RepCounter::new(&squat::PROFILE)),
        ExerciseKind::PushUp => Box::new(RepCounter::new(&push_up::PROFILE)),
        ExerciseKind::Lunge => Box::new(RepCounter::new(&lunge::PROFILE)),
        ExerciseKind::BicepCurl => Box::new(RepCounter::new(&bicep_curl::PROFILE)),
        ExerciseKind::ShoulderPress => Box::new(RepCounter::new(&shoulder_press::PROFILE)),
        ExerciseKind::LateralRaise => Box::new(RepCounter::new(&lateral_raise::PROFILE)),
        ExerciseKind::TricepDip => Box::new(RepCounter::new(&tricep_dip::PROFILE)),
        ExerciseKind::JumpingJack => Box::new(RepCounter::new(&jumping_jack::PROFILE)),
        ExerciseKind::ArmCircles => Box::new(ArmCircles::new(config)),
        ExerciseKind::Plank => Box::new(Plank::new(config)),
        ExerciseKind::TricepStretch => Box::new(TricepStretch::new(config)),
        ExerciseKind::ChestStretch => Box::new(ChestStretch::new(config)),
    }
}

pub struct Workout {
    kind: ExerciseKind,
    tracker: Box<dyn Tracker>,
    /// Timestamp of the first frame seen
    started_at: Option<f64>,
    last_report: Option<FrameReport>,
}

impl Workout {
    pub fn new(kind: ExerciseKind, config: &EngineConfig) -> Self {
        info!("starting {} session", kind);
        Self {
            kind,
            tracker: tracker_for(kind, config),
            started_at: None,
            last_report: None,
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    /// Feed one frame captured at `now` (seconds, monotonic)
    pub fn update(&mut self, pose: Option<&PoseFrame>, now: f64) -> Option<FrameReport> {
        self.started_at.get_or_insert(now);

        let Some(pose) = pose else {
            debug!("no person in frame, skipped");
            return None;
        };
        let Some(report) = self.tracker.update(pose, now) else {
            debug!("{}: landmarks missing, frame skipped", self.kind);
            return None;
        };

        self.last_report = Some(report.clone());
        Some(report)
    }

    /// Most recent report, if any frame has been processed
    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }

    pub fn count(&self) -> f32 {
        self.tracker.count()
    }

    pub fn summary(&self, now: f64) -> SessionSummary {
        let duration = self.started_at.map(|start| (now - start).max(0.0)).unwrap_or(0.0);
        SessionSummary::new(self.kind, self.tracker.count(), self.tracker.elapsed(), duration)
    }

    /// End the session
    pub fn finish(self, now: f64) -> SessionSummary {
        let summary = self.summary(now);
        info!(
            "{} session ended: count {}, {:.1}s",
            self.kind, summary.count, summary.duration_secs
        );
        summary
    }

    pub fn reset(&mut self) {
        self.tracker.reset();
        self.started_at = None;
        self.last_report = None;
        info!("{} session reset", self.kind);
    }
}
