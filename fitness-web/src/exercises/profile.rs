//! Declarative exercise profiles and the counter that runs them
//!
//! A profile is data: how to measure the pose, how to calibrate the
//! readout, and which gates mark the two extremes. `RepCounter` wires a
//! profile to a `FormValidator` and a `RepetitionStateMachine`.

use super::kind::ExerciseKind;
use super::report::{Detail, FrameReport};
use super::workout::Tracker;
use crate::engine::{
    Calibration, ExerciseSession, FormMode, FormValidator, Observation, PoseFrame, Progress, RepRules,
    RepetitionStateMachine, Transition,
};

/// What one frame says about the exercise
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reading {
    /// Raw metric fed to the calibration (an angle or a pixel offset)
    pub metric: f32,
    /// Form predicate for the validator
    pub form_ok: bool,
    pub peak_guard: bool,
    pub rest_guard: bool,
    /// Overrides the profile's fix message while form is not established
    pub fix_hint: Option<&'static str>,
    /// Overrides the in-progress message between the extremes
    pub hint: Option<&'static str>,
}

pub struct ExerciseProfile {
    pub kind: ExerciseKind,
    pub calibration: Calibration,
    pub rules: RepRules,
    pub form: FormMode,
    pub initial_feedback: &'static str,
    pub fix_form: &'static str,
    /// `None` when a landmark the exercise needs is missing
    pub measure: fn(&PoseFrame) -> Option<Reading>,
}

pub struct RepCounter {
    profile: &'static ExerciseProfile,
    validator: FormValidator,
    machine: RepetitionStateMachine,
    progress: Progress,
}

impl RepCounter {
    pub fn new(profile: &'static ExerciseProfile) -> Self {
        Self {
            profile,
            validator: FormValidator::new(profile.form),
            machine: RepetitionStateMachine::new(profile.rules, profile.initial_feedback),
            progress: Progress::default(),
        }
    }

    pub fn profile(&self) -> &'static ExerciseProfile {
        self.profile
    }

    pub fn session(&self) -> &ExerciseSession {
        self.machine.session()
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Run one frame through validator and state machine
    ///
    /// Returns `None` and changes nothing when the measurement fails.
    pub fn step(&mut self, pose: &PoseFrame) -> Option<Transition> {
        let reading = (self.profile.measure)(pose)?;
        self.progress = self.profile.calibration.progress(reading.metric);

        let form_ok = self.validator.observe(reading.form_ok);
        let fix = reading.fix_hint.unwrap_or(self.profile.fix_form);
        let obs = Observation {
            percent: self.progress.percent,
            peak_guard: reading.peak_guard,
            rest_guard: reading.rest_guard,
            hint: reading.hint,
        };
        Some(self.machine.advance(form_ok, fix, &obs))
    }

    fn report(&self) -> FrameReport {
        let session = self.machine.session();
        FrameReport {
            exercise: self.profile.kind,
            count: session.count(),
            direction: Some(session.direction),
            form: session.form,
            feedback: session.feedback,
            progress_percent: self.progress.percent,
            progress_bar: self.progress.bar,
            elapsed_secs: None,
            detail: Detail::Reps,
        }
    }
}

impl Tracker for RepCounter {
    fn update(&mut self, pose: &PoseFrame, _now: f64) -> Option<FrameReport> {
        self.step(pose)?;
        Some(self.report())
    }

    fn count(&self) -> f32 {
        self.machine.session().count()
    }

    fn elapsed(&self) -> Option<f64> {
        None
    }

    fn reset(&mut self) {
        self.validator.reset();
        self.machine.reset();
        self.progress = Progress::default();
    }
}

/// Mean of two joint readings
pub(crate) fn mean(a: f32, b: f32) -> f32 {
    (a + b) / 2.0
}
