//! Plank hold
//!
//! Forearm plank when the elbows are bent below 120 degrees, high plank
//! otherwise. The hold timer tolerates a few bad frames before it stops, and
//! resumes from the frozen value once form returns.

use serde::Serialize;

use super::kind::ExerciseKind;
use super::profile::mean;
use super::report::{Detail, FrameReport};
use super::workout::Tracker;
use crate::config::EngineConfig;
use crate::engine::{
    BreakPolicy, Calibration, FormValidator, HoldTimer, PoseFrame, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE,
    LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};

const FOREARM_MAX_ELBOW: f32 = 120.0;
const STRAIGHT: f32 = 160.0;

/// Two minutes fills the bar
const PROGRESS: Calibration = Calibration {
    domain: (0.0, 120.0),
    percent: (0.0, 100.0),
    bar: (380.0, 50.0),
    clamp: true,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlankVariant {
    Forearm,
    High,
}

pub fn milestone(elapsed_secs: f64) -> Option<&'static str> {
    if elapsed_secs >= 120.0 {
        Some("Elite! 2+ min")
    } else if elapsed_secs >= 60.0 {
        Some("Great! 1+ min")
    } else if elapsed_secs >= 30.0 {
        Some("Good! 30+ sec")
    } else {
        None
    }
}

pub struct Plank {
    timer: HoldTimer,
    validator: FormValidator,
    max_breaks: u32,
    variant: PlankVariant,
    feedback: &'static str,
}

impl Plank {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            timer: HoldTimer::new(BreakPolicy::Tolerate {
                max_breaks: config.plank_max_form_breaks,
            }),
            validator: FormValidator::per_frame(),
            max_breaks: config.plank_max_form_breaks,
            variant: PlankVariant::Forearm,
            feedback: "Get Ready",
        }
    }

    fn timer_stopped(&self) -> bool {
        !self.timer.is_running() && self.timer.form_breaks() >= self.max_breaks
    }
}

impl Tracker for Plank {
    fn update(&mut self, pose: &PoseFrame, now: f64) -> Option<FrameReport> {
        let body = pose.angle(LEFT_SHOULDER, LEFT_HIP, LEFT_ANKLE)?;
        let hip = pose.angle(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE)?;
        let elbow = mean(
            pose.angle(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?,
            pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?,
        );

        self.variant = if elbow < FOREARM_MAX_ELBOW {
            PlankVariant::Forearm
        } else {
            PlankVariant::High
        };
        let arms_ok = self.variant == PlankVariant::Forearm || elbow > STRAIGHT;
        let aligned = body >= STRAIGHT && hip >= STRAIGHT;

        let form = self.validator.observe(aligned && arms_ok);
        self.timer.update(form, now);

        self.feedback = if form {
            "Good Form - Hold!"
        } else if self.timer_stopped() {
            "Form Break - Timer Stopped"
        } else if body < STRAIGHT {
            "Hips Too Low"
        } else if hip < STRAIGHT {
            "Hips Too High"
        } else if !arms_ok {
            "Straighten Arms"
        } else {
            self.feedback
        };

        let elapsed = self.timer.elapsed();
        let progress = PROGRESS.progress(elapsed as f32);
        Some(FrameReport {
            exercise: ExerciseKind::Plank,
            count: 0.0,
            direction: None,
            form,
            feedback: self.feedback,
            progress_percent: progress.percent,
            progress_bar: progress.bar,
            elapsed_secs: Some(elapsed),
            detail: Detail::Plank {
                variant: self.variant,
                form_breaks: self.timer.form_breaks(),
                running: self.timer.is_running(),
                milestone: milestone(elapsed),
            },
        })
    }

    fn count(&self) -> f32 {
        0.0
    }

    fn elapsed(&self) -> Option<f64> {
        Some(self.timer.elapsed())
    }

    fn reset(&mut self) {
        self.timer.reset();
        self.validator.reset();
        self.variant = PlankVariant::Forearm;
        self.feedback = "Get Ready";
    }
}
