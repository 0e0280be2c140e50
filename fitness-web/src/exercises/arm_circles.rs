//! Arm circles - one circular tracker per arm
//!
//! Each arm's heading is the direction from shoulder to wrist. A half
//! repetition is counted whenever an extended arm reverses its rotation.

use super::kind::ExerciseKind;
use super::profile::mean;
use super::report::{Detail, FrameReport};
use super::workout::Tracker;
use crate::config::EngineConfig;
use crate::engine::{map_linear, CircleTracker, PoseFrame, LEFT_SHOULDER, LEFT_WRIST, RIGHT_SHOULDER, RIGHT_WRIST};

const BAR: (f32, f32) = (380.0, 50.0);

pub struct ArmCircles {
    right: CircleTracker,
    left: CircleTracker,
    feedback: &'static str,
}

impl ArmCircles {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            right: CircleTracker::new(config.circle_min_extension_px, config.circle_min_step_deg),
            left: CircleTracker::new(config.circle_min_extension_px, config.circle_min_step_deg),
            feedback: "Extend Arms to Sides",
        }
    }

    pub fn right(&self) -> &CircleTracker {
        &self.right
    }

    pub fn left(&self) -> &CircleTracker {
        &self.left
    }
}

impl Tracker for ArmCircles {
    fn update(&mut self, pose: &PoseFrame, _now: f64) -> Option<FrameReport> {
        let right_heading = pose.heading(RIGHT_SHOULDER, RIGHT_WRIST)?;
        let right_extension = pose.distance(RIGHT_SHOULDER, RIGHT_WRIST)?;
        let left_heading = pose.heading(LEFT_SHOULDER, LEFT_WRIST)?;
        let left_extension = pose.distance(LEFT_SHOULDER, LEFT_WRIST)?;

        self.right.update(right_heading, right_extension);
        self.left.update(left_heading, left_extension);

        let right_extended = self.right.is_extended(right_extension);
        let left_extended = self.left.is_extended(left_extension);
        self.feedback = match (right_extended, left_extended) {
            (true, true) => "Good! Keep Circling",
            (false, false) => "Extend Both Arms",
            (false, true) => "Extend Right Arm",
            (true, false) => "Extend Left Arm",
        };

        let extension = mean(right_extension, left_extension);
        let full = (0.0, self.right.min_extension());
        Some(FrameReport {
            exercise: ExerciseKind::ArmCircles,
            count: self.count(),
            direction: None,
            form: right_extended && left_extended,
            feedback: self.feedback,
            progress_percent: map_linear(extension, full, (0.0, 100.0)),
            progress_bar: map_linear(extension, full, BAR),
            elapsed_secs: None,
            detail: Detail::Circles {
                left: self.left.count(),
                right: self.right.count(),
                left_rotation: self.left.rotation(),
                right_rotation: self.right.rotation(),
                left_extended,
                right_extended,
            },
        })
    }

    fn count(&self) -> f32 {
        self.right.count() + self.left.count()
    }

    fn elapsed(&self) -> Option<f64> {
        None
    }

    fn reset(&mut self) {
        self.right.reset();
        self.left.reset();
        self.feedback = "Extend Arms to Sides";
    }
}
