//! Overhead tricep stretch - one hold timer per arm
//!
//! An arm is in position with the elbow raised above the shoulder, bent
//! behind the head, and the upper arm close to vertical. Losing the position
//! before the target resets that arm's timer; a completed hold is kept.

use super::kind::ExerciseKind;
use super::report::{Detail, FrameReport};
use super::workout::Tracker;
use crate::config::EngineConfig;
use crate::engine::{
    map_linear, BreakPolicy, HoldTimer, PoseFrame, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW,
    RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

struct ArmPosition {
    overhead: bool,
    bent: bool,
    correct: bool,
}

fn arm_position(pose: &PoseFrame, hip: usize, shoulder: usize, elbow: usize, wrist: usize) -> Option<ArmPosition> {
    let elbow_angle = pose.angle(shoulder, elbow, wrist)?;
    let shoulder_angle = pose.angle(hip, shoulder, elbow)?;
    let overhead = pose.y(elbow)? < pose.y(shoulder)?;
    let bent = elbow_angle < 90.0;
    Some(ArmPosition {
        overhead,
        bent,
        correct: overhead && bent && shoulder_angle > 150.0,
    })
}

/// Fraction of the target held, as percent and bar position
pub(crate) fn hold_progress(elapsed: f64, target: f64) -> (f32, f32) {
    let percent = if target > 0.0 {
        ((elapsed / target).min(1.0) * 100.0) as f32
    } else {
        100.0
    };
    (percent, map_linear(percent, (0.0, 100.0), (380.0, 50.0)))
}

pub struct TricepStretch {
    right: HoldTimer,
    left: HoldTimer,
    target: f64,
    feedback: &'static str,
}

impl TricepStretch {
    pub fn new(config: &EngineConfig) -> Self {
        let policy = BreakPolicy::Reset {
            keep_after_secs: config.stretch_target_secs,
        };
        Self {
            right: HoldTimer::new(policy),
            left: HoldTimer::new(policy),
            target: config.stretch_target_secs,
            feedback: "Raise Arm Overhead",
        }
    }
}

impl Tracker for TricepStretch {
    fn update(&mut self, pose: &PoseFrame, now: f64) -> Option<FrameReport> {
        let right = arm_position(pose, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
        let left = arm_position(pose, LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;

        self.right.update(right.correct, now);
        self.left.update(left.correct, now);

        self.feedback = match (right.correct, left.correct) {
            (true, true) => "Both Arms - Hold!",
            (true, false) => "Right Good - Do Left",
            (false, true) => "Left Good - Do Right",
            (false, false) if !(right.overhead || left.overhead) => "Raise Arm Overhead",
            (false, false) if !(right.bent || left.bent) => "Bend Elbow Behind Head",
            (false, false) => "Adjust Position",
        };

        let right_secs = self.right.elapsed();
        let left_secs = self.left.elapsed();
        let (percent, bar) = hold_progress(right_secs.max(left_secs), self.target);
        Some(FrameReport {
            exercise: ExerciseKind::TricepStretch,
            count: 0.0,
            direction: None,
            form: right.correct || left.correct,
            feedback: self.feedback,
            progress_percent: percent,
            progress_bar: bar,
            elapsed_secs: Some(right_secs.max(left_secs)),
            detail: Detail::TricepStretch {
                left_secs,
                right_secs,
                target_secs: self.target,
                left_complete: left_secs >= self.target,
                right_complete: right_secs >= self.target,
            },
        })
    }

    fn count(&self) -> f32 {
        0.0
    }

    fn elapsed(&self) -> Option<f64> {
        Some(self.right.elapsed().max(self.left.elapsed()))
    }

    fn reset(&mut self) {
        self.right.reset();
        self.left.reset();
        self.feedback = "Raise Arm Overhead";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::fixtures::{bend, bend_back};

    const RAISED: (f32, f32) = (170.0, 60.0);
    const DOWN: (f32, f32) = (20.0, 170.0);

    /// (shoulder angle, elbow angle) per arm
    fn arms(right: (f32, f32), left: (f32, f32)) -> PoseFrame {
        let pose = PoseFrame::new()
            .with(RIGHT_HIP, 300.0, 500.0)
            .with(RIGHT_SHOULDER, 300.0, 300.0)
            .with(LEFT_HIP, 400.0, 500.0)
            .with(LEFT_SHOULDER, 400.0, 300.0);
        let pose = bend(pose, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW, right.0, 80.0);
        let pose = bend(pose, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, right.1, 70.0);
        let pose = bend_back(pose, LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW, left.0, 80.0);
        bend_back(pose, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, left.1, 70.0)
    }

    fn stretch() -> TricepStretch {
        TricepStretch::new(&EngineConfig::default())
    }

    #[test]
    fn test_arm_position() {
        let pose = arms(RAISED, DOWN);
        let right = arm_position(&pose, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST).unwrap();
        assert!(right.correct);
        let left = arm_position(&pose, LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST).unwrap();
        assert!(!left.overhead);
        assert!(!left.correct);
    }

    #[test]
    fn test_feedback_per_arm() {
        let mut s = stretch();
        assert_eq!(s.update(&arms(DOWN, DOWN), 0.0).unwrap().feedback, "Raise Arm Overhead");
        assert_eq!(s.update(&arms(RAISED, DOWN), 0.1).unwrap().feedback, "Right Good - Do Left");
        assert_eq!(s.update(&arms(DOWN, RAISED), 0.2).unwrap().feedback, "Left Good - Do Right");
        assert_eq!(s.update(&arms(RAISED, RAISED), 0.3).unwrap().feedback, "Both Arms - Hold!");
        let straight_up = (170.0, 170.0);
        assert_eq!(s.update(&arms(straight_up, DOWN), 0.4).unwrap().feedback, "Bend Elbow Behind Head");
    }

    #[test]
    fn test_timers_are_independent() {
        let mut s = stretch();
        s.update(&arms(RAISED, DOWN), 0.0);
        let report = s.update(&arms(RAISED, DOWN), 12.0).unwrap();
        match report.detail {
            Detail::TricepStretch { right_secs, left_secs, .. } => {
                assert!((right_secs - 12.0).abs() < 1e-9);
                assert_eq!(left_secs, 0.0);
            }
            other => panic!("unexpected detail {:?}", other),
        }
        assert!((report.progress_percent - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_early_release_resets() {
        let mut s = stretch();
        s.update(&arms(RAISED, DOWN), 0.0);
        s.update(&arms(RAISED, DOWN), 10.0);
        let report = s.update(&arms(DOWN, DOWN), 10.5).unwrap();
        assert_eq!(report.elapsed_secs, Some(0.0));
    }

    #[test]
    fn test_completed_hold_is_kept() {
        let mut s = stretch();
        s.update(&arms(RAISED, DOWN), 0.0);
        s.update(&arms(RAISED, DOWN), 31.0);
        let report = s.update(&arms(DOWN, DOWN), 32.0).unwrap();
        assert_eq!(report.progress_percent, 100.0);
        assert!(matches!(report.detail, Detail::TricepStretch { right_complete: true, left_complete: false, .. }));
    }

    #[test]
    fn test_hold_progress_caps() {
        assert_eq!(hold_progress(45.0, 30.0), (100.0, 50.0));
        assert_eq!(hold_progress(0.0, 30.0), (0.0, 380.0));
    }
}
