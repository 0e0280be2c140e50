//! Push-up - left elbow angle, side view
//!
//! Form needs straight arms, a shoulder opened away from the torso and a
//! straight hip line. A bottom position reached with sagging hips shows
//! "Fix Form" and does not count.

use super::kind::ExerciseKind;
use super::profile::{ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE,
    LEFT_SHOULDER, LEFT_WRIST,
};

const ARMS_STRAIGHT: f32 = 160.0;
const ARMS_BENT: f32 = 90.0;
const SHOULDER_OPEN: f32 = 40.0;
const HIPS_STRAIGHT: f32 = 160.0;

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::PushUp,
    calibration: Calibration {
        domain: (90.0, 160.0),
        percent: (0.0, 100.0),
        bar: (380.0, 50.0),
        clamp: true,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::AtMost(0.0),
            message: "Push Up",
        },
        rest: Extreme {
            gate: PercentGate::AtLeast(100.0),
            message: "Lower Down",
        },
        in_progress: "Good Form",
        upper_band: None,
        guard_failed: Some("Fix Form"),
    },
    form: FormMode::Latching,
    initial_feedback: "Get Ready",
    fix_form: "Straighten Arms & Back",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let elbow = pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;
    let shoulder = pose.angle(LEFT_ELBOW, LEFT_SHOULDER, LEFT_HIP)?;
    let hip = pose.angle(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE)?;

    let plank_ready = elbow > ARMS_STRAIGHT && shoulder > SHOULDER_OPEN && hip > HIPS_STRAIGHT;
    Some(Reading {
        metric: elbow,
        form_ok: plank_ready,
        peak_guard: elbow <= ARMS_BENT && hip > HIPS_STRAIGHT,
        rest_guard: plank_ready,
        ..Reading::default()
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::engine::Direction;
    use crate::exercises::fixtures::{bend, close, without};
    use crate::exercises::profile::RepCounter;

    pub(crate) fn side_view(elbow: f32, hip: f32) -> PoseFrame {
        let pose = PoseFrame::new()
            .with(LEFT_SHOULDER, 300.0, 200.0)
            .with(LEFT_HIP, 500.0, 200.0);
        let pose = bend(pose, LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE, hip, 150.0);
        let pose = bend(pose, LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW, 70.0, 80.0);
        bend(pose, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, elbow, 80.0)
    }

    pub(crate) fn arms(elbow: f32) -> PoseFrame {
        side_view(elbow, 175.0)
    }

    #[test]
    fn test_measure_reads_three_joints() {
        let reading = measure(&side_view(120.0, 175.0)).unwrap();
        assert!(close(reading.metric, 120.0));
        assert!(!reading.form_ok);
        assert!(!reading.peak_guard);
    }

    #[test]
    fn test_elbow_trace_counts_one_rep() {
        let mut counter = RepCounter::new(&PROFILE);
        let expected = [(0.0, "Lower Down"), (0.0, "Lower Down"), (0.5, "Push Up"), (0.5, "Push Up"), (1.0, "Lower Down")];
        for (i, (elbow, (count, feedback))) in [170.0, 170.0, 85.0, 85.0, 170.0].into_iter().zip(expected).enumerate() {
            counter.step(&arms(elbow));
            assert!(counter.session().form, "frame {}", i);
            assert_eq!(counter.session().count(), count, "frame {}", i);
            assert_eq!(counter.session().feedback, feedback, "frame {}", i);
        }
        assert_eq!(counter.session().direction, Direction::Down);
    }

    #[test]
    fn test_sagging_hips_block_the_rep() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&arms(170.0));
        counter.step(&side_view(85.0, 140.0));
        assert_eq!(counter.session().count(), 0.0);
        assert_eq!(counter.session().feedback, "Fix Form");
    }

    #[test]
    fn test_waits_for_plank() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&side_view(170.0, 140.0));
        assert!(!counter.session().form);
        assert_eq!(counter.session().feedback, "Straighten Arms & Back");
        counter.step(&arms(85.0));
        assert_eq!(counter.session().count(), 0.0);
    }

    #[test]
    fn test_bar_follows_elbow() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&arms(125.0));
        assert!((counter.progress().percent - 50.0).abs() < 0.1);
        assert!((counter.progress().bar - 215.0).abs() < 0.5);
    }

    #[test]
    fn test_missing_wrist_skips_frame() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&arms(170.0));
        assert!(counter.step(&without(&arms(85.0), LEFT_WRIST)).is_none());
        assert_eq!(counter.session().direction, Direction::Down);
        assert_eq!(counter.session().feedback, "Lower Down");
    }
}
