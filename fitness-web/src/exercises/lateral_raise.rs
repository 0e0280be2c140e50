//! Lateral raise - mean shoulder abduction (hip-shoulder-elbow)

use super::kind::ExerciseKind;
use super::profile::{mean, ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER,
    LEFT_WRIST, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::LateralRaise,
    calibration: Calibration {
        domain: (45.0, 90.0),
        percent: (0.0, 100.0),
        bar: (380.0, 50.0),
        clamp: true,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::Above(90.0),
            message: "Lower Arms",
        },
        rest: Extreme {
            gate: PercentGate::Below(10.0),
            message: "Raise to Sides",
        },
        in_progress: "Good Form",
        upper_band: Some((50.0, "Control the Movement")),
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Arms at Sides",
    fix_form: "Keep Arms Straight",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right_arm = pose.angle(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
    let left_arm = pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;
    let right_shoulder = pose.angle(RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW)?;
    let left_shoulder = pose.angle(LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW)?;
    let shoulder = mean(right_shoulder, left_shoulder);

    Some(Reading {
        metric: shoulder,
        form_ok: right_arm > 160.0 && left_arm > 160.0,
        peak_guard: shoulder > 85.0,
        rest_guard: shoulder < 50.0,
        ..Reading::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::fixtures::{bend, bend_back, close};
    use crate::exercises::profile::RepCounter;

    fn raise(shoulder: f32, arm: f32) -> PoseFrame {
        let pose = PoseFrame::new()
            .with(RIGHT_HIP, 300.0, 500.0)
            .with(RIGHT_SHOULDER, 300.0, 300.0)
            .with(LEFT_HIP, 400.0, 500.0)
            .with(LEFT_SHOULDER, 400.0, 300.0);
        let pose = bend(pose, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW, shoulder, 100.0);
        let pose = bend(pose, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, arm, 100.0);
        let pose = bend_back(pose, LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW, shoulder, 100.0);
        bend_back(pose, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, arm, 100.0)
    }

    #[test]
    fn test_measure_abduction() {
        let reading = measure(&raise(70.0, 175.0)).unwrap();
        assert!(close(reading.metric, 70.0));
        assert!(reading.form_ok);
    }

    #[test]
    fn test_counts_raise_with_band_messages() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&raise(20.0, 175.0));
        assert_eq!(counter.session().feedback, "Raise to Sides");

        counter.step(&raise(60.0, 175.0));
        assert_eq!(counter.session().feedback, "Good Form");
        counter.step(&raise(75.0, 175.0));
        assert_eq!(counter.session().feedback, "Control the Movement");

        counter.step(&raise(88.0, 175.0));
        assert_eq!(counter.session().count(), 0.5);
        assert_eq!(counter.session().feedback, "Lower Arms");

        counter.step(&raise(20.0, 175.0));
        assert_eq!(counter.session().count(), 1.0);
    }

    #[test]
    fn test_bent_arms_never_start() {
        let mut counter = RepCounter::new(&PROFILE);
        for shoulder in [20.0, 88.0, 20.0] {
            counter.step(&raise(shoulder, 120.0));
        }
        assert_eq!(counter.session().count(), 0.0);
        assert_eq!(counter.session().feedback, "Keep Arms Straight");
    }
}
