//! Lunge - front knee angle
//!
//! The front leg is whichever knee sits lower in the image (larger y).

use super::kind::ExerciseKind;
use super::profile::{ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE,
    LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};

const UPRIGHT: f32 = 160.0;
const DEPTH: f32 = 100.0;
const BACK_KNEE_LOW: f32 = 100.0;

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::Lunge,
    calibration: Calibration {
        domain: (80.0, 170.0),
        percent: (100.0, 0.0),
        bar: (50.0, 380.0),
        clamp: true,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::Above(90.0),
            message: "Push Up",
        },
        rest: Extreme {
            gate: PercentGate::Below(10.0),
            message: "Lunge Down",
        },
        in_progress: "Good Form",
        upper_band: None,
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Stand Upright",
    fix_form: "Stand Straight",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right_knee = pose.angle(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE)?;
    let left_knee = pose.angle(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE)?;
    let right_hip = pose.angle(RIGHT_SHOULDER, RIGHT_HIP, RIGHT_KNEE)?;
    let left_hip = pose.angle(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE)?;

    let right_in_front = pose.y(RIGHT_KNEE)? > pose.y(LEFT_KNEE)?;
    let (front, back, stance_hip) = if right_in_front {
        (right_knee, left_knee, right_hip)
    } else {
        (left_knee, right_knee, left_hip)
    };

    Some(Reading {
        metric: front,
        form_ok: front > UPRIGHT && stance_hip > UPRIGHT,
        peak_guard: front < DEPTH,
        rest_guard: front > UPRIGHT,
        hint: (back < BACK_KNEE_LOW).then_some("Lower Back Knee"),
        ..Reading::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exercises::fixtures::{bend, bend_back, close};
    use crate::exercises::profile::RepCounter;

    /// Right leg forward
    fn stance(front: f32, back: f32) -> PoseFrame {
        let pose = PoseFrame::new()
            .with(RIGHT_HIP, 300.0, 200.0)
            .with(RIGHT_KNEE, 300.0, 300.0)
            .with(LEFT_HIP, 350.0, 200.0)
            .with(LEFT_KNEE, 350.0, 280.0);
        let pose = bend(pose, RIGHT_KNEE, RIGHT_HIP, RIGHT_SHOULDER, 175.0, 200.0);
        let pose = bend(pose, LEFT_KNEE, LEFT_HIP, LEFT_SHOULDER, 175.0, 200.0);
        let pose = bend(pose, RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, front, 100.0);
        bend_back(pose, LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, back, 100.0)
    }

    #[test]
    fn test_front_leg_is_lower_knee() {
        let reading = measure(&stance(120.0, 170.0)).unwrap();
        assert!(close(reading.metric, 120.0));
    }

    #[test]
    fn test_counts_lunge() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&stance(175.0, 175.0));
        assert_eq!(counter.session().feedback, "Lunge Down");

        counter.step(&stance(130.0, 140.0));
        assert_eq!(counter.session().feedback, "Good Form");
        counter.step(&stance(130.0, 95.0));
        assert_eq!(counter.session().feedback, "Lower Back Knee");

        counter.step(&stance(85.0, 90.0));
        assert_eq!(counter.session().count(), 0.5);
        assert_eq!(counter.session().feedback, "Push Up");

        counter.step(&stance(175.0, 175.0));
        assert_eq!(counter.session().count(), 1.0);
    }

    #[test]
    fn test_shallow_lunge_does_not_count() {
        let mut counter = RepCounter::new(&PROFILE);
        counter.step(&stance(175.0, 175.0));
        counter.step(&stance(105.0, 120.0));
        assert_eq!(counter.session().count(), 0.0);
    }
}
