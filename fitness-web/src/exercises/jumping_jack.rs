//! Jumping jack - positional extremes
//!
//! Both extremes are recognised from the pose itself (arms up with feet
//! apart, arms down with feet together); the percentage only drives the
//! bar. Form latches as soon as either extreme is seen.

use super::kind::ExerciseKind;
use super::profile::{mean, ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP,
    LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Ankle gap relative to hip width that counts as feet apart
const FEET_APART_RATIO: f32 = 1.5;

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::JumpingJack,
    calibration: Calibration {
        domain: (-50.0, 150.0),
        percent: (0.0, 100.0),
        bar: (380.0, 50.0),
        clamp: true,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::Any,
            message: "Good! Arms Down",
        },
        rest: Extreme {
            gate: PercentGate::Any,
            message: "Jump! Arms Up",
        },
        in_progress: "Keep Going",
        upper_band: None,
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Stand with Arms Down",
    fix_form: "Stand with Arms Down",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right_arm = pose.angle(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
    let left_arm = pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;

    let shoulder_y = mean(pose.y(RIGHT_SHOULDER)?, pose.y(LEFT_SHOULDER)?);
    let right_wrist_y = pose.y(RIGHT_WRIST)?;
    let left_wrist_y = pose.y(LEFT_WRIST)?;
    let hip_width = (pose.x(RIGHT_HIP)? - pose.x(LEFT_HIP)?).abs();
    let ankle_gap = (pose.x(RIGHT_ANKLE)? - pose.x(LEFT_ANKLE)?).abs();

    let arms_up = right_wrist_y < shoulder_y && left_wrist_y < shoulder_y;
    let feet_apart = ankle_gap > hip_width * FEET_APART_RATIO;
    let straight = right_arm > 160.0 && left_arm > 160.0;

    let open = arms_up && feet_apart && straight;
    let closed = !arms_up && !feet_apart;

    let hint = if arms_up && !feet_apart {
        Some("Spread Feet")
    } else if feet_apart && !arms_up {
        Some("Raise Arms")
    } else if !straight {
        Some("Straighten Arms")
    } else {
        None
    };

    Some(Reading {
        metric: shoulder_y - mean(right_wrist_y, left_wrist_y),
        form_ok: open || closed,
        peak_guard: open,
        rest_guard: closed,
        fix_hint: hint,
        hint,
    })
}
