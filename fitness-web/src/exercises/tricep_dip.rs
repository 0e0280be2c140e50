//! Tricep dip - mean elbow angle with hands behind the body
//!
//! The readout is not clamped: elbows bent past 70 degrees read above 100%.

use super::kind::ExerciseKind;
use super::profile::{mean, ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};

const MAX_ARM_DIFFERENCE: f32 = 20.0;

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::TricepDip,
    calibration: Calibration {
        domain: (70.0, 170.0),
        percent: (100.0, 0.0),
        bar: (50.0, 380.0),
        clamp: false,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::Above(90.0),
            message: "Push Up",
        },
        rest: Extreme {
            gate: PercentGate::Below(10.0),
            message: "Lower Down",
        },
        in_progress: "Good Form",
        upper_band: None,
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Position Arms Behind",
    fix_form: "Keep Arms Even",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right = pose.angle(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
    let left = pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;
    let elbow = mean(right, left);

    let arms_behind =
        pose.x(RIGHT_WRIST)? < pose.x(RIGHT_SHOULDER)? && pose.x(LEFT_WRIST)? > pose.x(LEFT_SHOULDER)?;
    let even = (right - left).abs() < MAX_ARM_DIFFERENCE;

    Some(Reading {
        metric: elbow,
        form_ok: arms_behind && even,
        peak_guard: elbow < 90.0,
        rest_guard: elbow > 160.0,
        fix_hint: (!arms_behind).then_some("Hands Behind Body"),
        hint: None,
    })
}
