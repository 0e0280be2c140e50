//! Squat - mean knee angle of both legs

use super::kind::ExerciseKind;
use super::profile::{mean, ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE,
    RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
};

const STANDING: f32 = 160.0;
const DEPTH: f32 = 100.0;

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::Squat,
    calibration: Calibration {
        domain: (90.0, 170.0),
        percent: (100.0, 0.0),
        bar: (50.0, 380.0),
        clamp: true,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::Above(90.0),
            message: "Stand Up",
        },
        rest: Extreme {
            gate: PercentGate::Below(10.0),
            message: "Squat Down",
        },
        in_progress: "Good Form",
        upper_band: None,
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Stand Straight",
    fix_form: "Stand Straight",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right = pose.angle(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE)?;
    let left = pose.angle(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE)?;
    let knee = mean(right, left);

    Some(Reading {
        metric: knee,
        form_ok: knee > STANDING,
        peak_guard: knee < DEPTH,
        rest_guard: knee > STANDING,
        ..Reading::default()
    })
}
