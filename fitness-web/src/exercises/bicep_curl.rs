//! Bicep curl - the more bent of the two elbows

use super::kind::ExerciseKind;
use super::profile::{ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::BicepCurl,
    calibration: Calibration {
        domain: (50.0, 170.0),
        percent: (100.0, 0.0),
        bar: (50.0, 380.0),
        clamp: true,
    },
    rules: RepRules {
        peak: Extreme {
            gate: PercentGate::Above(90.0),
            message: "Lower Weight",
        },
        rest: Extreme {
            gate: PercentGate::Below(10.0),
            message: "Curl Up",
        },
        in_progress: "Good Form",
        upper_band: None,
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Extend Arms",
    fix_form: "Start with Arms Extended",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right = pose.angle(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
    let left = pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;
    let elbow = right.min(left);

    Some(Reading {
        metric: elbow,
        form_ok: elbow < 120.0,
        peak_guard: elbow < 60.0,
        rest_guard: elbow > 160.0,
        ..Reading::default()
    })
}
