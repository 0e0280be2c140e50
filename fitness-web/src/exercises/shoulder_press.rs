//! Shoulder press - mean elbow angle plus wrist height
//!
//! The top only counts with the wrists above the head; the bottom only with
//! the wrists back below the shoulders.

use super::kind::ExerciseKind;
use super::profile::{mean, ExerciseProfile, Reading};
use crate::engine::{
    Calibration, Extreme, FormMode, PercentGate, PoseFrame, RepRules, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST,
    NOSE, RIGHT_ELBOW, RIGHT_SHOULDER, RIGHT_WRIST,
};

pub static PROFILE: ExerciseProfile = ExerciseProfile {
    kind: ExerciseKind::ShoulderPress,
    calibration: Calibration {
        domain: (90.0, 170.0),
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
            message: "Press Up",
        },
        in_progress: "Good Form",
        upper_band: None,
        guard_failed: None,
    },
    form: FormMode::Latching,
    initial_feedback: "Lower Arms to Shoulders",
    fix_form: "Start with Arms at Shoulders",
    measure,
};

fn measure(pose: &PoseFrame) -> Option<Reading> {
    let right = pose.angle(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
    let left = pose.angle(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;
    let elbow = mean(right, left);

    let wrist_y = mean(pose.y(RIGHT_WRIST)?, pose.y(LEFT_WRIST)?);
    let shoulder_y = mean(pose.y(RIGHT_SHOULDER)?, pose.y(LEFT_SHOULDER)?);
    let head_y = pose.y(NOSE)?;

    // image y grows downwards
    let above_head = wrist_y < head_y;
    let below_shoulders = wrist_y > shoulder_y;

    Some(Reading {
        metric: elbow,
        form_ok: below_shoulders && elbow < 120.0,
        peak_guard: above_head && elbow > 160.0,
        rest_guard: below_shoulders && elbow < 110.0,
        ..Reading::default()
    })
}
