//! Chest and shoulder stretch
//!
//! Recognises three holds, checked in order: doorway (elbows bent at
//! shoulder height), behind-back clasp (wrists together behind the body)
//! and wide arm stretch (straight arms out to the sides). Any of them keeps
//! the hold timer running.

use serde::Serialize;

use super::kind::ExerciseKind;
use super::report::{Detail, FrameReport};
use super::tricep_stretch::hold_progress;
use super::workout::Tracker;
use crate::config::EngineConfig;
use crate::engine::{
    BreakPolicy, HoldTimer, PoseFrame, LEFT_ELBOW, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER,
    RIGHT_WRIST,
};

/// Vertical slack (px) for wrists level with the shoulders in a doorway hold
const DOORWAY_LEVEL_PX: f32 = 50.0;
const DOORWAY_MAX_ELBOW: f32 = 120.0;
/// Horizontal gap (px) between clasped wrists
const CLASP_GAP_PX: f32 = 100.0;
const WIDE_REACH_PX: f32 = 50.0;
const WIDE_LEVEL_PX: f32 = 100.0;
const STRAIGHT: f32 = 160.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChestStretchVariant {
    Doorway,
    BehindBackClasp,
    WideArm,
}

impl ChestStretchVariant {
    pub fn name(&self) -> &'static str {
        match self {
            ChestStretchVariant::Doorway => "Doorway Stretch",
            ChestStretchVariant::BehindBackClasp => "Behind-Back Clasp",
            ChestStretchVariant::WideArm => "Wide Arm Stretch",
        }
    }

    fn cue(&self) -> &'static str {
        match self {
            ChestStretchVariant::Doorway => "Hold Position!",
            ChestStretchVariant::BehindBackClasp => "Pull Shoulders Back!",
            ChestStretchVariant::WideArm => "Feel the Stretch!",
        }
    }
}

struct Arm {
    shoulder_x: f32,
    shoulder_y: f32,
    elbow_x: f32,
    wrist_x: f32,
    wrist_y: f32,
    angle: f32,
}

impl Arm {
    fn read(pose: &PoseFrame, shoulder: usize, elbow: usize, wrist: usize) -> Option<Self> {
        Some(Self {
            shoulder_x: pose.x(shoulder)?,
            shoulder_y: pose.y(shoulder)?,
            elbow_x: pose.x(elbow)?,
            wrist_x: pose.x(wrist)?,
            wrist_y: pose.y(wrist)?,
            angle: pose.angle(shoulder, elbow, wrist)?,
        })
    }

    fn wrist_drop(&self) -> f32 {
        (self.wrist_y - self.shoulder_y).abs()
    }
}

/// Classify the hold; `None` when no recognised stretch is held
fn classify(right: &Arm, left: &Arm) -> Option<ChestStretchVariant> {
    let doorway = right.wrist_drop() < DOORWAY_LEVEL_PX
        && left.wrist_drop() < DOORWAY_LEVEL_PX
        && right.angle < DOORWAY_MAX_ELBOW
        && left.angle < DOORWAY_MAX_ELBOW
        && right.elbow_x > right.shoulder_x
        && left.elbow_x < left.shoulder_x;
    if doorway {
        return Some(ChestStretchVariant::Doorway);
    }

    let clasp = right.wrist_x < right.shoulder_x
        && left.wrist_x > left.shoulder_x
        && (right.wrist_x - left.wrist_x).abs() < CLASP_GAP_PX;
    if clasp {
        return Some(ChestStretchVariant::BehindBackClasp);
    }

    let wide = right.angle > STRAIGHT
        && left.angle > STRAIGHT
        && right.wrist_x > right.shoulder_x + WIDE_REACH_PX
        && left.wrist_x < left.shoulder_x - WIDE_REACH_PX
        && right.wrist_drop() < WIDE_LEVEL_PX
        && left.wrist_drop() < WIDE_LEVEL_PX;
    wide.then_some(ChestStretchVariant::WideArm)
}

pub struct ChestStretch {
    timer: HoldTimer,
    target: f64,
    variant: Option<ChestStretchVariant>,
    feedback: &'static str,
}

impl ChestStretch {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            timer: HoldTimer::new(BreakPolicy::Reset {
                keep_after_secs: config.stretch_target_secs,
            }),
            target: config.stretch_target_secs,
            variant: None,
            feedback: "Arms Out to Sides",
        }
    }

    pub fn variant(&self) -> Option<ChestStretchVariant> {
        self.variant
    }
}

impl Tracker for ChestStretch {
    fn update(&mut self, pose: &PoseFrame, now: f64) -> Option<FrameReport> {
        let right = Arm::read(pose, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST)?;
        let left = Arm::read(pose, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST)?;

        self.variant = classify(&right, &left);
        self.feedback = match self.variant {
            Some(variant) => variant.cue(),
            None if right.angle < STRAIGHT || left.angle < STRAIGHT => "Straighten Arms",
            None => "Extend Arms Back",
        };
        self.timer.update(self.variant.is_some(), now);

        let elapsed = self.timer.elapsed();
        let (percent, bar) = hold_progress(elapsed, self.target);
        Some(FrameReport {
            exercise: ExerciseKind::ChestStretch,
            count: 0.0,
            direction: None,
            form: self.variant.is_some(),
            feedback: self.feedback,
            progress_percent: percent,
            progress_bar: bar,
            elapsed_secs: Some(elapsed),
            detail: Detail::ChestStretch {
                variant: self.variant,
                target_secs: self.target,
                complete: elapsed >= self.target,
            },
        })
    }

    fn count(&self) -> f32 {
        0.0
    }

    fn elapsed(&self) -> Option<f64> {
        Some(self.timer.elapsed())
    }

    fn reset(&mut self) {
        self.timer.reset();
        self.variant = None;
        self.feedback = "Arms Out to Sides";
    }
}
