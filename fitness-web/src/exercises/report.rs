//! Per-frame and end-of-session results, serialized to JSON for the UI

use serde::Serialize;

use super::chest_stretch::ChestStretchVariant;
use super::kind::ExerciseKind;
use super::plank::PlankVariant;
use crate::engine::{Direction, Rotation};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub exercise: ExerciseKind,
    /// Repetitions in steps of 0.5; zero for hold exercises
    pub count: f32,
    /// Present for exercises counted by the linear state machine
    pub direction: Option<Direction>,
    pub form: bool,
    pub feedback: &'static str,
    pub progress_percent: f32,
    pub progress_bar: f32,
    /// Seconds held, for hold exercises
    pub elapsed_secs: Option<f64>,
    pub detail: Detail,
}

/// Exercise-specific extras
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detail {
    Reps,
    Circles {
        left: f32,
        right: f32,
        left_rotation: Option<Rotation>,
        right_rotation: Option<Rotation>,
        left_extended: bool,
        right_extended: bool,
    },
    Plank {
        variant: PlankVariant,
        form_breaks: u32,
        running: bool,
        milestone: Option<&'static str>,
    },
    TricepStretch {
        left_secs: f64,
        right_secs: f64,
        target_secs: f64,
        left_complete: bool,
        right_complete: bool,
    },
    ChestStretch {
        variant: Option<ChestStretchVariant>,
        target_secs: f64,
        complete: bool,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub exercise: ExerciseKind,
    pub count: f32,
    pub elapsed_secs: Option<f64>,
    /// Wall time from the first frame to the end of the session
    pub duration_secs: f64,
    pub reps_per_minute: Option<f32>,
}

impl SessionSummary {
    pub fn new(exercise: ExerciseKind, count: f32, elapsed_secs: Option<f64>, duration_secs: f64) -> Self {
        let reps_per_minute = if elapsed_secs.is_none() && duration_secs > 0.0 {
            Some((count as f64 / duration_secs * 60.0) as f32)
        } else {
            None
        };
        Self {
            exercise,
            count,
            elapsed_secs,
            duration_secs,
            reps_per_minute,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reps_per_minute() {
        let s = SessionSummary::new(ExerciseKind::JumpingJack, 30.0, None, 60.0);
        assert!((s.reps_per_minute.unwrap() - 30.0).abs() < 1e-4);

        let s = SessionSummary::new(ExerciseKind::Squat, 5.0, None, 0.0);
        assert_eq!(s.reps_per_minute, None);

        let s = SessionSummary::new(ExerciseKind::Plank, 0.0, Some(45.0), 50.0);
        assert_eq!(s.reps_per_minute, None);
    }

    #[test]
    fn test_report_json_shape() {
        let report = FrameReport {
            exercise: ExerciseKind::PushUp,
            count: 1.5,
            direction: Some(Direction::Up),
            form: true,
            feedback: "Push Up",
            progress_percent: 0.0,
            progress_bar: 380.0,
            elapsed_secs: None,
            detail: Detail::Reps,
        };
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["exercise"], "push_up");
        assert_eq!(json["direction"], "up");
        assert_eq!(json["count"], 1.5);
        assert_eq!(json["detail"]["kind"], "reps");
        assert!(json["elapsed_secs"].is_null());
    }
}
