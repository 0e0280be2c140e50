//! Supported exercises and their stable ids

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Squat,
    PushUp,
    Lunge,
    BicepCurl,
    ShoulderPress,
    LateralRaise,
    TricepDip,
    JumpingJack,
    ArmCircles,
    Plank,
    TricepStretch,
    ChestStretch,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 12] = [
        ExerciseKind::Squat,
        ExerciseKind::PushUp,
        ExerciseKind::Lunge,
        ExerciseKind::BicepCurl,
        ExerciseKind::ShoulderPress,
        ExerciseKind::LateralRaise,
        ExerciseKind::TricepDip,
        ExerciseKind::JumpingJack,
        ExerciseKind::ArmCircles,
        ExerciseKind::Plank,
        ExerciseKind::TricepStretch,
        ExerciseKind::ChestStretch,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "squat",
            ExerciseKind::PushUp => "push_up",
            ExerciseKind::Lunge => "lunge",
            ExerciseKind::BicepCurl => "bicep_curl",
            ExerciseKind::ShoulderPress => "shoulder_press",
            ExerciseKind::LateralRaise => "lateral_raise",
            ExerciseKind::TricepDip => "tricep_dip",
            ExerciseKind::JumpingJack => "jumping_jack",
            ExerciseKind::ArmCircles => "arm_circles",
            ExerciseKind::Plank => "plank",
            ExerciseKind::TricepStretch => "tricep_stretch",
            ExerciseKind::ChestStretch => "chest_stretch",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Squat",
            ExerciseKind::PushUp => "Push-Up",
            ExerciseKind::Lunge => "Lunge",
            ExerciseKind::BicepCurl => "Bicep Curl",
            ExerciseKind::ShoulderPress => "Shoulder Press",
            ExerciseKind::LateralRaise => "Lateral Raise",
            ExerciseKind::TricepDip => "Tricep Dip",
            ExerciseKind::JumpingJack => "Jumping Jack",
            ExerciseKind::ArmCircles => "Arm Circles",
            ExerciseKind::Plank => "Plank",
            ExerciseKind::TricepStretch => "Overhead Tricep Stretch",
            ExerciseKind::ChestStretch => "Chest & Shoulder Stretch",
        }
    }

    /// Hold exercises report time instead of repetitions
    pub fn is_timed(&self) -> bool {
        matches!(
            self,
            ExerciseKind::Plank | ExerciseKind::TricepStretch | ExerciseKind::ChestStretch
        )
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ExerciseKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ExerciseKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == wanted)
            .ok_or_else(|| EngineError::UnknownExercise(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for kind in ExerciseKind::ALL {
            assert_eq!(kind.id().parse::<ExerciseKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.id());
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!("Push-Up".parse::<ExerciseKind>().unwrap(), ExerciseKind::PushUp);
        assert_eq!(" bicep curl ".parse::<ExerciseKind>().unwrap(), ExerciseKind::BicepCurl);
    }

    #[test]
    fn test_unknown_exercise() {
        let err = "burpee".parse::<ExerciseKind>().unwrap_err();
        assert!(matches!(err, EngineError::UnknownExercise(ref id) if id == "burpee"));
    }

    #[test]
    fn test_serde_id_matches() {
        let json = serde_json::to_string(&ExerciseKind::ShoulderPress).unwrap();
        assert_eq!(json, "\"shoulder_press\"");
    }

    #[test]
    fn test_timed_exercises() {
        let timed: Vec<_> = ExerciseKind::ALL.iter().filter(|k| k.is_timed()).collect();
        assert_eq!(
            timed,
            [&ExerciseKind::Plank, &ExerciseKind::TricepStretch, &ExerciseKind::ChestStretch]
        );
    }
}
