//! Exercise session - mutable state carried across frames for one workout

use serde::Serialize;

/// Which half of the repetition the session expects next
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Waiting for the peak of the movement (first half)
    #[default]
    Down,
    /// Peak reached, waiting to return to the rest position
    Up,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
        }
    }
}

/// Rep count, direction, form latch and last feedback for one workout
///
/// The count is stored in half repetitions so it is always a multiple of 0.5.
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseSession {
    half_reps: u32,
    pub direction: Direction,
    pub form: bool,
    pub feedback: &'static str,
}

impl ExerciseSession {
    pub fn new(initial_feedback: &'static str) -> Self {
        Self {
            half_reps: 0,
            direction: Direction::Down,
            form: false,
            feedback: initial_feedback,
        }
    }

    /// Repetitions completed, in steps of 0.5
    pub fn count(&self) -> f32 {
        self.half_reps as f32 / 2.0
    }

    pub fn half_reps(&self) -> u32 {
        self.half_reps
    }

    /// Record one half repetition and flip the expected direction
    pub fn complete_half(&mut self) {
        self.half_reps += 1;
        self.direction = self.direction.flipped();
    }
}
