//! Fitness Web - pose-based exercise tracking
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//! - Re-exports of the native engine API

mod bridge;
pub mod config;
pub mod engine;
pub mod error;
pub mod exercises;
mod logging;
pub mod runtime;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_landmarks, configure, current_report, end_workout, exercise_catalog, get_config, is_workout_active,
    landmark_stats, process_landmarks, reset_workout, start_workout, update_landmarks, workout_tick,
};

pub use config::EngineConfig;
pub use engine::PoseFrame;
pub use error::{EngineError, FrameError, SourceError};
pub use exercises::{ExerciseKind, FrameReport, SessionSummary, Workout};
pub use runtime::{run, FrameSink, PoseSource, ReplaySource, SourceFrame};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    log::info!("fitness engine loaded, min visibility {}", bridge::min_visibility());
}
