//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    clear_landmarks,
    landmark_stats,
};

pub use session::{
    configure,
    get_config,
    exercise_catalog,
    start_workout,
    workout_tick,
    process_landmarks,
    current_report,
    end_workout,
    reset_workout,
    is_workout_active,
    // Internal API
    min_visibility,
};
