//! Workout session control - connects the exercise engine with JS
//!
//! JS starts a workout, pushes landmarks every video frame and calls
//! `workout_tick()` to advance the session. Reports and summaries go back as
//! JSON strings.

use log::info;
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::{clear_landmarks, take_pose};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::exercises::{ExerciseKind, Workout};
use crate::logging;

/// Session state
#[derive(Default)]
struct SessionState {
    /// Applied to the next workout started
    config: EngineConfig,
    workout: Option<Workout>,
}

thread_local! {
    static SESSION: RefCell<SessionState> = RefCell::new(SessionState::default());
}

/// Seconds since the epoch from the browser clock
fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    timed: bool,
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Replace the engine configuration with a JSON object
///
/// Missing fields take their defaults. A running workout keeps the
/// configuration it was started with.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = EngineConfig::from_json(json)?;
    logging::set_level(config.level_filter()?);
    SESSION.with(|state_cell| state_cell.borrow_mut().config = config);
    info!("configuration updated");
    Ok(())
}

#[wasm_bindgen]
pub fn get_config() -> Result<String, JsValue> {
    SESSION.with(|state_cell| Ok(state_cell.borrow().config.to_json()?))
}

/// List of supported exercises as JSON `[{id, name, timed}]`
#[wasm_bindgen]
pub fn exercise_catalog() -> Result<String, JsValue> {
    let catalog: Vec<CatalogEntry> = ExerciseKind::ALL
        .iter()
        .map(|kind| CatalogEntry {
            id: kind.id(),
            name: kind.display_name(),
            timed: kind.is_timed(),
        })
        .collect();
    to_json(&catalog)
}

/// Start a workout, ending any session already running
#[wasm_bindgen]
pub fn start_workout(exercise: &str) -> Result<(), JsValue> {
    let kind: ExerciseKind = exercise.parse()?;
    let now = now_secs();
    SESSION.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        if let Some(previous) = state.workout.take() {
            previous.finish(now);
        }
        let workout = Workout::new(kind, &state.config);
        state.workout = Some(workout);
    });
    clear_landmarks();
    Ok(())
}

/// Process the pending landmark frame
///
/// Returns the frame report as JSON, or `undefined` when the frame was
/// skipped (nobody in view, landmarks missing, or no new frame).
#[wasm_bindgen]
pub fn workout_tick() -> Result<Option<String>, JsValue> {
    let pose = take_pose();
    let now = now_secs();
    SESSION.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let workout = state.workout.as_mut().ok_or(EngineError::NoActiveSession)?;
        workout.update(pose.as_ref(), now).map(|report| to_json(&report)).transpose()
    })
}

/// Store landmarks and tick in one call
#[wasm_bindgen]
pub fn process_landmarks(data: &[f32]) -> Result<Option<String>, JsValue> {
    super::landmarks::update_landmarks(data);
    workout_tick()
}

/// Latest report of the running workout as JSON
#[wasm_bindgen]
pub fn current_report() -> Result<Option<String>, JsValue> {
    SESSION.with(|state_cell| {
        let state = state_cell.borrow();
        let workout = state.workout.as_ref().ok_or(EngineError::NoActiveSession)?;
        workout.last_report().map(to_json).transpose()
    })
}

/// End the workout and return its summary as JSON
#[wasm_bindgen]
pub fn end_workout() -> Result<String, JsValue> {
    let now = now_secs();
    let workout = SESSION
        .with(|state_cell| state_cell.borrow_mut().workout.take())
        .ok_or(EngineError::NoActiveSession)?;
    to_json(&workout.finish(now))
}

/// Back to zero without leaving the exercise
#[wasm_bindgen]
pub fn reset_workout() -> Result<(), JsValue> {
    SESSION.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let workout = state.workout.as_mut().ok_or(EngineError::NoActiveSession)?;
        workout.reset();
        Ok::<(), EngineError>(())
    })?;
    clear_landmarks();
    Ok(())
}

#[wasm_bindgen]
pub fn is_workout_active() -> bool {
    SESSION.with(|state_cell| state_cell.borrow().workout.is_some())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Visibility threshold used when parsing incoming landmarks
pub fn min_visibility() -> f32 {
    SESSION.with(|state_cell| state_cell.borrow().config.min_visibility)
}
