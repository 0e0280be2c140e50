//! Engine configuration
//!
//! Tunables that are not part of an exercise's calibration table. Loaded from
//! a JSON object passed in by the page; missing fields keep their defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Landmarks reported below this visibility are treated as absent
    pub min_visibility: f32,
    /// Shoulder-to-wrist distance (px) an arm needs before circles count
    pub circle_min_extension_px: f32,
    /// Heading change (degrees) below which a frame counts as no movement
    pub circle_min_step_deg: f32,
    /// Consecutive bad-form frames a plank tolerates before the timer stops
    pub plank_max_form_breaks: u32,
    /// Hold time for stretches; a completed hold survives leaving the pose
    pub stretch_target_secs: f64,
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_visibility: 0.5,
            circle_min_extension_px: 100.0,
            circle_min_step_deg: 5.0,
            plank_max_form_breaks: 3,
            stretch_target_secs: 30.0,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.min_visibility) {
            return Err(EngineError::InvalidConfig(format!(
                "min_visibility must be within 0..=1, got {}",
                self.min_visibility
            )));
        }
        if self.circle_min_extension_px <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "circle_min_extension_px must be positive".to_string(),
            ));
        }
        if self.circle_min_step_deg < 0.0 {
            return Err(EngineError::InvalidConfig(
                "circle_min_step_deg must not be negative".to_string(),
            ));
        }
        if self.plank_max_form_breaks == 0 {
            return Err(EngineError::InvalidConfig(
                "plank_max_form_breaks must be at least 1".to_string(),
            ));
        }
        if self.stretch_target_secs <= 0.0 {
            return Err(EngineError::InvalidConfig(
                "stretch_target_secs must be positive".to_string(),
            ));
        }
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, EngineError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| EngineError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }
}
