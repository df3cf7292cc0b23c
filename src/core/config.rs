//! Quiz configuration.
//!
//! Defaults come from `core::constants`. An optional JSON file at
//! `~/.ninenine/config.json` (or a path given on the command line) may
//! override any subset of fields.

use super::constants::*;
use crate::utils::persistence::{data_path, read_optional};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable numbers for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub max_lives: u32,
    pub seconds_per_question: u32,
    pub points_per_correct: u32,
    /// Pause between a correct answer and the next question. 0 = immediate.
    pub next_question_delay_ms: u64,
    pub tick_interval_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_lives: MAX_LIVES,
            seconds_per_question: SECONDS_PER_QUESTION,
            points_per_correct: POINTS_PER_CORRECT,
            next_question_delay_ms: NEXT_QUESTION_DELAY_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl QuizConfig {
    /// Config that generates the next question as soon as an answer is correct.
    pub fn without_delay() -> Self {
        Self {
            next_question_delay_ms: 0,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lives == 0 {
            return Err(ConfigError::Invalid("max_lives must be at least 1".into()));
        }
        if self.max_lives > LIVES_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "max_lives must be at most {}",
                LIVES_LIMIT
            )));
        }
        if self.seconds_per_question == 0 {
            return Err(ConfigError::Invalid(
                "seconds_per_question must be at least 1".into(),
            ));
        }
        if self.seconds_per_question > SECONDS_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "seconds_per_question must be at most {}",
                SECONDS_LIMIT
            )));
        }
        if self.points_per_correct == 0 {
            return Err(ConfigError::Invalid(
                "points_per_correct must be at least 1".into(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match read_optional(path)? {
            Some(json) => {
                log::debug!("loading config from {}", path.display());
                Self::from_json(&json)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load ~/.ninenine/config.json, falling back to defaults if it is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&data_path(CONFIG_FILENAME)?)
    }
}
