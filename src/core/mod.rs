//! Constants and configuration shared by the quiz engine and the front end.

pub mod config;
pub mod constants;

pub use config::{ConfigError, QuizConfig};
