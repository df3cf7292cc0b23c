//! ninenine - Timed Multiplication Quiz Library
//!
//! This module exposes the quiz logic for testing and for the terminal
//! front end.

pub mod build_info;
pub mod core;
pub mod quiz;
pub mod utils;

pub use crate::core::config::{ConfigError, QuizConfig};
pub use crate::core::constants::*;
pub use quiz::{GameEngine, Phase, Question, QuizClock, QuizEvent, QuizSnapshot};
