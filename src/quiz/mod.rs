//! Timed multiplication quiz: question generation, the session state
//! machine, its wall-clock driver and the presentation interface.

pub mod clock;
pub mod engine;
pub mod generation;
pub mod input;
pub mod presenter;
pub mod types;

pub use clock::QuizClock;
pub use engine::GameEngine;
pub use generation::{build_question, generate_question, DistractorStrategy};
pub use input::{process_input, OptionCursor, QuizInput};
pub use presenter::{present, FeedbackKind, Presenter, Screen, SoundCue};
pub use types::*;
