//! Quiz data structures: session counters, questions, phases and events.

use crate::core::config::QuizConfig;
use crate::core::constants::OPTION_COUNT;

/// Lifecycle of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No session has been started yet.
    Idle,
    Playing,
    /// Lives ran out. Only `start()` leaves this state.
    GameOver,
}

/// State of the active round while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Accepting answers; the countdown runs.
    Answering,
    /// Answered correctly; waiting for the delayed next question.
    Resolved,
}

/// Counters for one play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub lives: u32,
    pub time_left: u32,
    pub muted: bool,
}

impl Session {
    pub fn new(config: &QuizConfig, muted: bool) -> Self {
        Self {
            score: 0,
            lives: config.max_lives,
            time_left: config.seconds_per_question,
            muted,
        }
    }
}

/// A multiplication question with its four shuffled choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub a: u32,
    pub b: u32,
    pub answer: u32,
    pub options: [u32; OPTION_COUNT],
}

impl Question {
    pub fn is_correct(&self, value: u32) -> bool {
        value == self.answer
    }

    /// Slot index of the correct answer within `options`.
    pub fn answer_slot(&self) -> Option<usize> {
        self.options.iter().position(|&o| o == self.answer)
    }
}

/// Why a round was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissCause {
    WrongAnswer(u32),
    Timeout,
}

/// Ticket for a delayed "next question" callback.
///
/// Only honoured if both ids still match the engine when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQuestion {
    pub session: u64,
    pub round: u64,
    pub delay_ms: u64,
}

/// Something that happened inside the engine.
///
/// The presentation layer maps these to screen changes, feedback and sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Started,
    QuestionReady {
        a: u32,
        b: u32,
        options: [u32; OPTION_COUNT],
    },
    Tick {
        time_left: u32,
    },
    Correct {
        value: u32,
        score: u32,
    },
    Wrong {
        cause: MissCause,
        lives: u32,
    },
    NextQuestionPending(PendingQuestion),
    GameOver {
        final_score: u32,
    },
    MuteToggled(bool),
}

/// Everything a renderer needs to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub time_left: u32,
    pub question: Option<Question>,
    pub muted: bool,
}
