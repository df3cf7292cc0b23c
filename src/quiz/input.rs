//! UI-agnostic input handling for the quiz.

use super::engine::GameEngine;
use super::types::QuizEvent;
use crate::core::constants::OPTION_COUNT;
use rand::Rng;

/// Options are laid out in a 2x2 grid.
pub const GRID_COLUMNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// Enter/Space: start or restart, or answer the highlighted option.
    Confirm,
    /// Number key: answer the option in this slot directly.
    Slot(usize),
    Up,
    Down,
    Left,
    Right,
    ToggleMute,
    Quit,
    Other,
}

/// Highlighted option slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionCursor {
    pub slot: usize,
}

impl OptionCursor {
    pub fn up(&mut self) {
        if self.slot >= GRID_COLUMNS {
            self.slot -= GRID_COLUMNS;
        }
    }

    pub fn down(&mut self) {
        if self.slot + GRID_COLUMNS < OPTION_COUNT {
            self.slot += GRID_COLUMNS;
        }
    }

    pub fn left(&mut self) {
        if self.slot % GRID_COLUMNS > 0 {
            self.slot -= 1;
        }
    }

    pub fn right(&mut self) {
        if self.slot % GRID_COLUMNS + 1 < GRID_COLUMNS && self.slot + 1 < OPTION_COUNT {
            self.slot += 1;
        }
    }
}

/// Apply one input. Returns the engine events it caused.
///
/// `Quit` is left to the caller.
pub fn process_input<R: Rng>(
    engine: &mut GameEngine<R>,
    cursor: &mut OptionCursor,
    input: QuizInput,
) -> Vec<QuizEvent> {
    match input {
        QuizInput::Confirm => {
            if engine.is_playing() {
                answer_slot(engine, cursor.slot)
            } else {
                *cursor = OptionCursor::default();
                engine.start()
            }
        }
        QuizInput::Slot(slot) if slot < OPTION_COUNT => {
            if !engine.is_playing() {
                return Vec::new();
            }
            cursor.slot = slot;
            answer_slot(engine, slot)
        }
        QuizInput::Up => {
            cursor.up();
            Vec::new()
        }
        QuizInput::Down => {
            cursor.down();
            Vec::new()
        }
        QuizInput::Left => {
            cursor.left();
            Vec::new()
        }
        QuizInput::Right => {
            cursor.right();
            Vec::new()
        }
        QuizInput::ToggleMute => engine.toggle_mute(),
        QuizInput::Slot(_) | QuizInput::Quit | QuizInput::Other => Vec::new(),
    }
}

fn answer_slot<R: Rng>(engine: &mut GameEngine<R>, slot: usize) -> Vec<QuizEvent> {
    match engine.question().and_then(|q| q.options.get(slot).copied()) {
        Some(value) => engine.submit_answer(value),
        None => Vec::new(),
    }
}
