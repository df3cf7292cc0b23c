//! Wall-clock driver for the engine.
//!
//! Converts elapsed milliseconds into one `tick()` per interval and fires the
//! delayed next-question ticket. Call [`QuizClock::observe`] with every event
//! batch the engine produces outside of [`QuizClock::advance`] (start, answers)
//! so the countdown phase and pending callback stay in sync.

use super::engine::GameEngine;
use super::types::{PendingQuestion, QuizEvent};
use crate::core::config::QuizConfig;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delayed {
    ticket: PendingQuestion,
    remaining_ms: u64,
}

#[derive(Debug, Clone)]
pub struct QuizClock {
    tick_interval_ms: u64,
    /// Time accumulated toward the next tick.
    elapsed_ms: u64,
    pending: Option<Delayed>,
}

impl QuizClock {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            tick_interval_ms: config.tick_interval_ms.max(1),
            elapsed_ms: 0,
            pending: None,
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn pending(&self) -> Option<PendingQuestion> {
        self.pending.map(|d| d.ticket)
    }

    /// Update countdown bookkeeping from engine events.
    pub fn observe(&mut self, events: &[QuizEvent]) {
        for event in events {
            match event {
                QuizEvent::Started | QuizEvent::GameOver { .. } => {
                    self.elapsed_ms = 0;
                    self.pending = None;
                }
                QuizEvent::QuestionReady { .. } => {
                    // New question, new countdown
                    self.elapsed_ms = 0;
                    self.pending = None;
                }
                QuizEvent::NextQuestionPending(ticket) => {
                    self.pending = Some(Delayed {
                        ticket: *ticket,
                        remaining_ms: ticket.delay_ms,
                    });
                }
                _ => {}
            }
        }
    }

    /// Advance by `dt_ms` of wall-clock time. Returns the events produced.
    pub fn advance<R: Rng>(&mut self, engine: &mut GameEngine<R>, dt_ms: u64) -> Vec<QuizEvent> {
        if !engine.is_playing() {
            self.elapsed_ms = 0;
            self.pending = None;
            return Vec::new();
        }

        // Clamp so a stalled frame cannot fire a burst of ticks
        let dt_ms = dt_ms.min(self.tick_interval_ms);
        let mut events = Vec::new();

        // Countdown is paused while the next question is pending
        if let Some(mut delayed) = self.pending.take() {
            if delayed.remaining_ms > dt_ms {
                delayed.remaining_ms -= dt_ms;
                self.pending = Some(delayed);
            } else {
                let fired = engine.advance_question(delayed.ticket);
                self.observe(&fired);
                events.extend(fired);
            }
            return events;
        }

        self.elapsed_ms += dt_ms;
        while self.elapsed_ms >= self.tick_interval_ms {
            self.elapsed_ms -= self.tick_interval_ms;
            let ticked = engine.tick();
            self.observe(&ticked);
            events.extend(ticked);

            if !engine.is_answering() {
                break;
            }
        }
        events
    }
}
