//! The quiz state machine.
//!
//! `GameEngine` owns the session counters, the active question and the random
//! source. It never schedules anything itself: an external driver calls
//! [`GameEngine::tick`] once per second and [`GameEngine::advance_question`]
//! when a delayed next-question ticket comes due. Every operation returns the
//! events it produced so the presentation layer can re-render.

use super::generation::generate_question;
use super::types::*;
use crate::core::config::QuizConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct GameEngine<R: Rng> {
    config: QuizConfig,
    rng: R,
    phase: Phase,
    round: RoundState,
    session: Session,
    question: Option<Question>,
    session_id: u64,
    round_id: u64,
}

impl GameEngine<StdRng> {
    /// Engine seeded from OS entropy.
    pub fn from_entropy(config: QuizConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }

    /// Engine with a reproducible question sequence.
    pub fn seeded(config: QuizConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn new(config: QuizConfig, rng: R) -> Self {
        Self {
            session: Session::new(&config, false),
            config,
            rng,
            phase: Phase::Idle,
            round: RoundState::Answering,
            question: None,
            session_id: 0,
            round_id: 0,
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_state(&self) -> RoundState {
        self.round
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// True while the countdown should run.
    pub fn is_answering(&self) -> bool {
        self.is_playing() && self.round == RoundState::Answering
    }

    pub fn is_muted(&self) -> bool {
        self.session.muted
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            phase: self.phase,
            score: self.session.score,
            lives: self.session.lives,
            max_lives: self.config.max_lives,
            time_left: self.session.time_left,
            question: self.question,
            muted: self.session.muted,
        }
    }

    /// Begin a new session from any phase. Replaces the previous session.
    pub fn start(&mut self) -> Vec<QuizEvent> {
        self.session_id += 1;
        self.round_id = 0;
        self.session = Session::new(&self.config, self.session.muted);
        self.phase = Phase::Playing;
        log::debug!("session {} started", self.session_id);

        let mut events = vec![QuizEvent::Started];
        self.next_question(&mut events);
        events
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> Vec<QuizEvent> {
        if !self.is_answering() {
            log::trace!("tick ignored in {:?}/{:?}", self.phase, self.round);
            return Vec::new();
        }

        self.session.time_left = self.session.time_left.saturating_sub(1);
        let mut events = vec![QuizEvent::Tick {
            time_left: self.session.time_left,
        }];

        if self.session.time_left == 0 {
            self.miss(MissCause::Timeout, &mut events);
        }
        events
    }

    /// The player picked `value` for the active question.
    pub fn submit_answer(&mut self, value: u32) -> Vec<QuizEvent> {
        if !self.is_answering() {
            log::trace!("answer {} ignored in {:?}/{:?}", value, self.phase, self.round);
            return Vec::new();
        }
        let Some(question) = self.question else {
            return Vec::new();
        };

        let mut events = Vec::new();
        if question.is_correct(value) {
            self.session.score = self
                .session
                .score
                .saturating_add(self.config.points_per_correct);
            events.push(QuizEvent::Correct {
                value,
                score: self.session.score,
            });

            if self.config.next_question_delay_ms > 0 {
                self.round = RoundState::Resolved;
                events.push(QuizEvent::NextQuestionPending(PendingQuestion {
                    session: self.session_id,
                    round: self.round_id,
                    delay_ms: self.config.next_question_delay_ms,
                }));
            } else {
                self.next_question(&mut events);
            }
        } else {
            self.miss(MissCause::WrongAnswer(value), &mut events);
        }
        events
    }

    /// Fire a delayed next-question callback. Stale tickets are ignored.
    pub fn advance_question(&mut self, ticket: PendingQuestion) -> Vec<QuizEvent> {
        let current = self.is_playing()
            && self.round == RoundState::Resolved
            && ticket.session == self.session_id
            && ticket.round == self.round_id;
        if !current {
            log::trace!(
                "stale next-question ticket {:?} (session {}, round {})",
                ticket,
                self.session_id,
                self.round_id
            );
            return Vec::new();
        }

        let mut events = Vec::new();
        self.next_question(&mut events);
        events
    }

    pub fn toggle_mute(&mut self) -> Vec<QuizEvent> {
        self.session.muted = !self.session.muted;
        vec![QuizEvent::MuteToggled(self.session.muted)]
    }

    fn miss(&mut self, cause: MissCause, events: &mut Vec<QuizEvent>) {
        self.session.lives = self.session.lives.saturating_sub(1);
        events.push(QuizEvent::Wrong {
            cause,
            lives: self.session.lives,
        });

        if self.session.lives == 0 {
            self.end(events);
        } else {
            self.next_question(events);
        }
    }

    fn end(&mut self, events: &mut Vec<QuizEvent>) {
        self.phase = Phase::GameOver;
        self.round = RoundState::Answering;
        log::debug!(
            "session {} over with score {}",
            self.session_id,
            self.session.score
        );
        events.push(QuizEvent::GameOver {
            final_score: self.session.score,
        });
    }

    fn next_question(&mut self, events: &mut Vec<QuizEvent>) {
        let question = generate_question(&mut self.rng);
        self.round_id += 1;
        self.round = RoundState::Answering;
        self.session.time_left = self.config.seconds_per_question;
        self.question = Some(question);
        events.push(QuizEvent::QuestionReady {
            a: question.a,
            b: question.b,
            options: question.options,
        });
    }
}
