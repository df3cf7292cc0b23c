//! Terminal front-end state.
//!
//! `QuizView` is the presenter: it receives render calls from
//! `ninenine::quiz::present` and keeps exactly what the UI draws. `App` ties
//! the engine, the clock, the option cursor and the view together.

use ninenine::core::constants::{FEEDBACK_FLASH_MS, OPTION_COUNT};
use ninenine::quiz::{
    present, process_input, FeedbackKind, GameEngine, OptionCursor, Presenter, QuizClock,
    QuizEvent, QuizInput, Screen, SoundCue,
};
use ninenine::QuizConfig;
use rand::Rng;
use std::time::{Duration, Instant};

/// A short-lived highlight after an answer or a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackFlash {
    pub kind: FeedbackKind,
    pub until: Instant,
    /// Question on screen when the feedback arrived.
    pub question: Option<(u32, u32, [u32; OPTION_COUNT])>,
}

/// What is currently on screen.
#[derive(Debug, Clone)]
pub struct QuizView {
    pub screen: Screen,
    pub question: Option<(u32, u32, [u32; OPTION_COUNT])>,
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub time_left: u32,
    pub seconds_per_question: u32,
    pub feedback: Option<FeedbackFlash>,
    pub muted: bool,
    pending_bells: u32,
}

impl QuizView {
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            screen: Screen::Start,
            question: None,
            score: 0,
            lives: config.max_lives,
            max_lives: config.max_lives,
            time_left: config.seconds_per_question,
            seconds_per_question: config.seconds_per_question,
            feedback: None,
            muted: false,
            pending_bells: 0,
        }
    }

    /// Feedback still visible at `now`.
    pub fn active_feedback(&self, now: Instant) -> Option<FeedbackKind> {
        self.feedback
            .filter(|flash| now < flash.until)
            .map(|flash| flash.kind)
    }

    /// Feedback that belongs to the options on screen. A miss replaces the
    /// question at once, so its flash never lands on the new options.
    pub fn option_feedback(&self, now: Instant) -> Option<FeedbackKind> {
        self.feedback
            .filter(|flash| now < flash.until && flash.question == self.question)
            .map(|flash| flash.kind)
    }

    /// Number of terminal bells to ring, resetting the count.
    pub fn take_bells(&mut self) -> u32 {
        std::mem::take(&mut self.pending_bells)
    }
}

impl Presenter for QuizView {
    fn render_question(&mut self, a: u32, b: u32, options: &[u32; OPTION_COUNT]) {
        self.question = Some((a, b, *options));
    }

    fn render_hud(&mut self, score: u32, lives: u32, time_left: u32) {
        self.score = score;
        self.lives = lives;
        self.time_left = time_left;
    }

    fn render_feedback(&mut self, kind: FeedbackKind) {
        self.feedback = Some(FeedbackFlash {
            kind,
            until: Instant::now() + Duration::from_millis(FEEDBACK_FLASH_MS),
            question: self.question,
        });
    }

    fn show_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.pending_bells += match cue {
            SoundCue::GameOver => 2,
            _ => 1,
        };
    }
}

pub struct App<R: Rng> {
    pub engine: GameEngine<R>,
    pub clock: QuizClock,
    pub cursor: OptionCursor,
    pub view: QuizView,
}

impl<R: Rng> App<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        let config = *engine.config();
        Self {
            clock: QuizClock::new(&config),
            view: QuizView::new(&config),
            cursor: OptionCursor::default(),
            engine,
        }
    }

    /// Handle one input. Returns false when the player quits.
    pub fn handle_input(&mut self, input: QuizInput) -> bool {
        if input == QuizInput::Quit {
            return false;
        }
        let events = process_input(&mut self.engine, &mut self.cursor, input);
        self.clock.observe(&events);
        self.render_events(&events);
        true
    }

    /// Advance wall-clock time.
    pub fn update(&mut self, dt_ms: u64) {
        let events = self.clock.advance(&mut self.engine, dt_ms);
        self.render_events(&events);
    }

    fn render_events(&mut self, events: &[QuizEvent]) {
        let snapshot = self.engine.snapshot();
        self.view.muted = snapshot.muted;
        present(events, &snapshot, &mut self.view);
    }
}
