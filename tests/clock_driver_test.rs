//! Integration test: wall-clock driven play
//!
//! Runs the engine through `QuizClock` and `present` the way the terminal
//! front end does, with a recording presenter standing in for the UI.

use ninenine::quiz::{
    present, FeedbackKind, MissCause, Presenter, Screen, SoundCue,
};
use ninenine::{GameEngine, Phase, QuizClock, QuizConfig, QuizEvent, OPTION_COUNT};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Default)]
struct RecordingPresenter {
    screen: Option<Screen>,
    question: Option<(u32, u32)>,
    hud: (u32, u32, u32),
    feedback: Vec<FeedbackKind>,
    sounds: Vec<SoundCue>,
}

impl Presenter for RecordingPresenter {
    fn render_question(&mut self, a: u32, b: u32, _options: &[u32; OPTION_COUNT]) {
        self.question = Some((a, b));
    }
    fn render_hud(&mut self, score: u32, lives: u32, time_left: u32) {
        self.hud = (score, lives, time_left);
    }
    fn render_feedback(&mut self, kind: FeedbackKind) {
        self.feedback.push(kind);
    }
    fn show_screen(&mut self, screen: Screen) {
        self.screen = Some(screen);
    }
    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }
}

struct Harness {
    engine: GameEngine<ChaCha8Rng>,
    clock: QuizClock,
    ui: RecordingPresenter,
    log: Vec<QuizEvent>,
}

impl Harness {
    fn new(config: QuizConfig) -> Self {
        Self {
            engine: GameEngine::new(config, ChaCha8Rng::seed_from_u64(2024)),
            clock: QuizClock::new(&config),
            ui: RecordingPresenter::default(),
            log: Vec::new(),
        }
    }

    fn route(&mut self, events: Vec<QuizEvent>, observe: bool) {
        if observe {
            self.clock.observe(&events);
        }
        present(&events, &self.engine.snapshot(), &mut self.ui);
        self.log.extend(events);
    }

    fn start(&mut self) {
        let events = self.engine.start();
        self.route(events, true);
    }

    fn answer(&mut self, value: u32) {
        let events = self.engine.submit_answer(value);
        self.route(events, true);
    }

    fn wait(&mut self, ms: u64, step: u64) {
        let mut remaining = ms;
        while remaining > 0 {
            let dt = step.min(remaining);
            let events = self.clock.advance(&mut self.engine, dt);
            self.route(events, false);
            remaining -= dt;
        }
    }
}

#[test]
fn test_start_shows_game_and_first_question() {
    let mut h = Harness::new(QuizConfig::default());
    h.start();
    assert_eq!(h.ui.screen, Some(Screen::Game));
    let q = h.engine.question().unwrap();
    assert_eq!(h.ui.question, Some((q.a, q.b)));
    assert_eq!(h.ui.hud, (0, 10, 7));
    assert_eq!(h.ui.sounds, vec![SoundCue::Start]);
}

#[test]
fn test_hud_counts_down_each_second() {
    let mut h = Harness::new(QuizConfig::default());
    h.start();
    h.wait(3000, 50);
    assert_eq!(h.ui.hud, (0, 10, 4));
    assert_eq!(h.engine.session().time_left, 4);
}

#[test]
fn test_idle_timeouts_run_to_game_over() {
    let mut h = Harness::new(QuizConfig::default());
    h.start();

    // 10 questions x 7 seconds, in 50ms frames
    h.wait(70_000, 50);

    assert_eq!(h.engine.phase(), Phase::GameOver);
    assert_eq!(h.ui.screen, Some(Screen::End));
    assert_eq!(h.ui.hud.0, 0);
    assert_eq!(h.ui.hud.1, 0);

    let timeouts = h
        .log
        .iter()
        .filter(|e| {
            matches!(
                e,
                QuizEvent::Wrong {
                    cause: MissCause::Timeout,
                    ..
                }
            )
        })
        .count();
    assert_eq!(timeouts, 10);
    assert_eq!(h.ui.feedback.len(), 10);
    assert!(h.ui.feedback.iter().all(|k| *k == FeedbackKind::Timeout));
    assert_eq!(h.ui.sounds.last(), Some(&SoundCue::GameOver));

    // Further time does nothing
    let logged = h.log.len();
    h.wait(5000, 50);
    assert_eq!(h.log.len(), logged);
}

#[test]
fn test_correct_answer_shows_next_question_after_delay() {
    let mut h = Harness::new(QuizConfig::default());
    h.start();
    let first = *h.engine.question().unwrap();
    h.answer(first.answer);

    assert_eq!(h.ui.hud.0, 10);
    assert_eq!(h.ui.feedback, vec![FeedbackKind::Correct]);
    assert!(h.clock.pending().is_some());

    h.wait(250, 50);
    assert!(h.clock.pending().is_some());

    h.wait(50, 50);
    assert!(h.clock.pending().is_none());
    let ready = h
        .log
        .iter()
        .filter(|e| matches!(e, QuizEvent::QuestionReady { .. }))
        .count();
    assert_eq!(ready, 2);
    assert_eq!(h.ui.hud, (10, 10, 7));
}

#[test]
fn test_restart_during_delay_cancels_pending() {
    let mut h = Harness::new(QuizConfig::default());
    h.start();
    let answer = h.engine.question().unwrap().answer;
    h.answer(answer);
    h.start();

    let question = *h.engine.question().unwrap();
    h.wait(1000, 50);

    // The old callback never replaced the new session's question
    assert_eq!(*h.engine.question().unwrap(), question);
    assert_eq!(h.engine.session().score, 0);
    assert_eq!(h.engine.session().time_left, 6);
}

#[test]
fn test_muted_session_plays_no_sounds() {
    let mut h = Harness::new(QuizConfig::default());
    let events = h.engine.toggle_mute();
    h.route(events, true);
    h.start();
    h.answer(999);
    assert!(h.ui.sounds.is_empty());
    assert_eq!(h.ui.feedback, vec![FeedbackKind::Wrong]);
    assert_eq!(h.ui.hud.1, 9);
}

#[test]
fn test_wrong_answer_restarts_countdown() {
    let mut h = Harness::new(QuizConfig::default());
    h.start();
    h.wait(900, 50);
    h.answer(999);
    h.wait(900, 50);
    assert_eq!(h.engine.session().time_left, 7);
    h.wait(100, 50);
    assert_eq!(h.engine.session().time_left, 6);
}
