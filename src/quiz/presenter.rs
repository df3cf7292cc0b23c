//! Presentation-layer interface.
//!
//! The engine holds no rendering or audio logic. A front end implements
//! [`Presenter`] and feeds every event batch through [`present`], which
//! decides which screen, feedback and sound each event maps to.

use super::types::{MissCause, QuizEvent, QuizSnapshot};
use crate::core::constants::OPTION_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Game,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Wrong,
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Start,
    Correct,
    Wrong,
    GameOver,
}

pub trait Presenter {
    fn render_question(&mut self, a: u32, b: u32, options: &[u32; OPTION_COUNT]);
    fn render_hud(&mut self, score: u32, lives: u32, time_left: u32);
    fn render_feedback(&mut self, kind: FeedbackKind);
    fn show_screen(&mut self, screen: Screen);
    fn play_sound(&mut self, cue: SoundCue);
}

/// Route an event batch to the presenter, then refresh the HUD once.
///
/// Sounds are dropped while `snapshot.muted` is set.
pub fn present<P: Presenter + ?Sized>(
    events: &[QuizEvent],
    snapshot: &QuizSnapshot,
    presenter: &mut P,
) {
    if events.is_empty() {
        return;
    }

    let sound = |presenter: &mut P, cue: SoundCue| {
        if !snapshot.muted {
            presenter.play_sound(cue);
        }
    };

    for event in events {
        match *event {
            QuizEvent::Started => {
                presenter.show_screen(Screen::Game);
                sound(presenter, SoundCue::Start);
            }
            QuizEvent::QuestionReady { a, b, ref options } => {
                presenter.render_question(a, b, options);
            }
            QuizEvent::Correct { .. } => {
                presenter.render_feedback(FeedbackKind::Correct);
                sound(presenter, SoundCue::Correct);
            }
            QuizEvent::Wrong { cause, .. } => {
                let kind = match cause {
                    MissCause::WrongAnswer(_) => FeedbackKind::Wrong,
                    MissCause::Timeout => FeedbackKind::Timeout,
                };
                presenter.render_feedback(kind);
                sound(presenter, SoundCue::Wrong);
            }
            QuizEvent::GameOver { .. } => {
                sound(presenter, SoundCue::GameOver);
                presenter.show_screen(Screen::End);
            }
            QuizEvent::Tick { .. }
            | QuizEvent::NextQuestionPending(_)
            | QuizEvent::MuteToggled(_) => {}
        }
    }

    presenter.render_hud(snapshot.score, snapshot.lives, snapshot.time_left);
}
