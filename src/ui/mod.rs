pub mod game_common;
pub mod quiz_scene;

use crate::app::QuizView;
use ratatui::Frame;

/// Draw the whole frame for the current screen.
pub fn draw_ui(frame: &mut Frame, view: &QuizView, cursor: usize) {
    let area = frame.size();
    quiz_scene::render(frame, area, view, cursor);
}
