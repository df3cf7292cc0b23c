//! Start, game and end screens.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_overlay, render_status_bar,
};
use crate::app::QuizView;
use ninenine::core::constants::OPTION_COUNT;
use ninenine::quiz::input::GRID_COLUMNS;
use ninenine::quiz::{FeedbackKind, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

const TITLE: &str = " Nine Nine ";
const ACCENT: Color = Color::LightCyan;
const HEART: &str = "\u{2665}"; // ♥
const EMPTY_HEART: &str = "\u{2661}"; // ♡
const TIMER_FULL: char = '\u{2588}'; // █
const TIMER_EMPTY: char = '\u{2591}'; // ░

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView, cursor: usize) {
    match view.screen {
        Screen::Start => render_start(frame, area),
        Screen::Game => render_game(frame, area, view, cursor),
        Screen::End => render_end(frame, area, view),
    }
}

fn render_start(frame: &mut Frame, area: Rect) {
    render_overlay(
        frame,
        area,
        ACCENT,
        "NINE NINE",
        "Pick the right product before the timer runs out.",
        &[("[Enter]", "Start"), ("[M]", "Mute"), ("[Q]", "Quit")],
    );
}

fn render_end(frame: &mut Frame, area: Rect, view: &QuizView) {
    let message = format!("Final score: {}", view.score);
    render_overlay(
        frame,
        area,
        Color::Red,
        "GAME OVER",
        &message,
        &[("[Enter]", "Play again"), ("[Q]", "Quit")],
    );
}

fn render_game(frame: &mut Frame, area: Rect, view: &QuizView, cursor: usize) {
    let now = Instant::now();
    let feedback = view.active_feedback(now);
    let border_color = match feedback {
        Some(FeedbackKind::Correct) => Color::Green,
        Some(FeedbackKind::Wrong) | Some(FeedbackKind::Timeout) => Color::Red,
        None => ACCENT,
    };

    let layout = create_game_layout(frame, area, TITLE, border_color, 10, 26);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(6)])
        .split(layout.content);

    render_question(frame, chunks[0], view);
    render_options(frame, chunks[1], view, cursor, view.option_feedback(now));
    render_status(frame, layout.status_bar, feedback);
    render_info(frame, layout.info_panel, view);
}

fn render_question(frame: &mut Frame, area: Rect, view: &QuizView) {
    let Some((a, b, _)) = view.question else {
        return;
    };
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  \u{00D7}  {}  =  ?", a, b),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(text, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    view: &QuizView,
    cursor: usize,
    feedback: Option<FeedbackKind>,
) {
    let Some((_, _, options)) = view.question else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);

        for (col_index, cell) in cells.iter().enumerate() {
            let slot = row_index * GRID_COLUMNS + col_index;
            if slot >= OPTION_COUNT {
                continue;
            }
            render_option(frame, *cell, slot, options[slot], slot == cursor, feedback);
        }
    }
}

fn render_option(
    frame: &mut Frame,
    area: Rect,
    slot: usize,
    value: u32,
    selected: bool,
    feedback: Option<FeedbackKind>,
) {
    let color = match (selected, feedback) {
        (true, Some(FeedbackKind::Correct)) => Color::Green,
        (true, Some(FeedbackKind::Wrong)) => Color::Red,
        (true, _) => Color::Yellow,
        (false, _) => Color::DarkGray,
    };

    let mut style = Style::default().fg(color);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(format!(" {} ", slot + 1));

    let text = Paragraph::new(Span::styled(value.to_string(), style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(text, area);
}

fn render_status(frame: &mut Frame, area: Rect, feedback: Option<FeedbackKind>) {
    let (message, color) = match feedback {
        Some(FeedbackKind::Correct) => ("Correct!", Color::Green),
        Some(FeedbackKind::Wrong) => ("Wrong!", Color::Red),
        Some(FeedbackKind::Timeout) => ("Too slow!", Color::Red),
        None => ("", Color::White),
    };
    render_status_bar(
        frame,
        area,
        message,
        color,
        &[
            ("[1-4]", "Answer"),
            ("[\u{2190}\u{2191}\u{2192}\u{2193}/Enter]", "Pick"),
            ("[M]", "Mute"),
            ("[Q]", "Quit"),
        ],
    );
}

fn render_info(frame: &mut Frame, area: Rect, view: &QuizView) {
    let inner = render_info_panel_frame(frame, area);

    let timer_color = if view.time_left <= 2 {
        Color::Red
    } else if view.time_left <= 4 {
        Color::Yellow
    } else {
        Color::Green
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Score  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time   ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}s", view.time_left),
                Style::default().fg(timer_color),
            ),
        ]),
        Line::from(Span::styled(
            timer_bar(view.time_left, view.seconds_per_question),
            Style::default().fg(timer_color),
        )),
        Line::from(""),
        Line::from(Span::styled("Lives", Style::default().fg(Color::DarkGray))),
        hearts_line(view.lives, view.max_lives),
        Line::from(""),
        Line::from(vec![
            Span::styled("Sound  ", Style::default().fg(Color::DarkGray)),
            if view.muted {
                Span::styled("off", Style::default().fg(Color::Red))
            } else {
                Span::styled("on", Style::default().fg(Color::Green))
            },
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn timer_bar(time_left: u32, total: u32) -> String {
    let total = total.max(1) as usize;
    let filled = (time_left as usize).min(total);
    let mut bar = String::with_capacity(total * 3);
    bar.extend(std::iter::repeat(TIMER_FULL).take(filled));
    bar.extend(std::iter::repeat(TIMER_EMPTY).take(total - filled));
    bar
}

fn hearts_line(lives: u32, max_lives: u32) -> Line<'static> {
    let spans: Vec<Span> = (0..max_lives)
        .map(|i| {
            if i < lives {
                Span::styled(format!("{} ", HEART), Style::default().fg(Color::Red))
            } else {
                Span::styled(
                    format!("{} ", EMPTY_HEART),
                    Style::default().fg(Color::DarkGray),
                )
            }
        })
        .collect();
    Line::from(spans)
}
