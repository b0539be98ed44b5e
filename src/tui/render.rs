//! Rendering
//!
//! `draw` is a pure function of the state record: identical state produces
//! an identical buffer. No mutation, no clocks, no randomness.

use crate::ui::{SearchUi, ToastKind, VoiceCaptureState};
use ratatui::layout::{Constraint, Direction, Layout, Position};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, ui: &SearchUi) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search box
            Constraint::Length(1), // Toast
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    draw_search_box(frame, ui, chunks[1]);
    draw_toast(frame, ui, chunks[2]);
    draw_results(frame, ui, chunks[3]);
    draw_footer(frame, ui, chunks[4]);
}

fn draw_title(frame: &mut Frame, area: ratatui::layout::Rect) {
    let title = Line::from(Span::styled(
        " A descent Search engine. Search anything...",
        Style::default().add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_search_box(frame: &mut Frame, ui: &SearchUi, area: ratatui::layout::Rect) {
    let mic = if !ui.speech_enabled {
        Span::raw("")
    } else {
        match ui.voice {
            VoiceCaptureState::Listening => Span::styled(
                " \u{1F3A4} listening ",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            VoiceCaptureState::Idle => Span::styled(
                " \u{1F3A4} F2 ",
                Style::default().add_modifier(Modifier::DIM),
            ),
        }
    };

    let block = Block::bordered()
        .title(" voxsearch ")
        .title_top(Line::from(mic).right_aligned());

    let content = if ui.query.is_empty() {
        let placeholder = match ui.voice {
            VoiceCaptureState::Listening => "Listening...",
            VoiceCaptureState::Idle => "Search...",
        };
        Line::from(vec![
            Span::raw(" \u{1F50D} "),
            Span::styled(placeholder, Style::default().add_modifier(Modifier::DIM)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" \u{1F50D} "),
            Span::raw(ui.query.as_str()),
        ])
    };

    frame.render_widget(Paragraph::new(content).block(block), area);

    // Border (1) + space (1) + search icon (2) + space (1) before the text
    let cursor_x = area.x + 1 + 4 + ui.query[..ui.cursor].width() as u16;
    let cursor_y = area.y + 1;
    frame.set_cursor_position(Position::new(cursor_x, cursor_y));
}

fn draw_toast(frame: &mut Frame, ui: &SearchUi, area: ratatui::layout::Rect) {
    let Some(toast) = &ui.toast else {
        return;
    };

    let color = match toast.kind {
        ToastKind::Info => Color::Cyan,
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        format!(" {}", toast.message),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_results(frame: &mut Frame, ui: &SearchUi, area: ratatui::layout::Rect) {
    let mut lines = Vec::with_capacity(ui.results.len() * 4);
    for result in &ui.results {
        lines.push(Line::from(Span::styled(
            format!(" {}. {}", result.position, result.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("    {}", result.snippet)));
        lines.push(Line::from(vec![
            Span::styled(
                format!("    {}", result.displayed_link),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Span::raw("  "),
            Span::styled(
                result.link.as_str(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn draw_footer(frame: &mut Frame, ui: &SearchUi, area: ratatui::layout::Rect) {
    let text = if ui.loading {
        " Searching..."
    } else {
        " Enter search | F2 voice | Esc quit"
    };
    let line = Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::DIM),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
