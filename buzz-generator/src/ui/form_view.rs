//! Input form rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{spinner_char, status_style};
use crate::models::{App, FormField};

const ANNOUNCEMENT_PLACEHOLDER: &str = "E.g. Launching our new AI health tracker...";
const CURSOR: &str = "▏";

fn field_block(title: &'static str, focused: bool, enabled: bool) -> Block<'static> {
    let border = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// Render the form and return the area of the language field (dropdown anchor)
pub fn render_form(f: &mut Frame, area: Rect, app: &App) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // API key
            Constraint::Length(6), // Announcement
            Constraint::Length(3), // Language + Generate
            Constraint::Length(3), // Status
        ])
        .split(area);

    let unlocked = app.has_api_key();

    // API key, masked
    let key_focused = app.focus == FormField::ApiKey;
    let mut key_spans = vec![Span::styled(
        "•".repeat(app.api_key.chars().count()),
        Style::default().fg(Color::White),
    )];
    if key_focused {
        key_spans.push(Span::raw(CURSOR));
    }
    let key_widget = Paragraph::new(Line::from(key_spans)).block(field_block(
        " 🔑 OpenAI API Key ",
        key_focused,
        true,
    ));
    f.render_widget(key_widget, chunks[0]);

    // Announcement
    let text_focused = unlocked && app.focus == FormField::Announcement;
    let announcement = if app.announcement.is_empty() && !text_focused {
        Paragraph::new(Span::styled(
            ANNOUNCEMENT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut lines: Vec<Line> = app
            .announcement
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if text_focused {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::raw(CURSOR));
            }
        }
        // Keep the end of long text visible
        let visible = chunks[1].height.saturating_sub(2) as usize;
        let skip = lines.len().saturating_sub(visible);
        Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
    };
    f.render_widget(
        announcement
            .wrap(Wrap { trim: false })
            .block(field_block(" 📝 What do you want to announce? ", text_focused, unlocked)),
        chunks[1],
    );

    // Language + Generate row
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);

    let language_focused = unlocked && app.focus == FormField::Language;
    let language_widget = Paragraph::new(Line::from(vec![
        Span::raw("◀ "),
        Span::styled(
            app.language.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ▶"),
    ]))
    .block(field_block(" 🌐 Choose language ", language_focused, unlocked));
    f.render_widget(language_widget, row[0]);

    let generate_focused = unlocked && app.focus == FormField::Generate;
    let can_generate = unlocked && !app.is_generating();
    let button_style = if generate_focused && can_generate {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if can_generate {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(Span::styled(" ✨ Generate Posts and Image ", button_style))
        .alignment(Alignment::Center)
        .block(field_block("", generate_focused, can_generate));
    f.render_widget(button, row[1]);

    // Status line
    let status_line = match &app.status {
        Some(status) => {
            let mut spans = Vec::new();
            if app.is_generating() {
                spans.push(Span::styled(
                    format!("{} ", spinner_char(app.spinner_frame)),
                    Style::default().fg(Color::Yellow),
                ));
            }
            spans.push(Span::styled(status.text.clone(), status_style(status.kind)));
            Line::from(spans)
        }
        None => Line::from(""),
    };
    let status_widget = Paragraph::new(status_line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    f.render_widget(status_widget, chunks[3]);

    row[0]
}
