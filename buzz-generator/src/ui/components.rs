//! Reusable UI components (dropdown, banners, helpers)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::generator::Language;
use crate::models::{App, StatusKind};

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn status_style(kind: StatusKind) -> Style {
    match kind {
        StatusKind::Info => Style::default().fg(Color::Cyan),
        StatusKind::Success => Style::default().fg(Color::Green),
        StatusKind::Warning => Style::default().fg(Color::Yellow),
        StatusKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

/// Language list drawn just below `anchor`
pub fn render_dropdown(f: &mut Frame, anchor: Rect, app: &App) {
    let screen = f.area();
    let height = Language::ALL.len() as u16 + 2;

    let dropdown_area = Rect {
        x: anchor.x,
        y: std::cmp::min(anchor.bottom(), screen.bottom().saturating_sub(height)),
        width: anchor.width,
        height: std::cmp::min(height, screen.height),
    };

    let items: Vec<ListItem> = Language::ALL
        .iter()
        .enumerate()
        .map(|(i, language)| {
            let is_selected = i == app.dropdown_selected;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(language.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Language ")
            .style(Style::default().bg(Color::DarkGray)),
    );

    f.render_widget(Clear, dropdown_area);
    f.render_widget(list, dropdown_area);
}

/// Red bordered message box
pub fn render_error_banner(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let banner = Paragraph::new(Span::styled(
        message.to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(title.to_string()),
    );
    f.render_widget(banner, area);
}
