//! Header and footer rendering functions

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{App, FormField};

pub fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let state = if app.is_generating() {
        "Generating..."
    } else if !app.has_api_key() {
        "Locked"
    } else {
        "Ready"
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "📣 Social Media Post Generator",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(state, Style::default().fg(Color::DarkGray)),
        Span::raw("      "),
        Span::styled("[Ctrl+Q]", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" Quit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(label),
    ]
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();

    if !app.has_api_key() {
        spans.extend(key_hint("TYPE", " your API key  "));
        spans.extend(key_hint("[Enter]", " Continue  "));
        spans.extend(key_hint("[Ctrl+Q]", " Quit"));
    } else if app.show_dropdown {
        spans.extend(key_hint("[↑↓]", " Choose  "));
        spans.extend(key_hint("[Enter]", " Select  "));
        spans.extend(key_hint("[Esc]", " Close"));
    } else {
        spans.extend(key_hint("[Tab]", " Next field  "));
        match app.focus {
            FormField::ApiKey => {
                spans.extend(key_hint("[Ctrl+U]", " Clear  "));
            }
            FormField::Announcement => {
                spans.extend(key_hint("[Enter]", " New line  "));
                spans.extend(key_hint("[Ctrl+U]", " Clear  "));
            }
            FormField::Language => {
                spans.extend(key_hint("[←→]", " Change  "));
                spans.extend(key_hint("[Enter]", " List  "));
            }
            FormField::Generate => {
                spans.extend(key_hint("[Enter]", " Generate  "));
            }
            FormField::Results => {
                spans.extend(key_hint("[↑↓]", " Scroll  "));
                spans.extend(key_hint("[Home/End]", " Top/Bottom  "));
            }
            FormField::History => {
                spans.extend(key_hint("[↑↓]", " Navigate  "));
                spans.extend(key_hint("[Enter]", " View  "));
            }
        }
        spans.extend(key_hint("[PgUp/PgDn]", " Scroll results  "));
        spans.extend(key_hint("[F5/Ctrl+G]", " Generate  "));
        spans.extend(key_hint("[Ctrl+Q]", " Quit"));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
