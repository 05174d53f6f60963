//! History sidebar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::models::{App, FormField};

pub fn render_history_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.has_api_key() && app.focus == FormField::History;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .title(" 🕒 Previous Generations ");

    if app.history.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No generations yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Previews wrap under the number instead of being clipped at the border
    let inner_width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = app
        .history
        .newest_first()
        .enumerate()
        .map(|(i, (number, entry))| {
            let is_selected = focused && i == app.history_selected;
            let is_shown = app.displayed_entry == Some(number);

            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_shown {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };

            let label = format!("{}. ", number);
            let indent = 2 + label.len();
            let preview = entry.preview().replace('\n', " ");
            let wrapped = textwrap::wrap(&preview, inner_width.saturating_sub(indent).max(1));

            let lines: Vec<Line> = wrapped
                .iter()
                .enumerate()
                .map(|(row, chunk)| {
                    if row == 0 {
                        Line::from(vec![
                            Span::raw(if is_shown { "▶ " } else { "  " }),
                            Span::styled(label.clone(), style.add_modifier(Modifier::BOLD)),
                            Span::styled(chunk.to_string(), style),
                        ])
                    } else {
                        Line::from(vec![
                            Span::raw(" ".repeat(indent)),
                            Span::styled(chunk.to_string(), style),
                        ])
                    }
                })
                .collect();
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default().with_selected(Some(app.history_selected));
    f.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
