//! Generated posts and image rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::components::{render_error_banner, spinner_char};
use crate::generator::Platform;
use crate::history::HistoryEntry;
use crate::models::{App, FormField};

const IMAGE_TITLE: &str = " 🖼️ AI-generated Image ";

pub fn render_results(f: &mut Frame, area: Rect, app: &App) {
    app.results_scroll_max.set(0);

    if app.is_generating() {
        let waiting = Paragraph::new(Line::from(vec![
            Span::styled(
                format!("{} ", spinner_char(app.spinner_frame)),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                "Generating content...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL).title(" 📄 Generated Posts "));
        f.render_widget(waiting, area);
        return;
    }

    let (number, entry) = match app.displayed_entry.zip(app.displayed()) {
        Some(shown) => shown,
        None => {
            let intro = Paragraph::new(vec![
                Line::from("Generate buzz-worthy posts for LinkedIn, Instagram, and Twitter with an AI-generated image!"),
                Line::from(""),
                Line::from(Span::styled(
                    "Fill in the form above and press Generate.",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" 📄 Generated Posts "));
            f.render_widget(intro, area);
            return;
        }
    };

    let focused = app.focus == FormField::Results;
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        })
        .title(format!(
            " 📄 Generated Posts · Run #{} · {} · {} ",
            number,
            entry.language,
            entry.created_at.format("%H:%M:%S")
        ));
    let inner = outer.inner(area);

    let image = entry.image_url.as_ref().map(|url| {
        Paragraph::new(Span::styled(
            url.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(IMAGE_TITLE))
    });
    // Tall enough for the whole URL, but never more than half the pane
    let image_height = image
        .as_ref()
        .map(|p| p.line_count(inner.width) as u16)
        .unwrap_or(3)
        .clamp(3, (inner.height / 2).max(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(image_height)])
        .split(inner);

    let posts = Paragraph::new(post_lines(entry)).wrap(Wrap { trim: false });
    let max_scroll = posts
        .line_count(chunks[0].width)
        .saturating_sub(chunks[0].height as usize);
    app.results_scroll_max.set(max_scroll);
    let offset = app.results_scroll.min(max_scroll);

    let outer = if offset < max_scroll {
        outer.title_bottom(Line::from(" PgDn for more ").alignment(Alignment::Right))
    } else {
        outer
    };
    f.render_widget(outer, area);
    f.render_widget(posts.scroll((offset as u16, 0)), chunks[0]);

    match image {
        Some(image) => f.render_widget(image, chunks[1]),
        None => render_error_banner(f, chunks[1], IMAGE_TITLE, "Image generation failed."),
    }
}

/// The three posts as one block of text, each under its platform heading
fn post_lines(entry: &HistoryEntry) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for platform in Platform::ALL {
        let text = entry.posts.get(platform).unwrap_or_default();
        let style = if text.starts_with("Error generating post:") {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(Span::styled(
            format!("▌ {}", platform),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        for text_line in text.lines() {
            lines.push(Line::from(Span::styled(text_line.to_string(), style)));
        }
        lines.push(Line::from(""));
    }
    lines
}
