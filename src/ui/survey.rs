//! Welcome splash, page heading and restaurant selector

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::centered_rect;
use crate::models::Restaurant;
use crate::theme::{
    BG_BUTTON, BG_CARD, BG_SPLASH, GOLD, ROUNDED_BORDERS, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Full-screen splash shown while the survey prepares
pub fn render_welcome(area: Rect, tick: u64, frame: &mut Frame) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_SPLASH)), area);

    // Gentle bounce: shift the block down one row every other beat
    let bounce = u16::from((tick / 3) % 2 == 1);
    let mut inner = centered_rect(area, 60, 5);
    inner.y = inner.y.saturating_add(bounce).min(area.bottom().saturating_sub(inner.height));

    let lines = vec![
        Line::from("✨🏰✨"),
        Line::default(),
        Line::styled(
            "Welcome to Disney Cruise Line",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Preparing your magical survey experience...",
            Style::default().fg(TEXT_SECONDARY),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Two-line page heading
pub fn render_heading(area: Rect, frame: &mut Frame) {
    let lines = vec![
        Line::styled(
            "Disney Cruise Line",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "✨ Guest Survey ✨",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Three restaurant buttons, the selected one filled with its accent
pub fn render_selector(area: Rect, selected: Restaurant, frame: &mut Frame) {
    let accent = selected.theme().accent;
    let block = Block::default()
        .title(Line::from(" Select Restaurant ").centered())
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(BG_CARD));

    let mut spans = Vec::new();
    for (i, restaurant) in Restaurant::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let label = format!(" {} {} ", i + 1, restaurant.name());
        let style = if *restaurant == selected {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(restaurant.theme().accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY).bg(BG_BUTTON)
        };
        spans.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
