//! Login card rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::helpers::centered_rect;
use crate::models::Face;
use crate::screens::LoginScreen;
use crate::theme::{
    BG_CARD, BG_NAVY, GOLD, GOLD_DIM, ROUNDED_BORDERS, TEXT_PRIMARY, TEXT_SECONDARY,
    get_pulse_color,
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the login card centered on a navy page
pub fn render_login(area: Rect, login: &LoginScreen, tick: u64, frame: &mut Frame) {
    frame.render_widget(Block::default().style(Style::default().bg(BG_NAVY)), area);

    let card_area = centered_rect(area, 44, 11);
    let card = Block::default()
        .title(Line::from(" Disney Cruise Line ").centered())
        .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(GOLD))
        .style(Style::default().bg(BG_CARD));

    let mut lines = vec![Line::default()];
    if login.is_logging_in() {
        let spinner = SPINNER[(tick as usize) % SPINNER.len()];
        lines.push(Line::styled(
            "Redirecting to the main page...",
            Style::default().fg(TEXT_SECONDARY),
        ));
        lines.push(Line::default());
        lines.push(Line::styled(
            spinner,
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));
    } else {
        lines.push(Line::styled(
            "Welcome to Disney Cruise Line",
            Style::default().fg(TEXT_SECONDARY),
        ));
        lines.push(Line::default());
        lines.push(Line::styled(
            "   Login   ",
            Style::default()
                .fg(BG_NAVY)
                .bg(get_pulse_color(tick, GOLD, GOLD_DIM))
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::default());
    lines.push(Line::styled(Face::Happy.glyph(), Style::default().fg(TEXT_PRIMARY)));

    let paragraph = Paragraph::new(lines)
        .block(card)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card_area);
}
