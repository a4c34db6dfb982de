//! Confetti and the completion dialog, drawn over the rating card

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::helpers::{centered_rect, wrap_text};
use crate::confetti::Burst;
use crate::screens::RatingCard;
use crate::theme::{BG_DIALOG, ROUNDED_BORDERS, TEXT_DARK, TEXT_MUTED};

/// Paint each visible particle directly into the buffer
pub fn render_confetti(area: Rect, burst: &Burst, now: Instant, frame: &mut Frame) {
    if area.is_empty() {
        return;
    }
    let buffer = frame.buffer_mut();
    for (x, y, particle) in burst.visible(now) {
        let col = area.x + ((x * f32::from(area.width)) as u16).min(area.width - 1);
        let row = area.y + ((y * f32::from(area.height)) as u16).min(area.height - 1);
        if let Some(cell) = buffer.cell_mut((col, row)) {
            cell.set_symbol(particle.glyph).set_fg(particle.color);
        }
    }
}

/// Modal thank-you dialog centered in `area`
pub fn render_completion(area: Rect, card: &RatingCard, frame: &mut Frame) {
    let accent = card.theme().accent;
    let dialog_area = centered_rect(area, 46, 12);
    let text_width = dialog_area.width.saturating_sub(4) as usize;

    let mut lines = vec![
        Line::from("🎉"),
        Line::styled(
            "Thank you!",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
    ];
    let thanks = format!(
        "Thank you for completing the survey for {}!",
        card.restaurant()
    );
    lines.extend(
        wrap_text(&thanks, text_width)
            .into_iter()
            .map(|l| Line::styled(l, Style::default().fg(TEXT_DARK))),
    );
    lines.extend(
        wrap_text("Your feedback helps us create magical experiences.", text_width)
            .into_iter()
            .map(|l| Line::styled(l, Style::default().fg(TEXT_MUTED))),
    );
    lines.push(Line::default());
    lines.push(Line::styled(
        "  Close  ",
        Style::default()
            .fg(BG_DIALOG)
            .bg(accent)
            .add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(BG_DIALOG));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        dialog_area,
    );
}
