//! Rating card rendering: progress, the three categories and the final score

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::helpers::wrap_text;
use crate::models::{Category, Score};
use crate::screens::RatingCard;
use crate::theme::{
    BG_BUTTON, BG_CARD, BORDER_SUBTLE, GOLD, RED_APOLOGY, ROUNDED_BORDERS, SCORE_GOOD,
    SCORE_VERY_GOOD, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, tint,
};

/// Rows taken by one category block, borders included
const CATEGORY_HEIGHT: u16 = 9;

/// Gauge color for a score, accent when excellent
pub fn score_color(score: Option<Score>, accent: Color) -> Color {
    match score {
        Some(Score::Excellent) => accent,
        Some(Score::VeryGood) => SCORE_VERY_GOOD,
        Some(Score::Good) => SCORE_GOOD,
        None => BG_BUTTON,
    }
}

/// Render the full card. Returns the inner area so overlays can be drawn on it.
pub fn render_card(area: Rect, card: &RatingCard, frame: &mut Frame) -> Rect {
    let theme = card.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(theme.accent))
        .title_bottom(
            Line::from(format!(" {} ", theme.background_image))
                .right_aligned()
                .style(Style::default().fg(TEXT_MUTED)),
        )
        .style(Style::default().bg(BG_CARD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),               // Restaurant name
            Constraint::Length(2),               // Progress
            Constraint::Length(CATEGORY_HEIGHT), // Overall
            Constraint::Length(CATEGORY_HEIGHT), // Friendliness
            Constraint::Length(CATEGORY_HEIGHT), // Food
            Constraint::Min(3),                  // Final score
        ])
        .split(inner);

    let title = Line::from(vec![
        Span::raw(format!("{} ", theme.icon)),
        Span::styled(
            theme.name,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}", theme.icon)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);

    render_progress(rows[1], card, frame);
    for (i, category) in Category::ALL.iter().enumerate() {
        render_category(rows[2 + i], card, *category, frame);
    }
    render_final_score(rows[5], card, frame);

    inner
}

fn render_progress(area: Rect, card: &RatingCard, frame: &mut Frame) {
    let [text_area, gauge_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
    let completed = card.completed_count();
    let total = card.ratings().total();

    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(text_area);
    frame.render_widget(
        Paragraph::new("Survey Progress").style(Style::default().fg(TEXT_SECONDARY)),
        left,
    );
    frame.render_widget(
        Paragraph::new(format!("{} of {} completed", completed, total))
            .style(Style::default().fg(TEXT_SECONDARY))
            .alignment(Alignment::Right),
        right,
    );

    let percent = (completed * 100 / total.max(1)) as u16;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(card.theme().accent).bg(BG_BUTTON))
        .percent(percent)
        .label("");
    frame.render_widget(gauge, gauge_area);
}

fn render_category(area: Rect, card: &RatingCard, category: Category, frame: &mut Frame) {
    let accent = card.theme().accent;
    let active = card.active_category() == Some(category);
    let focused = card.focused_category() == category;
    let score = card.ratings().get(category);

    let (border_color, bg) = if active {
        (accent, tint(accent, BG_CARD, 0.2))
    } else if focused {
        (TEXT_SECONDARY, BG_CARD)
    } else {
        (BORDER_SUBTLE, BG_CARD)
    };
    let marker = if focused { "▶ " } else { "" };
    let block = Block::default()
        .title(
            Line::from(format!(" {}{} ", marker, category.label()))
                .centered()
                .style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        )
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Face
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Buttons
            Constraint::Length(2), // Apology
        ])
        .split(inner);

    let description: Vec<Line> = wrap_text(category.description(), inner.width as usize)
        .into_iter()
        .map(|line| Line::styled(line, Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC)))
        .collect();
    frame.render_widget(
        Paragraph::new(description).alignment(Alignment::Center),
        rows[0],
    );

    let face = score.map_or("·", |s| s.face().glyph());
    frame.render_widget(Paragraph::new(face).alignment(Alignment::Center), rows[1]);

    let value = card.ratings().value(category);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(score_color(score, accent)).bg(BG_BUTTON))
        .percent(u16::from(value))
        .label(Span::styled(
            format!("{}%", value),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, rows[2]);

    let mut buttons = Vec::new();
    for option in Score::ALL {
        if !buttons.is_empty() {
            buttons.push(Span::raw("  "));
        }
        let chosen = score == Some(option);
        let mut style = if chosen {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY).bg(BG_BUTTON)
        };
        if focused && card.focused_score() == option {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        buttons.push(Span::styled(format!(" {} ", option.label()), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(buttons)).alignment(Alignment::Center),
        rows[3],
    );

    if value < 100 {
        let apology = wrap_text(
            "We're sorry your experience didn't fully meet expectations.",
            inner.width as usize,
        );
        let lines: Vec<Line> = apology
            .into_iter()
            .map(|line| Line::styled(line, Style::default().fg(RED_APOLOGY)))
            .collect();
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows[4]);
    }
}

fn render_final_score(area: Rect, card: &RatingCard, frame: &mut Frame) {
    let lines = vec![
        Line::styled(
            "Final Score",
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{}%", card.average()),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ),
        Line::from(card.face().glyph()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color() {
        let accent = Color::Rgb(1, 2, 3);
        assert_eq!(score_color(Some(Score::Excellent), accent), accent);
        assert_eq!(score_color(Some(Score::VeryGood), accent), SCORE_VERY_GOOD);
        assert_eq!(score_color(Some(Score::Good), accent), SCORE_GOOD);
        assert_eq!(score_color(None, accent), BG_BUTTON);
    }
}
