//! UI module for survey-tui
//!
//! This module contains the rendering functions for every screen: the login
//! card, the welcome splash, the restaurant selector, the rating card and the
//! overlays drawn on top of it.

mod card;
mod helpers;
mod login;
mod overlay;
mod survey;

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::{App, Screen};
use crate::screens::{SurveyPhase, SurveyScreen};
use crate::theme::{BG_NAVY, GOLD};

/// Draw the whole frame for the current app state
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Screen content
            Constraint::Length(1), // Bottom bar (single line)
        ])
        .split(frame.area());
    let content_area = main_layout[0];
    let bottom_bar_area = main_layout[1];
    let tick = app.animation_tick(now);

    let hints = match &app.screen {
        Screen::Login(login) => {
            login::render_login(content_area, login, tick, frame);
            if login.is_logging_in() {
                " q: Quit "
            } else {
                " Enter: Login | q: Quit "
            }
        }
        Screen::Survey(survey) => render_survey(content_area, survey, tick, now, frame),
    };

    let keybindings =
        Paragraph::new(hints).style(Style::default().fg(BG_NAVY).bg(GOLD));
    frame.render_widget(keybindings, bottom_bar_area);
}

fn render_survey(
    area: Rect,
    survey: &SurveyScreen,
    tick: u64,
    now: Instant,
    frame: &mut Frame,
) -> &'static str {
    if survey.phase() == SurveyPhase::Welcoming {
        survey::render_welcome(area, tick, frame);
        return " q: Quit ";
    }

    frame.render_widget(Block::default().style(Style::default().bg(BG_NAVY)), area);
    let column = helpers::centered_rect(area, 72, area.height);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Length(3), // Restaurant selector
            Constraint::Min(10),   // Rating card
        ])
        .split(column);

    survey::render_heading(rows[0], frame);
    survey::render_selector(rows[1], survey.selected_restaurant(), frame);

    let card = survey.card();
    let card_inner = card::render_card(rows[2], card, frame);
    if let Some(burst) = card.confetti() {
        overlay::render_confetti(card_inner, burst, now, frame);
    }
    if card.show_completion_message() {
        overlay::render_completion(rows[2], card, frame);
        return " Enter/Esc: Close | 1-3/Tab: Restaurant | q: Quit ";
    }
    " ↑↓: Category | ←→ Enter: Rate | g/v/e: Good/Very Good/Excellent | 1-3/Tab: Restaurant | q: Quit "
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::audio::SilentPlayer;
    use crate::config::Settings;
    use crate::navigation::Route;
    use crate::timer::{LOGIN_REDIRECT_DELAY, WELCOME_DURATION};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 60)).unwrap();
        terminal.draw(|frame| render(frame, app, now)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    #[test]
    fn test_login_screen_renders() {
        let now = Instant::now();
        let mut app = App::new(Settings::default(), Box::new(SilentPlayer), Route::Login, now);
        let text = draw(&app, now);
        assert!(text.contains("Welcome to Disney Cruise Line"));
        assert!(text.contains("Login"));

        press(&mut app, KeyCode::Enter, now);
        let text = draw(&app, now);
        assert!(text.contains("Redirecting to the main page..."));
    }

    #[test]
    fn test_welcome_splash_renders() {
        let now = Instant::now();
        let app = App::new(
            Settings::default(),
            Box::new(SilentPlayer),
            Route::survey_from_login(),
            now,
        );
        let text = draw(&app, now);
        assert!(text.contains("Preparing your magical survey experience..."));
        assert!(!text.contains("Select Restaurant"));
    }

    #[test]
    fn test_interactive_survey_renders() {
        let start = Instant::now();
        let mut app = App::new(Settings::default(), Box::new(SilentPlayer), Route::Login, start);
        press(&mut app, KeyCode::Enter, start);
        let t = start + LOGIN_REDIRECT_DELAY;
        app.tick(t);
        let t = t + WELCOME_DURATION;
        app.tick(t);

        let text = draw(&app, t);
        assert!(text.contains("Select Restaurant"));
        assert!(text.contains("Royal Palace"));
        assert!(text.contains("Animator's Palate"));
        assert!(text.contains("Thank you!"));

        press(&mut app, KeyCode::Esc, t);
        let text = draw(&app, t);
        assert!(!text.contains("Thank you!"));
        assert!(text.contains("Overall Experience"));
        assert!(text.contains("Food Quality"));
        assert!(text.contains("3 of 3 completed"));
        assert!(text.contains("Final Score"));
        assert!(text.contains("100%"));
        assert!(text.contains("/file.svg"));
        assert!(!text.contains("We're sorry"));
    }

    #[test]
    fn test_low_score_shows_apology() {
        let start = Instant::now();
        let mut app = App::new(
            Settings::default(),
            Box::new(SilentPlayer),
            Route::survey_from_login(),
            start,
        );
        let t = start + WELCOME_DURATION;
        app.tick(t);
        press(&mut app, KeyCode::Esc, t);
        press(&mut app, KeyCode::Char('g'), t);
        press(&mut app, KeyCode::Esc, t);

        let text = draw(&app, t);
        assert!(text.contains("We're sorry"));
        assert!(text.contains("50%"));
        assert!(text.contains("83%"));
    }
}
