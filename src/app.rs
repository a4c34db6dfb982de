//! Application state and core logic for the survey TUI.
//!
//! This module contains the `App` struct which owns the mounted screen, the
//! settings it was started with and the cue player, and routes key presses
//! and ticks to the screen that is showing.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::audio::{SoundCue, SoundPlayer};
use crate::config::Settings;
use crate::models::{Restaurant, Score};
use crate::navigation::Route;
use crate::screens::{LoginScreen, Mount, SurveyScreen};
use crate::theme::ANIMATION_FRAME_MS;

/// Screen currently mounted
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Survey(SurveyScreen),
}

/// Application state
pub struct App {
    pub screen: Screen,
    pub route: Route,
    pub settings: Settings,
    sound: Box<dyn SoundPlayer>,
    pub session_start: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings, sound: Box<dyn SoundPlayer>, route: Route, now: Instant) -> Self {
        let mut app = Self {
            screen: Screen::Login(LoginScreen::new()),
            route: Route::Login,
            settings,
            sound,
            session_start: now,
            should_quit: false,
        };
        app.navigate(route, now);
        app
    }

    /// Mount the screen for `route`, following any redirect it issues
    pub fn navigate(&mut self, route: Route, now: Instant) {
        let mut route = route;
        loop {
            tracing::info!(%route, "Navigating");
            self.route = route;
            match route {
                Route::Login => {
                    self.screen = Screen::Login(LoginScreen::new());
                    return;
                }
                Route::Survey { from_login } => {
                    match SurveyScreen::mount(from_login, self.settings.survey_options(), now) {
                        Mount::Mounted(survey) => {
                            self.screen = Screen::Survey(survey);
                            return;
                        }
                        Mount::Redirect(next) => route = next,
                    }
                }
            }
        }
    }

    /// Animation frame counter derived from elapsed time
    pub fn animation_tick(&self, now: Instant) -> u64 {
        (now.saturating_duration_since(self.session_start).as_millis() / ANIMATION_FRAME_MS) as u64
    }

    /// Advance timers on the mounted screen
    pub fn tick(&mut self, now: Instant) {
        let redirect = match &mut self.screen {
            Screen::Login(login) => login.tick(now),
            Screen::Survey(survey) => {
                survey.tick(now);
                None
            }
        };
        if let Some(route) = redirect {
            self.navigate(route, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        let cue = match &mut self.screen {
            Screen::Login(login) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char('l')) {
                    login.submit_login(now);
                }
                None
            }
            Screen::Survey(survey) => Self::handle_survey_key(survey, key, now),
        };
        if let Some(cue) = cue {
            self.play_cue(cue);
        }
    }

    fn handle_survey_key(survey: &mut SurveyScreen, key: KeyEvent, now: Instant) -> Option<SoundCue> {
        if !survey.is_interactive() {
            return None;
        }

        // Restaurant selector sits outside the card and stays usable under the dialog
        let selected = survey.selected_restaurant();
        let restaurant = match key.code {
            KeyCode::Char(c @ '1'..='3') => Restaurant::from_index(c as usize - '1' as usize),
            KeyCode::Tab => Some(selected.next()),
            KeyCode::BackTab => Some(selected.prev()),
            _ => None,
        };
        if let Some(restaurant) = restaurant {
            survey.select_restaurant(restaurant);
            return None;
        }

        let card = survey.card_mut()?;
        if card.show_completion_message() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('c')) {
                card.dismiss_completion();
            }
            return None;
        }

        let focused = card.focused_category();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => card.focus_prev_category(),
            KeyCode::Down | KeyCode::Char('j') => card.focus_next_category(),
            KeyCode::Left | KeyCode::Char('h') => card.focus_prev_score(),
            KeyCode::Right | KeyCode::Char('l') => card.focus_next_score(),
            KeyCode::Enter | KeyCode::Char(' ') => return Some(card.select_focused(now)),
            KeyCode::Char('g') => return Some(card.select_score(focused, Score::Good, now)),
            KeyCode::Char('v') => return Some(card.select_score(focused, Score::VeryGood, now)),
            KeyCode::Char('e') => return Some(card.select_score(focused, Score::Excellent, now)),
            _ => {}
        }
        None
    }

    /// Best-effort; failures are logged and otherwise ignored
    fn play_cue(&self, cue: SoundCue) {
        if let Err(err) = self.sound.play(cue, self.settings.volume) {
            tracing::debug!(?cue, "Audio play prevented: {err}");
        }
    }
}
