//! Survey screen: guarded entry, welcome splash, then the interactive card.

use std::time::Instant;

use crate::models::Restaurant;
use crate::navigation::Route;
use crate::screens::RatingCard;
use crate::timer::{Timer, WELCOME_DURATION};

/// Options applied to every card the survey mounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyOptions {
    pub default_restaurant: Restaurant,
    pub start_unrated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyPhase {
    Welcoming,
    Interactive,
}

/// Outcome of mounting the survey
#[derive(Debug)]
pub enum Mount {
    Mounted(SurveyScreen),
    /// The marker was missing; nothing is rendered
    Redirect(Route),
}

#[derive(Debug, Clone)]
pub struct SurveyScreen {
    phase: SurveyPhase,
    welcome: Timer,
    options: SurveyOptions,
    card: RatingCard,
}

impl SurveyScreen {
    /// Check the navigation marker and start the welcome splash
    pub fn mount(from_login: bool, options: SurveyOptions, now: Instant) -> Mount {
        if !from_login {
            tracing::info!("Survey opened without login marker; redirecting to login");
            return Mount::Redirect(Route::Login);
        }

        let mut welcome = Timer::default();
        welcome.arm(now, WELCOME_DURATION);
        Mount::Mounted(Self {
            phase: SurveyPhase::Welcoming,
            welcome,
            options,
            card: RatingCard::new(options.default_restaurant, options.start_unrated),
        })
    }

    pub fn phase(&self) -> SurveyPhase {
        self.phase
    }

    pub fn is_interactive(&self) -> bool {
        self.phase == SurveyPhase::Interactive
    }

    pub fn selected_restaurant(&self) -> Restaurant {
        self.card.restaurant()
    }

    pub fn card(&self) -> &RatingCard {
        &self.card
    }

    /// Mutable card access, only once the splash is gone
    pub fn card_mut(&mut self) -> Option<&mut RatingCard> {
        self.is_interactive().then_some(&mut self.card)
    }

    /// Swap in a fresh card for `restaurant`. Ignored during the splash and
    /// when `restaurant` is already selected.
    pub fn select_restaurant(&mut self, restaurant: Restaurant) {
        if !self.is_interactive() || restaurant == self.selected_restaurant() {
            return;
        }
        tracing::info!(%restaurant, "Restaurant selected");
        self.card = RatingCard::new(restaurant, self.options.start_unrated);
    }

    pub fn tick(&mut self, now: Instant) {
        if self.welcome.fire(now) {
            self.phase = SurveyPhase::Interactive;
            tracing::debug!("Welcome splash finished");
        }
        if self.is_interactive() {
            self.card.tick(now);
        }
    }
}
