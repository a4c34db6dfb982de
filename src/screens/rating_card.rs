//! Rating session for one restaurant.
//!
//! A card is created fresh whenever a restaurant is selected and dropped when
//! another one is, taking its ratings and pending timers with it.

use std::time::Instant;

use crate::audio::SoundCue;
use crate::confetti::Burst;
use crate::models::{Category, Face, Ratings, Restaurant, RestaurantTheme, Score};
use crate::timer::{CONFETTI_DURATION, HIGHLIGHT_DURATION, Timer};

#[derive(Debug, Clone)]
pub struct RatingCard {
    restaurant: Restaurant,
    ratings: Ratings,
    active_category: Option<Category>,
    highlight: Timer,
    confetti: Option<Burst>,
    confetti_timer: Timer,
    completion_dismissed: bool,
    focused_category: Category,
    focused_score: Score,
}

impl RatingCard {
    pub fn new(restaurant: Restaurant, start_unrated: bool) -> Self {
        let ratings = if start_unrated {
            Ratings::unrated()
        } else {
            Ratings::default()
        };
        Self {
            restaurant,
            ratings,
            active_category: None,
            highlight: Timer::default(),
            confetti: None,
            confetti_timer: Timer::default(),
            completion_dismissed: false,
            focused_category: Category::Overall,
            focused_score: Score::Excellent,
        }
    }

    pub fn restaurant(&self) -> Restaurant {
        self.restaurant
    }

    pub fn theme(&self) -> &'static RestaurantTheme {
        self.restaurant.theme()
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    /// Record a score and start its transient effects.
    ///
    /// Returns the cue to play; playing it is left to the caller so a
    /// failing audio device cannot interrupt rating.
    pub fn select_score(&mut self, category: Category, score: Score, now: Instant) -> SoundCue {
        self.ratings.set(category, score);
        self.completion_dismissed = false;

        self.active_category = Some(category);
        self.highlight.arm(now, HIGHLIGHT_DURATION);

        if score.is_excellent() {
            self.confetti = Some(Burst::new(&mut rand::rng(), self.theme().accent, now));
            self.confetti_timer.arm(now, CONFETTI_DURATION);
        }

        tracing::debug!(
            restaurant = %self.restaurant,
            %category,
            score = score.value(),
            average = self.average(),
            "Score selected"
        );
        SoundCue::for_score(score)
    }

    /// Select the focused option for the focused category
    pub fn select_focused(&mut self, now: Instant) -> SoundCue {
        self.select_score(self.focused_category, self.focused_score, now)
    }

    /// Expire the highlight and confetti timers
    pub fn tick(&mut self, now: Instant) {
        if self.highlight.fire(now) {
            self.active_category = None;
        }
        if self.confetti_timer.fire(now) {
            self.confetti = None;
        }
    }

    pub fn dismiss_completion(&mut self) {
        self.completion_dismissed = true;
    }

    pub fn active_category(&self) -> Option<Category> {
        self.active_category
    }

    pub fn show_confetti(&self) -> bool {
        self.confetti.is_some()
    }

    pub fn confetti(&self) -> Option<&Burst> {
        self.confetti.as_ref()
    }

    pub fn completed_count(&self) -> usize {
        self.ratings.completed_count()
    }

    /// Completion dialog visibility, recomputed from the ratings on every read
    pub fn show_completion_message(&self) -> bool {
        self.ratings.is_complete() && !self.completion_dismissed
    }

    pub fn average(&self) -> u8 {
        self.ratings.average()
    }

    pub fn face(&self) -> Face {
        self.ratings.face()
    }

    pub fn focused_category(&self) -> Category {
        self.focused_category
    }

    pub fn focused_score(&self) -> Score {
        self.focused_score
    }

    pub fn focus_next_category(&mut self) {
        self.focused_category = self.focused_category.next();
    }

    pub fn focus_prev_category(&mut self) {
        self.focused_category = self.focused_category.prev();
    }

    pub fn focus_next_score(&mut self) {
        self.focused_score = match self.focused_score {
            Score::Good => Score::VeryGood,
            Score::VeryGood | Score::Excellent => Score::Excellent,
        };
    }

    pub fn focus_prev_score(&mut self) {
        self.focused_score = match self.focused_score {
            Score::Excellent => Score::VeryGood,
            Score::VeryGood | Score::Good => Score::Good,
        };
    }
}
