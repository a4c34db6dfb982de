//! Mock login: a single action that always succeeds after a short spinner.

use std::time::Instant;

use crate::navigation::Route;
use crate::timer::{LOGIN_REDIRECT_DELAY, Timer};

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    is_logging_in: bool,
    redirect: Timer,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logging_in(&self) -> bool {
        self.is_logging_in
    }

    /// Start the simulated login. Ignored while one is already running.
    pub fn submit_login(&mut self, now: Instant) {
        if self.is_logging_in {
            return;
        }
        self.is_logging_in = true;
        self.redirect.arm(now, LOGIN_REDIRECT_DELAY);
        tracing::info!("Login submitted; redirecting shortly");
    }

    /// Returns the survey route once the redirect delay has passed
    pub fn tick(&mut self, now: Instant) -> Option<Route> {
        self.redirect
            .fire(now)
            .then(Route::survey_from_login)
    }
}
