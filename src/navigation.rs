//! Locations the app can navigate between.
//!
//! The only inter-screen contract is the `fromLogin=true` query parameter on
//! the survey location.

use std::fmt;

use url::Url;

/// Base used to resolve relative locations such as `/login`
const BASE: &str = "survey://app/";
const FROM_LOGIN_PARAM: &str = "fromLogin";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("invalid location {location:?}: {reason}")]
    Invalid { location: String, reason: String },
    #[error("no screen at {0}")]
    NotFound(String),
}

/// Navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    /// Survey entry point; `from_login` is the navigation marker
    Survey { from_login: bool },
}

impl Route {
    /// Parse a location like `/login` or `/?fromLogin=true`
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let invalid = |reason: String| RouteError::Invalid {
            location: location.to_string(),
            reason,
        };
        let base = Url::parse(BASE).map_err(|e| invalid(e.to_string()))?;
        let url = base.join(location).map_err(|e| invalid(e.to_string()))?;
        if url.scheme() != base.scheme() || url.host_str() != base.host_str() {
            return Err(invalid("external locations are not routable".to_string()));
        }

        match url.path().trim_end_matches('/') {
            "" => {
                let from_login = url
                    .query_pairs()
                    .any(|(key, value)| key == FROM_LOGIN_PARAM && value == "true");
                Ok(Route::Survey { from_login })
            }
            "/login" => Ok(Route::Login),
            other => Err(RouteError::NotFound(other.to_string())),
        }
    }

    /// Where the login flow sends the user
    pub fn survey_from_login() -> Self {
        Route::Survey { from_login: true }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/login"),
            Route::Survey { from_login: true } => write!(f, "/?{}=true", FROM_LOGIN_PARAM),
            Route::Survey { from_login: false } => f.write_str("/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login() {
        assert_eq!(Route::parse("/login").unwrap(), Route::Login);
        assert_eq!(Route::parse("/login/").unwrap(), Route::Login);
    }

    #[test]
    fn test_parse_survey_marker() {
        assert_eq!(
            Route::parse("/?fromLogin=true").unwrap(),
            Route::Survey { from_login: true }
        );
        assert_eq!(
            Route::parse("/").unwrap(),
            Route::Survey { from_login: false }
        );
        assert_eq!(
            Route::parse("/?fromLogin=false").unwrap(),
            Route::Survey { from_login: false }
        );
        assert_eq!(
            Route::parse("/?fromLogin=TRUE").unwrap(),
            Route::Survey { from_login: false }
        );
        assert_eq!(
            Route::parse("/?other=1&fromLogin=true").unwrap(),
            Route::Survey { from_login: true }
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Route::parse("/admin"),
            Err(RouteError::NotFound("/admin".to_string()))
        );
        assert!(matches!(
            Route::parse("https://example.com/login"),
            Err(RouteError::Invalid { .. })
        ));
    }

    #[test]
    fn test_display_matches_parse() {
        for route in [
            Route::Login,
            Route::Survey { from_login: true },
            Route::Survey { from_login: false },
        ] {
            assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
        }
        assert_eq!(Route::survey_from_login().to_string(), "/?fromLogin=true");
    }
}
