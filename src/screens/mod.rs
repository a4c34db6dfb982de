//! Screen state machines.
//!
//! - `login`: mock login with a timed redirect
//! - `survey`: marker guard, welcome splash and restaurant selection
//! - `rating_card`: ratings and transient effects for one restaurant

mod login;
mod rating_card;
mod survey;

pub use login::LoginScreen;
pub use rating_card::RatingCard;
pub use survey::{Mount, SurveyOptions, SurveyPhase, SurveyScreen};
