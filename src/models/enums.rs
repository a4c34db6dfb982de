//! Enums used throughout the survey
//!
//! Categories, scores and the faces used to display them. Parsing from raw
//! values is strict: anything outside the fixed sets is a `SurveyError`.

use std::fmt;
use std::str::FromStr;

use crate::error::SurveyError;

/// One of the three fixed survey dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Overall,
    Friendliness,
    Food,
}

impl Category {
    /// Display order on the rating card
    pub const ALL: [Category; 3] = [Category::Overall, Category::Friendliness, Category::Food];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Overall => "overall",
            Category::Friendliness => "friendliness",
            Category::Food => "food",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Overall => "Overall Experience",
            Category::Friendliness => "Friendliness",
            Category::Food => "Food Quality",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Overall => "Evaluate performance of the service team.",
            Category::Friendliness => "Evaluate the kindness and attentiveness of the staff.",
            Category::Food => "Evaluate the taste, freshness, and presentation of the food.",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Overall => 0,
            Category::Friendliness => 1,
            Category::Food => 2,
        }
    }

    /// Next category down, wrapping to the top
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category up, wrapping to the bottom
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| SurveyError::UnknownCategory(s.to_string()))
    }
}

/// One of the three allowed rating values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    Good,
    VeryGood,
    Excellent,
}

impl Score {
    /// Button order on the rating card
    pub const ALL: [Score; 3] = [Score::Good, Score::VeryGood, Score::Excellent];

    pub fn value(&self) -> u8 {
        match self {
            Score::Good => 50,
            Score::VeryGood => 75,
            Score::Excellent => 100,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Score::Good => "Good",
            Score::VeryGood => "Very Good",
            Score::Excellent => "Excellent",
        }
    }

    pub fn face(&self) -> Face {
        match self {
            Score::Good => Face::Sad,
            Score::VeryGood => Face::Neutral,
            Score::Excellent => Face::Happy,
        }
    }

    pub fn is_excellent(&self) -> bool {
        *self == Score::Excellent
    }
}

impl TryFrom<u8> for Score {
    type Error = SurveyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(Score::Good),
            75 => Ok(Score::VeryGood),
            100 => Ok(Score::Excellent),
            other => Err(SurveyError::InvalidScore(other)),
        }
    }
}

/// Face shown for a score or an average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Happy,
    Neutral,
    Sad,
}

impl Face {
    /// Pick a face for an average percentage (inclusive lower bounds)
    pub fn for_average(average: u8) -> Self {
        if average >= 90 {
            Face::Happy
        } else if average >= 70 {
            Face::Neutral
        } else {
            Face::Sad
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Face::Happy => "😃",
            Face::Neutral => "😐",
            Face::Sad => "😞",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("overall".parse::<Category>().unwrap(), Category::Overall);
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert!(matches!(
            "service".parse::<Category>(),
            Err(SurveyError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(Category::Food.next(), Category::Overall);
        assert_eq!(Category::Overall.prev(), Category::Food);
        assert_eq!(Category::Overall.next(), Category::Friendliness);
    }

    #[test]
    fn test_score_try_from_rejects_out_of_domain() {
        assert_eq!(Score::try_from(75).unwrap(), Score::VeryGood);
        assert!(matches!(Score::try_from(0), Err(SurveyError::InvalidScore(0))));
        assert!(matches!(Score::try_from(99), Err(SurveyError::InvalidScore(99))));
    }

    #[test]
    fn test_score_faces() {
        assert_eq!(Score::Good.face(), Face::Sad);
        assert_eq!(Score::VeryGood.face(), Face::Neutral);
        assert_eq!(Score::Excellent.face(), Face::Happy);
    }

    #[test]
    fn test_face_for_average_thresholds() {
        assert_eq!(Face::for_average(100), Face::Happy);
        assert_eq!(Face::for_average(90), Face::Happy);
        assert_eq!(Face::for_average(89), Face::Neutral);
        assert_eq!(Face::for_average(83), Face::Neutral);
        assert_eq!(Face::for_average(70), Face::Neutral);
        assert_eq!(Face::for_average(69), Face::Sad);
        assert_eq!(Face::for_average(0), Face::Sad);
    }
}
