//! Per-card rating values and the figures derived from them.

use super::enums::{Category, Face, Score};

/// Scores for the three categories. `None` means unrated, which is only
/// reachable when a card starts unrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratings {
    scores: [Option<Score>; 3],
}

impl Default for Ratings {
    /// Every category starts at Excellent
    fn default() -> Self {
        Self {
            scores: [Some(Score::Excellent); 3],
        }
    }
}

impl Ratings {
    pub fn unrated() -> Self {
        Self { scores: [None; 3] }
    }

    pub fn get(&self, category: Category) -> Option<Score> {
        self.scores[category.index()]
    }

    pub fn set(&mut self, category: Category, score: Score) {
        self.scores[category.index()] = Some(score);
    }

    /// Raw percentage for a category, 0 when unrated
    pub fn value(&self, category: Category) -> u8 {
        self.get(category).map_or(0, |s| s.value())
    }

    /// Categories with a score above zero
    pub fn completed_count(&self) -> usize {
        Category::ALL
            .iter()
            .filter(|c| self.value(**c) > 0)
            .count()
    }

    pub fn total(&self) -> usize {
        Category::ALL.len()
    }

    pub fn is_complete(&self) -> bool {
        self.completed_count() == self.total()
    }

    /// Mean of the three values, rounded half up
    pub fn average(&self) -> u8 {
        let sum: u32 = Category::ALL.iter().map(|c| u32::from(self.value(*c))).sum();
        let n = Category::ALL.len() as u32;
        ((2 * sum + n) / (2 * n)) as u8
    }

    pub fn face(&self) -> Face {
        Face::for_average(self.average())
    }
}
