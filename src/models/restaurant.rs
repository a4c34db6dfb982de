//! Restaurants and their fixed themes
//!
//! The theme table is static and immutable; every lookup borrows from it.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::SurveyError;

/// Visual identity of a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantTheme {
    pub name: &'static str,
    /// Background image reference, passed through to the renderer as-is
    pub background_image: &'static str,
    pub accent: Color,
    pub icon: &'static str,
}

static THEMES: [RestaurantTheme; 3] = [
    RestaurantTheme {
        name: "Royal Palace",
        background_image: "/globe.svg",
        accent: Color::Rgb(0xe7, 0xb1, 0x0a),
        icon: "👑",
    },
    RestaurantTheme {
        name: "Animator's Palate",
        background_image: "/file.svg",
        accent: Color::Rgb(0xe7, 0x4c, 0x3c),
        icon: "🎨",
    },
    RestaurantTheme {
        name: "Enchanted Garden",
        background_image: "/window.svg",
        accent: Color::Rgb(0x2e, 0xcc, 0x71),
        icon: "🌿",
    },
];

/// One of the three fixed restaurants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Restaurant {
    RoyalPalace,
    #[default]
    AnimatorsPalate,
    EnchantedGarden,
}

impl Restaurant {
    /// Selector order
    pub const ALL: [Restaurant; 3] = [
        Restaurant::RoyalPalace,
        Restaurant::AnimatorsPalate,
        Restaurant::EnchantedGarden,
    ];

    pub fn index(&self) -> usize {
        match self {
            Restaurant::RoyalPalace => 0,
            Restaurant::AnimatorsPalate => 1,
            Restaurant::EnchantedGarden => 2,
        }
    }

    /// Restaurant at a selector position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn theme(&self) -> &'static RestaurantTheme {
        &THEMES[self.index()]
    }

    pub fn name(&self) -> &'static str {
        self.theme().name
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Restaurant {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| SurveyError::UnknownRestaurant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_restaurant() {
        assert_eq!(Restaurant::default().name(), "Animator's Palate");
    }

    #[test]
    fn test_theme_table() {
        let theme = Restaurant::RoyalPalace.theme();
        assert_eq!(theme.background_image, "/globe.svg");
        assert_eq!(theme.accent, Color::Rgb(231, 177, 10));
        assert_eq!(Restaurant::EnchantedGarden.theme().background_image, "/window.svg");
        assert_eq!(Restaurant::AnimatorsPalate.theme().icon, "🎨");
    }

    #[test]
    fn test_from_str_exact_names() {
        assert_eq!(
            "Enchanted Garden".parse::<Restaurant>().unwrap(),
            Restaurant::EnchantedGarden
        );
        assert_eq!(
            "Chef Mickey's".parse::<Restaurant>(),
            Err(SurveyError::UnknownRestaurant("Chef Mickey's".to_string()))
        );
    }

    #[test]
    fn test_from_index_and_cycle() {
        assert_eq!(Restaurant::from_index(0), Some(Restaurant::RoyalPalace));
        assert_eq!(Restaurant::from_index(3), None);
        assert_eq!(Restaurant::EnchantedGarden.next(), Restaurant::RoyalPalace);
        assert_eq!(Restaurant::RoyalPalace.prev(), Restaurant::EnchantedGarden);
    }
}
