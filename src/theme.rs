//! Theme module for survey-tui
//!
//! This module provides the shared color palette and styling constants for
//! the "cruise night" look: deep navy backdrop, gold highlights, and the
//! per-restaurant accent supplied by each `RestaurantTheme`.

use ratatui::style::Color;
use ratatui::symbols::border;

// ============================================================================
// Background Colors
// ============================================================================

/// Page background - deep navy (#0a284b)
pub const BG_NAVY: Color = Color::Rgb(10, 40, 75);

/// Welcome splash background (#1e3a8a)
pub const BG_SPLASH: Color = Color::Rgb(30, 58, 138);

/// Card background (#12304f)
pub const BG_CARD: Color = Color::Rgb(18, 48, 79);

/// Unselected button / empty gauge (#2a4466)
pub const BG_BUTTON: Color = Color::Rgb(42, 68, 102);

/// Dialog background (#f8fafc)
pub const BG_DIALOG: Color = Color::Rgb(248, 250, 252);

/// Subtle border color (#334e6e)
pub const BORDER_SUBTLE: Color = Color::Rgb(51, 78, 110);

// ============================================================================
// Accent Colors
// ============================================================================

/// Gold used for titles and the final score (#e7b10a)
pub const GOLD: Color = Color::Rgb(231, 177, 10);

/// Darker gold for pulsing (#c99908)
pub const GOLD_DIM: Color = Color::Rgb(201, 153, 8);

/// Gauge color for a Very Good score (#f39c12)
pub const SCORE_VERY_GOOD: Color = Color::Rgb(243, 156, 18);

/// Gauge color for a Good score (#e74c3c)
pub const SCORE_GOOD: Color = Color::Rgb(231, 76, 60);

/// Apology text (#f87171)
pub const RED_APOLOGY: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color (#e2e8f0)
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);

/// Secondary text color (#bfdbfe)
pub const TEXT_SECONDARY: Color = Color::Rgb(191, 219, 254);

/// Muted text color for hints and descriptions (#94a3b8)
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

/// Text on light surfaces (#1f2937)
pub const TEXT_DARK: Color = Color::Rgb(31, 41, 55);

// ============================================================================
// Borders & Animation
// ============================================================================

pub const ROUNDED_BORDERS: border::Set = border::ROUNDED;

/// Animation frames advance every this many milliseconds
pub const ANIMATION_FRAME_MS: u128 = 120;

/// Alternate between two colors on a slow beat
pub fn get_pulse_color(tick: u64, on: Color, off: Color) -> Color {
    if (tick / 4) % 2 == 0 { on } else { off }
}

/// Blend `color` toward `base` (weight 0.0 = base, 1.0 = color)
pub fn tint(color: Color, base: Color, weight: f32) -> Color {
    match (color, base) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(b) + (f32::from(a) - f32::from(b)) * weight) as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_alternates() {
        assert_eq!(get_pulse_color(0, GOLD, GOLD_DIM), GOLD);
        assert_eq!(get_pulse_color(4, GOLD, GOLD_DIM), GOLD_DIM);
        assert_eq!(get_pulse_color(8, GOLD, GOLD_DIM), GOLD);
    }

    #[test]
    fn test_tint_endpoints() {
        let accent = Color::Rgb(200, 100, 0);
        assert_eq!(tint(accent, BG_CARD, 1.0), accent);
        assert_eq!(tint(accent, BG_CARD, 0.0), BG_CARD);
        assert_eq!(tint(Color::Red, BG_CARD, 0.5), Color::Red);
    }
}
