//! Confetti particles drawn over the rating card after an Excellent rating.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

/// Particles per burst
pub const PARTICLE_COUNT: usize = 50;

/// Colors mixed with the restaurant accent
const PALETTE: [Color; 4] = [
    Color::Rgb(0xff, 0xd7, 0x00),
    Color::Rgb(0xff, 0x69, 0xb4),
    Color::Rgb(0x00, 0xbf, 0xff),
    Color::Rgb(0x7c, 0xfc, 0x00),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position as a fraction of the area width
    pub x: f32,
    pub color: Color,
    pub glyph: &'static str,
    pub fall: Duration,
    pub delay: Duration,
}

impl Particle {
    /// Vertical position as a fraction of the area height, `None` while
    /// waiting for its delay or once it has fallen out
    pub fn y_at(&self, elapsed: Duration) -> Option<f32> {
        let moving = elapsed.checked_sub(self.delay)?;
        // Particles start slightly above the top edge
        let y = -0.05 + moving.as_secs_f32() / self.fall.as_secs_f32();
        (y < 1.0).then_some(y.max(0.0))
    }
}

/// One burst of particles
#[derive(Debug, Clone)]
pub struct Burst {
    pub started: Instant,
    pub particles: Vec<Particle>,
}

impl Burst {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, accent: Color, now: Instant) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let pick = rng.random_range(0..=PALETTE.len());
                let color = if pick == PALETTE.len() {
                    accent
                } else {
                    PALETTE[pick]
                };
                let glyph = if rng.random_bool(0.5) { "▪" } else { "■" };
                Particle {
                    x: rng.random_range(0.0..1.0),
                    color,
                    glyph,
                    fall: Duration::from_secs_f32(rng.random_range(2.0..5.0)),
                    delay: Duration::from_secs_f32(rng.random_range(0.0..0.5)),
                }
            })
            .collect();
        Self {
            started: now,
            particles,
        }
    }

    /// Visible particles at `now` as (column fraction, row fraction, particle)
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = (f32, f32, &Particle)> {
        let elapsed = now.saturating_duration_since(self.started);
        self.particles
            .iter()
            .filter_map(move |p| p.y_at(elapsed).map(|y| (p.x, y, p)))
    }
}
