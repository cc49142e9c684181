//! Categorical face colours drawn from a cumulative distribution table

use crate::io::error::{Result, invalid_parameter};
use rand::Rng;

/// Fill colour of a painting face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Primary blue
    Blue,
    /// Primary red
    Red,
    /// Primary yellow
    Yellow,
    /// Background white
    White,
}

impl Color {
    /// CSS colour keyword used in SVG output
    pub const fn svg_name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Opaque RGBA value matching the CSS keyword
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Blue => [0, 0, 255, 255],
            Self::Red => [255, 0, 0, 255],
            Self::Yellow => [255, 255, 0, 255],
            Self::White => [255, 255, 255, 255],
        }
    }
}

/// Colours with their cumulative selection thresholds
///
/// A uniform draw `c` in `[0, 1)` selects the first colour whose threshold
/// is at least `c`. The final threshold is exactly 1.0, so every draw selects
/// something.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<(Color, f64)>,
}

impl Palette {
    /// Build a palette from `(colour, cumulative threshold)` pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the table is empty, a threshold lies
    /// outside `[0, 1]`, thresholds decrease, or the last one is not 1.0
    // Table thresholds are literals, so exact comparison is sound
    #[allow(clippy::float_cmp)]
    pub fn from_cumulative(entries: Vec<(Color, f64)>) -> Result<Self> {
        let Some(&(_, last)) = entries.last() else {
            return Err(invalid_parameter(
                "palette",
                &"[]",
                &"needs at least one colour",
            ));
        };

        let mut previous = 0.0;
        for &(color, threshold) in &entries {
            if !(0.0..=1.0).contains(&threshold) || threshold < previous {
                return Err(invalid_parameter(
                    "palette",
                    &format!("{}: {threshold}", color.svg_name()),
                    &"thresholds must be non-decreasing within [0, 1]",
                ));
            }
            previous = threshold;
        }

        if last != 1.0 {
            return Err(invalid_parameter(
                "palette",
                &last,
                &"final cumulative threshold must be exactly 1.0",
            ));
        }

        Ok(Self { entries })
    }

    /// The classic table: 15% each of blue, red and yellow, the rest white
    pub fn mondrian() -> Self {
        Self {
            entries: vec![
                (Color::Blue, 0.15),
                (Color::Red, 0.3),
                (Color::Yellow, 0.45),
                (Color::White, 1.0),
            ],
        }
    }

    /// Colour selected by a draw in `[0, 1)`
    pub fn select(&self, draw: f64) -> Color {
        self.entries
            .iter()
            .find(|&&(_, threshold)| threshold >= draw)
            .or_else(|| self.entries.last())
            .map_or(Color::White, |&(color, _)| color)
    }

    /// Draw a uniform number from `rng` and select a colour with it
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.select(rng.random::<f64>())
    }

    /// Colour table with cumulative thresholds
    pub fn entries(&self) -> &[(Color, f64)] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::mondrian()
    }
}
