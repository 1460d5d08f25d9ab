//! Utilities for working with probabilities expressed as percentages.

use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// Band for the home and away win percentages.
pub const WIN_BAND: RangeInclusive<i64> = 5..=85;

/// Band for the draw percentage.
pub const DRAW_BAND: RangeInclusive<i64> = 5..=40;

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        self.scale(target / sum);
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }
}

/// Rounds half-way cases towards positive infinity, so that `-2.5` becomes `-2` and `2.5`
/// becomes `3`.
#[inline]
pub fn round(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[inline]
pub(crate) fn clamp_to(value: i64, band: &RangeInclusive<i64>) -> i64 {
    value.max(*band.start()).min(*band.end())
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Ordinal,
    EnumCount,
    EnumIter,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Outcome {
    #[strum(serialize = "Home")]
    HomeWin,
    Draw,
    #[strum(serialize = "Away")]
    AwayWin,
}

/// Percentages of a win/draw/loss triple before any band clamping. In the full model
/// the three values always sum to 100, with the draw absorbing the rounding remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub percentages: [i64; 3],
    pub balance: f64,
}
impl Split {
    pub fn get(&self, outcome: Outcome) -> i64 {
        self.percentages[outcome.ordinal()]
    }

    pub fn sum(&self) -> i64 {
        self.percentages.iter().sum()
    }

    pub fn confidence(&self) -> f64 {
        f64::min(95.0, 70.0 + self.balance * 10.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchProbabilities {
    pub home_win: u8,
    pub draw: u8,
    pub away_win: u8,
    pub confidence: f64,
}
impl MatchProbabilities {
    pub fn get(&self, outcome: Outcome) -> u8 {
        match outcome {
            Outcome::HomeWin => self.home_win,
            Outcome::Draw => self.draw,
            Outcome::AwayWin => self.away_win,
        }
    }

    pub fn sum(&self) -> u16 {
        self.home_win as u16 + self.draw as u16 + self.away_win as u16
    }

    /// The outcome with the highest percentage. Ties favour the home side, then the draw.
    pub fn favourite(&self) -> Outcome {
        let mut favourite = Outcome::HomeWin;
        for outcome in [Outcome::Draw, Outcome::AwayWin] {
            if self.get(outcome) > self.get(favourite) {
                favourite = outcome;
            }
        }
        favourite
    }
}

impl Display for MatchProbabilities {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{} ({:.1})",
            self.home_win, self.draw, self.away_win, self.confidence
        )
    }
}

/// Renders a percentage for display, e.g. `42.6` as `"43%"`.
pub fn format_probability(value: f64) -> String {
    format!("{}%", round(value) as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    High,
    Medium,
    Low,
}
impl Classification {
    pub fn of(value: f64) -> Self {
        if value >= 50.0 {
            Classification::High
        } else if value >= 30.0 {
            Classification::Medium
        } else {
            Classification::Low
        }
    }
}

pub fn classify_probability(value: f64) -> Classification {
    Classification::of(value)
}
