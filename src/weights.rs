//! Weights of the linear team-score model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InvalidWeights {
    #[error("weight {name} must be a finite, non-negative number, got {value}")]
    OutOfRange { name: &'static str, value: f64 },

    #[error("at least one weight must be positive")]
    AllZero,
}

/// Contribution of each indicator to a team's score. The weights are applied as-is and
/// need not sum to 1; the defaults sum to 0.95.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weights {
    pub recent_form: f64,
    pub offensive_strength: f64,
    pub defensive_strength: f64,
    /// Applied to home advantage for the home side and away performance for the away side.
    pub venue: f64,
    pub possession: f64,
    pub results_form: f64,
    pub midfield_strength: f64,
    pub set_piece_strength: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            recent_form: 0.20,
            offensive_strength: 0.15,
            defensive_strength: 0.15,
            venue: 0.12,
            possession: 0.08,
            results_form: 0.15,
            midfield_strength: 0.05,
            set_piece_strength: 0.05,
        }
    }
}

impl Weights {
    fn named(&self) -> [(&'static str, f64); 8] {
        [
            ("recentForm", self.recent_form),
            ("offensiveStrength", self.offensive_strength),
            ("defensiveStrength", self.defensive_strength),
            ("venue", self.venue),
            ("possession", self.possession),
            ("resultsForm", self.results_form),
            ("midfieldStrength", self.midfield_strength),
            ("setPieceStrength", self.set_piece_strength),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.named().iter().map(|(_, weight)| weight).sum()
    }

    pub fn validate(&self) -> Result<(), InvalidWeights> {
        for (name, value) in self.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidWeights::OutOfRange { name, value });
            }
        }
        if self.sum() == 0.0 {
            return Err(InvalidWeights::AllZero);
        }
        Ok(())
    }

    /// Rescales the weights so that they sum to 1.
    #[must_use]
    pub fn normalised(&self) -> Self {
        let factor = 1.0 / self.sum();
        Self {
            recent_form: self.recent_form * factor,
            offensive_strength: self.offensive_strength * factor,
            defensive_strength: self.defensive_strength * factor,
            venue: self.venue * factor,
            possession: self.possession * factor,
            results_form: self.results_form * factor,
            midfield_strength: self.midfield_strength * factor,
            set_piece_strength: self.set_piece_strength * factor,
        }
    }
}
