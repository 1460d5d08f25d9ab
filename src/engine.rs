//! The probability engine: turns two teams' indicators into a win/draw/loss split.

use ordinalizer::Ordinal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;
use tracing::{debug, trace};

use crate::goals::GoalTendencies;
use crate::heuristic;
use crate::indicators::{or_neutral, TeamIndicators, NEUTRAL};
use crate::probs::{
    clamp_to, round, MatchProbabilities, Outcome, SliceExt, Split, DRAW_BAND, WIN_BAND,
};
use crate::profile::Radar;
use crate::weights::{InvalidWeights, Weights};

const BASE_DRAW: f64 = 15.0;
const BALANCE_DRAW: f64 = 20.0;

#[derive(Debug, Error)]
pub enum InvalidConfig {
    #[error("{0}")]
    InvalidWeights(#[from] InvalidWeights),
}

/// Which formula produces the raw split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Model {
    /// Weighted indicators of both teams.
    #[default]
    Full,
    /// Recent results only, with a fixed bonus for the home side.
    Heuristic,
}

/// How the raw split is fitted into the published bands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Calibration {
    /// Weights applied as configured; each percentage is clamped to its band on its own,
    /// so the result may not sum to 100.
    #[default]
    Replica,
    /// Weights rescaled to sum to 1; the clamped percentages are rebalanced to sum to 100.
    Corrected,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub weights: Weights,
    pub model: Model,
    pub calibration: Calibration,
}
impl Config {
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        self.weights.validate()?;
        Ok(())
    }
}

/// Stateless after construction; every operation is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct ProbabilityEngine {
    config: Config,
    weights: Weights,
}

impl TryFrom<Config> for ProbabilityEngine {
    type Error = InvalidConfig;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        config.validate()?;
        let weights = match config.calibration {
            Calibration::Replica => config.weights.clone(),
            Calibration::Corrected => config.weights.normalised(),
        };
        debug!("engine config: {config:?}, effective weights: {weights:?}");
        Ok(Self { config, weights })
    }
}

impl Default for ProbabilityEngine {
    fn default() -> Self {
        Self {
            config: Config::default(),
            weights: Weights::default(),
        }
    }
}

impl ProbabilityEngine {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Weights in effect, after any rescaling required by the calibration.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores a team out of 100 from its weighted indicators.
    pub fn team_score(&self, team: &TeamIndicators, is_home: bool) -> f64 {
        let weights = &self.weights;
        let score = or_neutral(team.recent_form) * weights.recent_form
            + or_neutral(team.offensive_strength) * weights.offensive_strength
            + or_neutral(team.defensive_strength) * weights.defensive_strength
            + team.venue(is_home) * weights.venue
            + or_neutral(team.possession) * weights.possession
            + team.form_from_results() * weights.results_form
            + or_neutral(team.midfield_strength) * weights.midfield_strength
            + or_neutral(team.set_piece_strength) * weights.set_piece_strength;
        if score.is_nan() {
            NEUTRAL
        } else {
            score.clamp(0.0, 100.0)
        }
    }

    /// The indicator-based split, before band clamping. Home and away are rounded
    /// independently and the draw takes the remainder, so the split always sums to 100.
    pub fn full_split(&self, home: &TeamIndicators, away: &TeamIndicators) -> Split {
        let home_score = self.team_score(home, true);
        let away_score = self.team_score(away, false);

        let total_score = home_score + away_score;
        let (home_base, away_base) = if total_score == 0.0 {
            (50.0, 50.0)
        } else {
            (
                home_score / total_score * 100.0,
                away_score / total_score * 100.0,
            )
        };

        let balance = 1.0 - (home_score - away_score).abs() / 100.0;
        let defensive_avg =
            (or_neutral(home.defensive_strength) + or_neutral(away.defensive_strength)) / 2.0;
        let draw_base = f64::max(
            0.0,
            BASE_DRAW + balance * BALANCE_DRAW + defensive_avg / 10.0,
        );

        let mut bases = [0.0; 3];
        bases[Outcome::HomeWin.ordinal()] = home_base;
        bases[Outcome::Draw.ordinal()] = draw_base;
        bases[Outcome::AwayWin.ordinal()] = away_base;
        bases.normalise(100.0);

        let home_win = round(bases[Outcome::HomeWin.ordinal()]) as i64;
        let away_win = round(bases[Outcome::AwayWin.ordinal()]) as i64;
        let mut percentages = [0; 3];
        percentages[Outcome::HomeWin.ordinal()] = home_win;
        percentages[Outcome::Draw.ordinal()] = 100 - home_win - away_win;
        percentages[Outcome::AwayWin.ordinal()] = away_win;

        trace!(
            "scores: {home_score:.3}/{away_score:.3}, bases: {bases:?}, split: {percentages:?}"
        );
        Split {
            percentages,
            balance,
        }
    }

    /// The split produced by the configured model, before band clamping.
    pub fn split(&self, home: &TeamIndicators, away: &TeamIndicators) -> Split {
        match self.config.model {
            Model::Full => self.full_split(home, away),
            Model::Heuristic => heuristic::split(
                home.last5_results.as_deref().unwrap_or_default(),
                away.last5_results.as_deref().unwrap_or_default(),
            ),
        }
    }

    pub fn match_probabilities(
        &self,
        home: &TeamIndicators,
        away: &TeamIndicators,
    ) -> MatchProbabilities {
        self.calibrate(&self.split(home, away))
    }

    /// Probabilities from recent-results lines alone, regardless of the configured model.
    pub fn form_probabilities(&self, home_form: &str, away_form: &str) -> MatchProbabilities {
        self.calibrate(&heuristic::split(home_form, away_form))
    }

    /// Fits a raw split into the published bands.
    pub fn calibrate(&self, split: &Split) -> MatchProbabilities {
        let percentages = match self.config.calibration {
            Calibration::Replica => clamp_each(split),
            Calibration::Corrected => rebalance(split),
        };
        MatchProbabilities {
            home_win: percentages[Outcome::HomeWin.ordinal()] as u8,
            draw: percentages[Outcome::Draw.ordinal()] as u8,
            away_win: percentages[Outcome::AwayWin.ordinal()] as u8,
            confidence: split.confidence(),
        }
    }

    pub fn goal_tendencies(&self, home: &TeamIndicators, away: &TeamIndicators) -> GoalTendencies {
        GoalTendencies::from_teams(home, away)
    }

    /// Everything the engine knows about a fixture, in one record.
    pub fn predict(&self, home: &TeamIndicators, away: &TeamIndicators) -> Prediction {
        Prediction {
            probabilities: self.match_probabilities(home, away),
            goals: self.goal_tendencies(home, away),
            home_radar: Radar::from(home),
            away_radar: Radar::from(away),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub probabilities: MatchProbabilities,
    pub goals: GoalTendencies,
    pub home_radar: Radar,
    pub away_radar: Radar,
}

fn clamp_each(split: &Split) -> [i64; 3] {
    let mut percentages = [0; 3];
    for (index, band) in [WIN_BAND, DRAW_BAND, WIN_BAND].iter().enumerate() {
        percentages[index] = clamp_to(split.percentages[index], band);
    }
    percentages
}

/// Clamps the win percentages, lets the draw take the remainder, and if the draw then falls
/// outside its band, shares the difference between the two sides in proportion to their size.
fn rebalance(split: &Split) -> [i64; 3] {
    let mut home_win = clamp_to(split.get(Outcome::HomeWin), &WIN_BAND);
    let mut away_win = clamp_to(split.get(Outcome::AwayWin), &WIN_BAND);
    let mut draw = 100 - home_win - away_win;

    let bounded_draw = clamp_to(draw, &DRAW_BAND);
    if bounded_draw != draw {
        let sides = 100 - bounded_draw;
        let home_share = home_win as f64 / (home_win + away_win) as f64;
        home_win = round(sides as f64 * home_share) as i64;
        away_win = sides - home_win;
        draw = bounded_draw;
    }

    let mut percentages = [0; 3];
    percentages[Outcome::HomeWin.ordinal()] = home_win;
    percentages[Outcome::Draw.ordinal()] = draw;
    percentages[Outcome::AwayWin.ordinal()] = away_win;
    percentages
}
