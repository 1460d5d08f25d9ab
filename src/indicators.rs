//! Per-team input indicators.

use serde::{Deserialize, Deserializer, Serialize};

use crate::data::TeamStatistics;
use crate::form;

/// Midpoint substituted for any percentage indicator that is missing or not a number.
pub const NEUTRAL: f64 = 50.0;

pub const DEFAULT_GOALS_SCORED: f64 = 1.5;
pub const DEFAULT_GOALS_CONCEDED: f64 = 1.0;

const DEFAULT_SHOTS_ON_GOAL: f64 = 4.0;
const DEFAULT_TACKLES: f64 = 15.0;
const DERIVED_RESULTS: &str = "WDWLD";

fn neutral() -> f64 {
    NEUTRAL
}

fn default_goals_scored() -> f64 {
    DEFAULT_GOALS_SCORED
}

fn default_goals_conceded() -> f64 {
    DEFAULT_GOALS_CONCEDED
}

fn neutral_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(NEUTRAL))
}

fn goals_scored_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_GOALS_SCORED))
}

fn goals_conceded_if_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(DEFAULT_GOALS_CONCEDED))
}

/// Raw indicators for one team, as supplied by the data provider. Percentages are nominally
/// in 0–100 but are not range-checked; goal figures are per-match averages. Absent and `null`
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamIndicators {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub recent_form: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub offensive_strength: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub defensive_strength: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub home_advantage: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub away_performance: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub possession: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub midfield_strength: f64,
    #[serde(default = "neutral", deserialize_with = "neutral_if_null")]
    pub set_piece_strength: f64,
    #[serde(rename = "last5Results", default)]
    pub last5_results: Option<String>,
    #[serde(
        default = "default_goals_scored",
        deserialize_with = "goals_scored_if_null"
    )]
    pub goals_scored: f64,
    #[serde(
        default = "default_goals_conceded",
        deserialize_with = "goals_conceded_if_null"
    )]
    pub goals_conceded: f64,
}

impl Default for TeamIndicators {
    fn default() -> Self {
        Self {
            name: None,
            recent_form: NEUTRAL,
            offensive_strength: NEUTRAL,
            defensive_strength: NEUTRAL,
            home_advantage: NEUTRAL,
            away_performance: NEUTRAL,
            possession: NEUTRAL,
            midfield_strength: NEUTRAL,
            set_piece_strength: NEUTRAL,
            last5_results: None,
            goals_scored: DEFAULT_GOALS_SCORED,
            goals_conceded: DEFAULT_GOALS_CONCEDED,
        }
    }
}

impl TeamIndicators {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_results(mut self, results: impl Into<String>) -> Self {
        self.last5_results = Some(results.into());
        self
    }

    /// Home advantage when playing at home, away performance otherwise.
    pub fn venue(&self, is_home: bool) -> f64 {
        if is_home {
            or_neutral(self.home_advantage)
        } else {
            or_neutral(self.away_performance)
        }
    }

    pub fn form_from_results(&self) -> f64 {
        form::form_from_results(self.last5_results.as_deref())
    }

    pub fn goals_scored(&self) -> f64 {
        or_default(self.goals_scored, DEFAULT_GOALS_SCORED)
    }

    pub fn goals_conceded(&self) -> f64 {
        or_default(self.goals_conceded, DEFAULT_GOALS_CONCEDED)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("?")
    }

    /// Estimates indicators from one fixture's statistics for a team and its opponent.
    /// Anything the statistics do not cover takes a fixed league-average value.
    pub fn from_match_stats(own: &TeamStatistics, opponent: &TeamStatistics) -> Self {
        let own_shots = own.count("Shots on Goal").unwrap_or(DEFAULT_SHOTS_ON_GOAL);
        let opponent_shots = opponent
            .count("Shots on Goal")
            .unwrap_or(DEFAULT_SHOTS_ON_GOAL);
        let possession = own.percentage("Ball Possession").unwrap_or(NEUTRAL);
        Self {
            name: own.team.name.clone(),
            recent_form: NEUTRAL,
            offensive_strength: f64::min(100.0, own_shots * 12.0),
            defensive_strength: f64::max(0.0, 100.0 - opponent_shots * 10.0),
            home_advantage: 55.0,
            away_performance: 45.0,
            possession,
            midfield_strength: possession,
            set_piece_strength: NEUTRAL,
            last5_results: Some(DERIVED_RESULTS.into()),
            goals_scored: DEFAULT_GOALS_SCORED,
            goals_conceded: DEFAULT_GOALS_CONCEDED,
        }
    }
}

/// The two sides of a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: TeamIndicators,
    pub away: TeamIndicators,
}
impl Matchup {
    /// Derives both sides from a fixture's statistics, listed home team first.
    pub fn from_match_stats(home: &TeamStatistics, away: &TeamStatistics) -> Self {
        Self {
            home: TeamIndicators::from_match_stats(home, away),
            away: TeamIndicators::from_match_stats(away, home),
        }
    }
}

/// Figures shown alongside the indicators on a fixture's detail view. None of them feeds
/// into the probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatLine {
    pub xg: f64,
    pub xga: f64,
    pub shots_on_target: f64,
    pub tackles: f64,
}
impl MatchStatLine {
    /// Zero and missing statistics take the same defaults as in
    /// [`TeamIndicators::from_match_stats`].
    pub fn from_match_stats(own: &TeamStatistics, opponent: &TeamStatistics) -> Self {
        Self {
            xg: own.count("expected_goals").unwrap_or(DEFAULT_GOALS_SCORED),
            xga: opponent.count("expected_goals").unwrap_or(DEFAULT_GOALS_CONCEDED),
            shots_on_target: own.count("Shots on Goal").unwrap_or(DEFAULT_SHOTS_ON_GOAL),
            tackles: own.count("Tackles").unwrap_or(DEFAULT_TACKLES),
        }
    }
}

#[inline]
pub(crate) fn or_neutral(value: f64) -> f64 {
    or_default(value, NEUTRAL)
}

#[inline]
fn or_default(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        default
    }
}
