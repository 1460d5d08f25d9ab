//! Total-goals and both-teams-to-score tendencies.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::indicators::{or_neutral, TeamIndicators};
use crate::probs::round;

const BTTS_BAND: RangeInclusive<f64> = 30.0..=75.0;

/// A total-goals line: `base + expected_goals * slope`, capped at `max`.
struct Line {
    base: f64,
    slope: f64,
    max: f64,
}
impl Line {
    fn percentage(&self, expected_goals: f64) -> u8 {
        let value = f64::min(self.max, self.base + expected_goals * self.slope);
        round(value).max(0.0) as u8
    }
}

const OVER_1_5: Line = Line {
    base: 50.0,
    slope: 15.0,
    max: 90.0,
};
const OVER_2_5: Line = Line {
    base: 30.0,
    slope: 12.0,
    max: 80.0,
};
const OVER_3_5: Line = Line {
    base: 15.0,
    slope: 10.0,
    max: 60.0,
};

/// Independent percentages for the over/under and both-teams-to-score markets. They do not
/// sum to anything in particular.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTendencies {
    pub over15: u8,
    pub over25: u8,
    pub over35: u8,
    pub btts: u8,
}
impl GoalTendencies {
    pub fn from_teams(home: &TeamIndicators, away: &TeamIndicators) -> Self {
        let expected_goals = expected_goals(home, away);
        let home_scores = or_neutral(home.offensive_strength) / 100.0;
        let away_scores = or_neutral(away.offensive_strength) / 100.0;
        let btts = round(home_scores * away_scores * 100.0)
            .clamp(*BTTS_BAND.start(), *BTTS_BAND.end());
        Self {
            over15: OVER_1_5.percentage(expected_goals),
            over25: OVER_2_5.percentage(expected_goals),
            over35: OVER_3_5.percentage(expected_goals),
            btts: btts as u8,
        }
    }
}

/// Average goals scored plus average goals conceded across both teams.
pub fn expected_goals(home: &TeamIndicators, away: &TeamIndicators) -> f64 {
    let avg_scored = (home.goals_scored() + away.goals_scored()) / 2.0;
    let avg_conceded = (home.goals_conceded() + away.goals_conceded()) / 2.0;
    avg_scored + avg_conceded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(goals_scored: f64, goals_conceded: f64, offensive_strength: f64) -> TeamIndicators {
        TeamIndicators {
            goals_scored,
            goals_conceded,
            offensive_strength,
            ..TeamIndicators::default()
        }
    }

    #[test]
    fn goalless_teams() {
        let home = team(0.0, 0.0, 40.0);
        let away = team(0.0, 0.0, 50.0);
        assert_eq!(
            GoalTendencies {
                over15: 50,
                over25: 30,
                over35: 15,
                btts: 30
            },
            GoalTendencies::from_teams(&home, &away)
        );
    }

    #[test]
    fn typical_teams() {
        // expected goals = 1.5 + 1.0 = 2.5
        let home = team(1.8, 0.9, 80.0);
        let away = team(1.2, 1.1, 70.0);
        assert_eq!(
            GoalTendencies {
                over15: 88,
                over25: 60,
                over35: 40,
                btts: 56
            },
            GoalTendencies::from_teams(&home, &away)
        );
    }

    #[test]
    fn capped_lines() {
        let home = team(3.0, 2.0, 100.0);
        let away = team(3.0, 2.0, 95.0);
        assert_eq!(
            GoalTendencies {
                over15: 90,
                over25: 80,
                over35: 60,
                btts: 75
            },
            GoalTendencies::from_teams(&home, &away)
        );
    }

    #[test]
    fn monotonic_in_expected_goals() {
        let level = |goals| team(goals, goals, 50.0);
        let mut previous = GoalTendencies::from_teams(&level(0.0), &level(0.0));
        for step in 1..=40 {
            let goals = step as f64 * 0.1;
            let current = GoalTendencies::from_teams(&level(goals), &level(goals));
            assert!(current.over15 >= previous.over15);
            assert!(current.over25 >= previous.over25);
            assert!(current.over35 >= previous.over35);
            assert!(current.over15 >= current.over25 && current.over25 >= current.over35);
            previous = current;
        }
    }

    #[test]
    fn negative_goals_floor_at_zero() {
        let home = team(-5.0, -5.0, 50.0);
        let away = team(-5.0, -5.0, 50.0);
        let tendencies = GoalTendencies::from_teams(&home, &away);
        assert_eq!(0, tendencies.over15);
        assert_eq!(0, tendencies.over35);
    }

    #[test]
    fn default_goals() {
        let home = TeamIndicators::default();
        let away = TeamIndicators::default();
        assert_eq!(2.5, expected_goals(&home, &away));
    }
}
