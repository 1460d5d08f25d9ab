//! Single-team views: the radar chart projection and the "hotness" used to rank teams on form.

use serde::{Deserialize, Serialize};

use crate::indicators::{or_neutral, TeamIndicators};
use crate::probs::round;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Radar {
    pub attack: f64,
    pub defense: f64,
    pub midfield: f64,
    pub set_piece: f64,
    pub form: f64,
}
impl Radar {
    pub fn axes(&self) -> [(&'static str, f64); 5] {
        [
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Midfield", self.midfield),
            ("Set piece", self.set_piece),
            ("Form", self.form),
        ]
    }
}

impl From<&TeamIndicators> for Radar {
    fn from(team: &TeamIndicators) -> Self {
        Self {
            attack: team.offensive_strength,
            defense: team.defensive_strength,
            midfield: team.midfield_strength,
            set_piece: team.set_piece_strength,
            form: team.recent_form,
        }
    }
}

pub fn radar(team: &TeamIndicators) -> Radar {
    Radar::from(team)
}

/// Unbounded; only meaningful for ordering teams against each other.
pub fn hotness(team: &TeamIndicators) -> i64 {
    let results_form = team.form_from_results();
    let offensive_form = or_neutral(team.offensive_strength) * 0.3;
    let recent_form = or_neutral(team.recent_form) * 0.5;
    round(results_form * 0.4 + offensive_form + recent_form * 0.3) as i64
}

/// Orders teams from hottest to coldest, keeping the given order among equals.
pub fn rank_hot(teams: &[TeamIndicators]) -> Vec<(&TeamIndicators, i64)> {
    let mut ranked = teams
        .iter()
        .map(|team| (team, hotness(team)))
        .collect::<Vec<_>>();
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked
}
