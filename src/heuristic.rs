//! A quick split from recent results alone, for fixture lists where no indicators are
//! available.

use crate::form;
use crate::form::MatchResult;
use crate::probs::{round, Split};

const BASE_SCORE: f64 = 50.0;
const HOME_BONUS: f64 = 5.0;
const MIN_DRAW: f64 = 15.0;
const WINDOW: usize = 5;

/// Starts from a base score and adds the momentum of each of the latest results. Only
/// upper-case symbols are recognised; anything else takes up a slot without scoring.
pub fn form_score(results: &str) -> f64 {
    form::latest(results, WINDOW)
        .filter_map(MatchResult::parse_exact)
        .fold(BASE_SCORE, |score, result| score + result.momentum())
}

/// Each side's share of the combined scores (home bonus included) becomes its win
/// percentage, the draw is floored, and the three are rescaled towards 100. The rescaled
/// values are rounded independently, so the total can be off by one.
pub fn split(home_results: &str, away_results: &str) -> Split {
    let home_score = form_score(home_results) + HOME_BONUS;
    let away_score = form_score(away_results);
    let total_score = home_score + away_score;

    let (home_win, away_win) = if total_score > 0.0 {
        (
            round(home_score / total_score * 100.0),
            round(away_score / total_score * 100.0),
        )
    } else {
        (50.0, 50.0)
    };
    let draw = f64::max(MIN_DRAW, 100.0 - home_win - away_win);
    let sum = home_win + draw + away_win;

    Split {
        percentages: [
            round(home_win / sum * 100.0) as i64,
            round(draw / sum * 100.0) as i64,
            round(away_win / sum * 100.0) as i64,
        ],
        balance: 1.0 - (home_score - away_score).abs() / 100.0,
    }
}
