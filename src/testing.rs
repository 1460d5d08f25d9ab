//! Testing helpers.

use tinyrand::Rand;

use crate::indicators::TeamIndicators;
use crate::probs::{MatchProbabilities, DRAW_BAND, WIN_BAND};

const RESULT_SYMBOLS: [char; 3] = ['W', 'D', 'L'];

/// A uniformly distributed value in `[min, max)`.
pub fn random_f64(rand: &mut impl Rand, min: f64, max: f64) -> f64 {
    min + rand.next_u64() as f64 / u64::MAX as f64 * (max - min)
}

pub fn random_results(rand: &mut impl Rand, len: usize) -> String {
    (0..len)
        .map(|_| RESULT_SYMBOLS[(rand.next_u64() % RESULT_SYMBOLS.len() as u64) as usize])
        .collect()
}

/// Indicators drawn from `[min, max)`, with up to five recent results.
pub fn random_team(rand: &mut impl Rand, min: f64, max: f64) -> TeamIndicators {
    let results_len = (rand.next_u64() % 6) as usize;
    TeamIndicators {
        name: None,
        recent_form: random_f64(rand, min, max),
        offensive_strength: random_f64(rand, min, max),
        defensive_strength: random_f64(rand, min, max),
        home_advantage: random_f64(rand, min, max),
        away_performance: random_f64(rand, min, max),
        possession: random_f64(rand, min, max),
        midfield_strength: random_f64(rand, min, max),
        set_piece_strength: random_f64(rand, min, max),
        last5_results: if results_len == 0 {
            None
        } else {
            Some(random_results(rand, results_len))
        },
        goals_scored: random_f64(rand, 0.0, 4.0),
        goals_conceded: random_f64(rand, 0.0, 4.0),
    }
}

pub fn assert_in_bands(probs: &MatchProbabilities) {
    assert!(
        WIN_BAND.contains(&(probs.home_win as i64)),
        "home win {} outside {WIN_BAND:?} in {probs:?}",
        probs.home_win
    );
    assert!(
        DRAW_BAND.contains(&(probs.draw as i64)),
        "draw {} outside {DRAW_BAND:?} in {probs:?}",
        probs.draw
    );
    assert!(
        WIN_BAND.contains(&(probs.away_win as i64)),
        "away win {} outside {WIN_BAND:?} in {probs:?}",
        probs.away_win
    );
    assert!(
        (70.0..=80.0).contains(&probs.confidence),
        "confidence {} outside 70..=80 in {probs:?}",
        probs.confidence
    );
}
