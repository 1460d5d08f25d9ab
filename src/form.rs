//! Recent-results form lines, such as `"WWDLD"`.

use strum_macros::Display;

/// Form score assumed when no results are known.
pub const NEUTRAL_FORM: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum MatchResult {
    #[strum(serialize = "W")]
    Win,
    #[strum(serialize = "D")]
    Draw,
    #[strum(serialize = "L")]
    Loss,
}
impl MatchResult {
    /// Either case.
    pub fn parse(symbol: char) -> Option<Self> {
        Self::parse_exact(symbol.to_ascii_uppercase())
    }

    /// Upper case only.
    pub fn parse_exact(symbol: char) -> Option<Self> {
        match symbol {
            'W' => Some(MatchResult::Win),
            'D' => Some(MatchResult::Draw),
            'L' => Some(MatchResult::Loss),
            _ => None,
        }
    }

    /// League points: three for a win, one for a draw.
    pub fn points(&self) -> u32 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }

    /// Adjustment applied by the heuristic model.
    pub fn momentum(&self) -> f64 {
        match self {
            MatchResult::Win => 5.0,
            MatchResult::Draw => 1.0,
            MatchResult::Loss => -3.0,
        }
    }
}

/// Converts a results line into a 0–100 score. Unrecognised symbols still count towards
/// the number of matches played but earn nothing.
pub fn form_from_results(results: Option<&str>) -> f64 {
    let results = match results {
        None | Some("") => return NEUTRAL_FORM,
        Some(results) => results,
    };

    let mut matches = 0;
    let mut points = 0;
    for symbol in results.chars() {
        matches += 1;
        if let Some(result) = MatchResult::parse(symbol) {
            points += result.points();
        }
    }
    points as f64 / (matches * 3) as f64 * 100.0
}

/// The trailing `count` symbols of a results line.
pub fn latest(results: &str, count: usize) -> impl Iterator<Item = char> + '_ {
    let len = results.chars().count();
    results.chars().skip(len.saturating_sub(count))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;

    use super::*;

    #[test]
    fn neutral_when_absent() {
        assert_eq!(NEUTRAL_FORM, form_from_results(None));
        assert_eq!(NEUTRAL_FORM, form_from_results(Some("")));
    }

    #[test]
    fn extremes() {
        assert_eq!(100.0, form_from_results(Some("WWWWW")));
        assert_eq!(0.0, form_from_results(Some("LLLLL")));
    }

    #[test]
    fn mixed() {
        // 3 + 3 + 1 + 0 + 1 = 8 of 15
        assert_float_absolute_eq!(53.333333, form_from_results(Some("WWDLD")), 1e-5);
        assert_float_absolute_eq!(100.0 / 3.0, form_from_results(Some("d")), 1e-9);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(
            form_from_results(Some("WDLWW")),
            form_from_results(Some("wdlww"))
        );
    }

    #[test]
    fn unknown_symbols_count_as_played() {
        assert_float_absolute_eq!(50.0, form_from_results(Some("W?")), 1e-9);
    }

    #[test]
    fn latest_symbols() {
        assert_eq!("DLWWL", latest("WWDLWWL", 5).collect::<String>());
        assert_eq!("WD", latest("WD", 5).collect::<String>());
        assert_eq!("", latest("", 5).collect::<String>());
    }

    #[test]
    fn result_symbols() {
        assert_eq!(Some(MatchResult::Win), MatchResult::parse('w'));
        assert_eq!(None, MatchResult::parse('x'));
        assert_eq!(Some(MatchResult::Draw), MatchResult::parse_exact('D'));
        assert_eq!(None, MatchResult::parse_exact('d'));
        assert_eq!("L", MatchResult::Loss.to_string());
    }
}
