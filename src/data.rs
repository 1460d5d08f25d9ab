//! Fixture and match-statistics records, as published by the sports data provider.

use std::collections::BTreeSet;
use std::io::Error;
use std::path::Path;

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::file::ReadJsonFile;

/// League name used for fixtures that do not carry one.
pub const UNNAMED_LEAGUE: &str = "Other";

/// Number of selectable days, today included.
pub const DATE_OPTIONS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture: FixtureInfo,
    #[serde(default)]
    pub league: Option<League>,
    pub teams: Teams,
    #[serde(default)]
    pub goals: Goals,
}
impl Fixture {
    pub fn league_name(&self) -> &str {
        self.league
            .as_ref()
            .and_then(|league| league.name.as_deref())
            .unwrap_or(UNNAMED_LEAGUE)
    }

    pub fn country(&self) -> Option<&str> {
        self.league.as_ref().and_then(|league| league.country.as_deref())
    }

    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        self.fixture.date.as_deref().and_then(parse_kickoff)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureInfo {
    /// Passed through as the provider sends it, number or string.
    pub id: Value,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub venue: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub long: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub form: Option<String>,
}
impl Team {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("?")
    }

    pub fn form(&self) -> &str {
        self.form.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub home: Option<u8>,
    #[serde(default)]
    pub away: Option<u8>,
}

/// Accepts both RFC 3339 and the minute-precision `2024-08-17T14:00Z` form.
fn parse_kickoff(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(date) {
        return Some(date_time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureFilter {
    pub league: Option<String>,
    pub country: Option<String>,
    pub date: Option<NaiveDate>,
}
impl FixtureFilter {
    pub fn matches(&self, fixture: &Fixture) -> bool {
        if let Some(league) = &self.league {
            if fixture.league.as_ref().and_then(|league| league.name.as_ref()) != Some(league) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if fixture.country() != Some(country.as_str()) {
                return false;
            }
        }
        if let Some(date) = &self.date {
            if fixture.kickoff().map(|kickoff| kickoff.date_naive()) != Some(*date) {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures(pub Vec<Fixture>);
impl Fixtures {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fixture> {
        self.0.iter()
    }

    /// Distinct league names, sorted.
    pub fn leagues(&self) -> Vec<&str> {
        self.iter()
            .filter_map(|fixture| fixture.league.as_ref()?.name.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct countries, sorted.
    pub fn countries(&self) -> Vec<&str> {
        self.iter()
            .filter_map(Fixture::country)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn filter<'a>(&'a self, filter: &'a FixtureFilter) -> impl Iterator<Item = &'a Fixture> {
        self.iter().filter(move |fixture| filter.matches(fixture))
    }

    /// Groups the fixtures passing `filter` by league name, leagues in ascending order and
    /// fixtures in their original order within each league.
    pub fn group_by_league(&self, filter: &FixtureFilter) -> Vec<(&str, Vec<&Fixture>)> {
        let mut grouped: FxHashMap<&str, Vec<&Fixture>> = FxHashMap::default();
        for fixture in self.iter().filter(|fixture| filter.matches(fixture)) {
            grouped.entry(fixture.league_name()).or_default().push(fixture);
        }
        let mut grouped = grouped.into_iter().collect::<Vec<_>>();
        grouped.sort_by(|(a, _), (b, _)| a.cmp(b));
        grouped
    }
}

impl From<Vec<Fixture>> for Fixtures {
    fn from(fixtures: Vec<Fixture>) -> Self {
        Self(fixtures)
    }
}

pub fn read_fixtures(path: impl AsRef<Path>) -> Result<Fixtures, Error> {
    Fixtures::read_json_file(path)
}

/// The consecutive days a fixture list can be browsed by, starting with `today`.
pub fn date_options(today: NaiveDate) -> Vec<NaiveDate> {
    (0..DATE_OPTIONS)
        .filter_map(|offset| today.checked_add_days(Days::new(offset)))
        .collect()
}

/// One team's statistics for a single fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStatistics {
    #[serde(default)]
    pub team: Team,
    #[serde(default)]
    pub statistics: Vec<Statistic>,
}
impl TeamStatistics {
    pub fn get(&self, stat_type: &str) -> Option<&Value> {
        self.statistics
            .iter()
            .find(|statistic| statistic.stat_type == stat_type)
            .map(|statistic| &statistic.value)
    }

    /// A numeric statistic. Absent, null and zero values are all reported as `None`.
    pub fn count(&self, stat_type: &str) -> Option<f64> {
        let count = match self.get(stat_type)? {
            Value::Number(number) => number.as_f64()?,
            Value::String(string) => string.trim().parse().ok()?,
            _ => return None,
        };
        if count == 0.0 || !count.is_finite() {
            None
        } else {
            Some(count)
        }
    }

    /// A percentage statistic such as `"55%"`, truncated to a whole number. Absent, null,
    /// zero and unparseable values are all reported as `None`.
    pub fn percentage(&self, stat_type: &str) -> Option<f64> {
        let percentage = match self.get(stat_type)? {
            Value::Number(number) => number.as_f64()?.trunc(),
            Value::String(string) => leading_integer(&string.replace('%', ""))? as f64,
            _ => return None,
        };
        if percentage == 0.0 || !percentage.is_finite() {
            None
        } else {
            Some(percentage)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(rename = "type")]
    pub stat_type: String,
    #[serde(default)]
    pub value: Value,
}

fn leading_integer(str: &str) -> Option<i64> {
    let str = str.trim_start();
    let end = str
        .char_indices()
        .find(|&(index, ch)| !(ch.is_ascii_digit() || index == 0 && (ch == '-' || ch == '+')))
        .map(|(index, _)| index)
        .unwrap_or(str.len());
    str[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fixture(id: &str, league: Option<(&str, &str)>, date: &str) -> Fixture {
        serde_json::from_value(json!({
            "fixture": { "id": id, "date": date },
            "league": league.map(|(name, country)| json!({ "name": name, "country": country })),
            "teams": {
                "home": { "name": format!("{id} home"), "form": "WWD" },
                "away": { "name": format!("{id} away") }
            }
        }))
        .unwrap()
    }

    fn sample() -> Fixtures {
        Fixtures::from(vec![
            fixture("1", Some(("Serie A", "Italy")), "2024-08-17T14:00Z"),
            fixture("2", Some(("La Liga", "Spain")), "2024-08-17T19:30Z"),
            fixture("3", None, "2024-08-18T12:00:00Z"),
            fixture("4", Some(("La Liga", "Spain")), "2024-08-18T16:00Z"),
            fixture("5", Some(("Bundesliga", "Germany")), "not a date"),
        ])
    }

    #[test]
    fn distinct_leagues_and_countries() {
        let fixtures = sample();
        assert_eq!(vec!["Bundesliga", "La Liga", "Serie A"], fixtures.leagues());
        assert_eq!(vec!["Germany", "Italy", "Spain"], fixtures.countries());
    }

    #[test]
    fn group_by_league_unfiltered() {
        let fixtures = sample();
        let grouped = fixtures.group_by_league(&FixtureFilter::default());
        let summary = grouped
            .iter()
            .map(|(league, fixtures)| {
                (
                    *league,
                    fixtures
                        .iter()
                        .filter_map(|fixture| fixture.fixture.id.as_str())
                        .collect::<Vec<_>>(),
                )
            })
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("Bundesliga", vec!["5"]),
                ("La Liga", vec!["2", "4"]),
                ("Other", vec!["3"]),
                ("Serie A", vec!["1"]),
            ],
            summary
        );
    }

    #[test]
    fn filter_by_country_and_date() {
        let fixtures = sample();
        let filter = FixtureFilter {
            country: Some("Spain".into()),
            date: NaiveDate::from_ymd_opt(2024, 8, 18),
            ..FixtureFilter::default()
        };
        let ids = fixtures
            .filter(&filter)
            .filter_map(|fixture| fixture.fixture.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(vec!["4"], ids);

        let filter = FixtureFilter {
            league: Some("Serie A".into()),
            ..FixtureFilter::default()
        };
        assert_eq!(1, fixtures.filter(&filter).count());
    }

    #[test]
    fn kickoff_formats() {
        let fixtures = sample();
        assert_eq!(
            Utc.with_ymd_and_hms(2024, 8, 17, 14, 0, 0).single(),
            fixtures.0[0].kickoff()
        );
        assert_eq!(
            Utc.with_ymd_and_hms(2024, 8, 18, 12, 0, 0).single(),
            fixtures.0[2].kickoff()
        );
        assert_eq!(None, fixtures.0[4].kickoff());
    }

    #[test]
    fn numeric_and_string_ids() {
        let path = std::env::temp_dir().join(format!("sportpredict-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[
                {"fixture": {"id": 1180412}, "teams": {"home": {}, "away": {}}},
                {"fixture": {"id": "1180415"}, "teams": {"home": {}, "away": {}}}
            ]"#,
        )
        .unwrap();
        let fixtures = read_fixtures(&path);
        std::fs::remove_file(&path).unwrap();

        let fixtures = fixtures.unwrap();
        assert_eq!(2, fixtures.len());
        assert_eq!(json!(1180412), fixtures.0[0].fixture.id);
        assert_eq!(Some("1180415"), fixtures.0[1].fixture.id.as_str());
    }

    #[test]
    fn team_accessors() {
        let fixtures = sample();
        assert_eq!("WWD", fixtures.0[0].teams.home.form());
        assert_eq!("", fixtures.0[0].teams.away.form());
        assert_eq!("1 away", fixtures.0[0].teams.away.display_name());
        assert_eq!(UNNAMED_LEAGUE, fixtures.0[2].league_name());
    }

    #[test]
    fn seven_date_options() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 28).unwrap();
        let options = date_options(today);
        assert_eq!(7, options.len());
        assert_eq!(today, options[0]);
        assert_eq!(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(), options[6]);
    }

    #[test]
    fn statistic_values() {
        let stats: TeamStatistics = serde_json::from_value(json!({
            "team": { "id": 1, "name": "Arsenal" },
            "statistics": [
                { "type": "Shots on Goal", "value": 5 },
                { "type": "Tackles", "value": "17" },
                { "type": "Corner Kicks", "value": 0 },
                { "type": "Fouls", "value": null },
                { "type": "Ball Possession", "value": "55.7%" },
                { "type": "Passes %", "value": "0%" },
                { "type": "expected_goals", "value": 61.9 },
                { "type": "Goalkeeper Saves", "value": "n/a" }
            ]
        }))
        .unwrap();
        assert_eq!(Some(5.0), stats.count("Shots on Goal"));
        assert_eq!(Some(17.0), stats.count("Tackles"));
        assert_eq!(None, stats.count("Corner Kicks"));
        assert_eq!(None, stats.count("Fouls"));
        assert_eq!(None, stats.count("Offsides"));
        assert_eq!(Some(55.0), stats.percentage("Ball Possession"));
        assert_eq!(None, stats.percentage("Passes %"));
        assert_eq!(Some(61.0), stats.percentage("expected_goals"));
        assert_eq!(None, stats.percentage("Goalkeeper Saves"));
    }

    #[test]
    fn leading_integers() {
        assert_eq!(Some(55), leading_integer("55.7"));
        assert_eq!(Some(-3), leading_integer(" -3abc"));
        assert_eq!(None, leading_integer("abc"));
        assert_eq!(None, leading_integer(""));
    }
}
