//! Console tables for the command-line tools.

use stanza::style::HAlign::Left;
use stanza::style::{HAlign, Header, MinWidth, Styles};
use stanza::table::{Col, Row, Table};
use strum::IntoEnumIterator;

use crate::data::Fixture;
use crate::goals::GoalTendencies;
use crate::indicators::{MatchStatLine, TeamIndicators};
use crate::probs::{classify_probability, format_probability, MatchProbabilities, Outcome};
use crate::profile::Radar;

fn label_col() -> Col {
    Col::new(Styles::default().with(MinWidth(12)).with(Left))
}

fn value_col() -> Col {
    Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right))
}

fn header(labels: &[&str]) -> Row {
    Row::new(
        Styles::default().with(Header(true)),
        labels.iter().map(|&label| label.into()).collect(),
    )
}

pub fn tabulate_probabilities(probs: &MatchProbabilities) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["Outcome", "Prob.", "Rating"]));
    for outcome in Outcome::iter() {
        let value = probs.get(outcome) as f64;
        table.push_row(Row::new(
            Styles::default(),
            vec![
                outcome.to_string().into(),
                format_probability(value).into(),
                classify_probability(value).to_string().into(),
            ],
        ));
    }
    table.push_row(Row::new(
        Styles::default(),
        vec![
            "Confidence".into(),
            format_probability(probs.confidence).into(),
            "".into(),
        ],
    ));
    table
}

pub fn tabulate_goal_tendencies(tendencies: &GoalTendencies) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["Market", "Prob.", "Rating"]));
    for (label, value) in [
        ("Over 1.5", tendencies.over15),
        ("Over 2.5", tendencies.over25),
        ("Over 3.5", tendencies.over35),
        ("Both score", tendencies.btts),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                label.into(),
                format_probability(value as f64).into(),
                classify_probability(value as f64).to_string().into(),
            ],
        ));
    }
    table
}

pub fn tabulate_radars(home: &TeamIndicators, away: &TeamIndicators) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["", home.display_name(), away.display_name()]));
    let (home_radar, away_radar) = (Radar::from(home), Radar::from(away));
    let axes = home_radar.axes().into_iter().zip(away_radar.axes());
    for ((label, home_value), (_, away_value)) in axes {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                label.into(),
                format!("{home_value:.1}").into(),
                format!("{away_value:.1}").into(),
            ],
        ));
    }
    table
}

pub fn tabulate_stat_lines(
    names: (&str, &str),
    home: &MatchStatLine,
    away: &MatchStatLine,
) -> Table {
    let mut table = Table::default()
        .with_cols(vec![label_col(), value_col(), value_col()])
        .with_row(header(&["", names.0, names.1]));
    for (label, home_value, away_value) in [
        ("xG", home.xg, away.xg),
        ("xGA", home.xga, away.xga),
        ("On target", home.shots_on_target, away.shots_on_target),
        ("Tackles", home.tackles, away.tackles),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                label.into(),
                format!("{home_value:.1}").into(),
                format!("{away_value:.1}").into(),
            ],
        ));
    }
    table
}

pub fn tabulate_fixtures(fixtures: &[(&Fixture, MatchProbabilities)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            label_col(),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            value_col(),
            value_col(),
            value_col(),
            Col::new(Styles::default().with(MinWidth(6)).with(Left)),
        ])
        .with_row(header(&["Kickoff", "Home", "Away", "1", "X", "2", "Pick"]));
    for (fixture, probs) in fixtures {
        let kickoff = fixture
            .kickoff()
            .map(|kickoff| kickoff.format("%a %d/%m %H:%M").to_string())
            .unwrap_or_else(|| "TBC".into());
        table.push_row(Row::new(
            Styles::default(),
            vec![
                kickoff.into(),
                fixture.teams.home.display_name().into(),
                fixture.teams.away.display_name().into(),
                format_probability(probs.home_win as f64).into(),
                format_probability(probs.draw as f64).into(),
                format_probability(probs.away_win as f64).into(),
                probs.favourite().to_string().into(),
            ],
        ));
    }
    table
}

pub fn tabulate_hot_teams(ranked: &[(&str, i64)]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(4)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(24)).with(Left)),
            value_col(),
        ])
        .with_row(header(&["#", "Team", "Hotness"]));
    for (rank, (name, hotness)) in ranked.iter().enumerate() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{}", rank + 1).into(),
                (*name).into(),
                format!("{hotness}").into(),
            ],
        ));
    }
    table
}
