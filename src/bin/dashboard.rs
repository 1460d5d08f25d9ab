use std::env;
use std::error::Error;
use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use sportpredict::data::{date_options, read_fixtures, FixtureFilter};
use sportpredict::engine::{Calibration, Config, Model, ProbabilityEngine};
use sportpredict::indicators::TeamIndicators;
use sportpredict::print::{tabulate_fixtures, tabulate_hot_teams};
use sportpredict::profile::rank_hot;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the fixture list from
    #[clap(short = 'f', long)]
    file: PathBuf,

    /// only show fixtures in this league
    #[clap(short = 'l', long)]
    league: Option<String>,

    /// only show fixtures in this country
    #[clap(long)]
    country: Option<String>,

    /// only show fixtures kicking off on this day (YYYY-MM-DD)
    #[clap(short = 'd', long)]
    date: Option<NaiveDate>,

    /// calibration applied to the split (replica or corrected)
    #[clap(long, default_value = "replica")]
    calibration: Calibration,

    /// number of teams to list in the form ranking
    #[clap(short = 't', long, default_value = "10")]
    top: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    debug!("args: {args:?}");

    let engine = ProbabilityEngine::try_from(Config {
        model: Model::Heuristic,
        calibration: args.calibration,
        ..Config::default()
    })?;

    let fixtures = read_fixtures(&args.file)?;
    info!(
        "read {} fixtures; leagues: {:?}, countries: {:?}",
        fixtures.len(),
        fixtures.leagues(),
        fixtures.countries()
    );
    let days = date_options(Utc::now().date_naive())
        .iter()
        .map(|day| day.format("%a %d/%m").to_string())
        .collect::<Vec<_>>();
    debug!("browsable days: {days:?}");

    let filter = FixtureFilter {
        league: args.league.clone(),
        country: args.country.clone(),
        date: args.date,
    };
    let groups = fixtures.group_by_league(&filter);
    if groups.is_empty() {
        warn!("no fixtures match {filter:?}");
        return Ok(());
    }

    let console = Console::default();
    for (league, league_fixtures) in &groups {
        let predicted = league_fixtures
            .iter()
            .map(|&fixture| {
                let probs = engine.form_probabilities(
                    fixture.teams.home.form(),
                    fixture.teams.away.form(),
                );
                (fixture, probs)
            })
            .collect::<Vec<_>>();
        println!("{league} ({} fixtures)", predicted.len());
        println!("{}", console.render(&tabulate_fixtures(&predicted)));
    }

    let teams = groups
        .iter()
        .flat_map(|(_, league_fixtures)| league_fixtures.iter())
        .flat_map(|fixture| [&fixture.teams.home, &fixture.teams.away])
        .map(|team| {
            TeamIndicators::default()
                .with_name(team.display_name())
                .with_results(team.form())
        })
        .collect::<Vec<_>>();
    let hot = rank_hot(&teams)
        .into_iter()
        .take(args.top)
        .map(|(team, hotness)| (team.display_name(), hotness))
        .collect::<Vec<_>>();
    println!("Form ranking");
    println!("{}", console.render(&tabulate_hot_teams(&hot)));
    Ok(())
}
