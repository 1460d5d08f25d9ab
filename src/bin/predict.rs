use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use sportpredict::data::TeamStatistics;
use sportpredict::engine::{Calibration, Config, Model, ProbabilityEngine};
use sportpredict::file::ReadJsonFile;
use sportpredict::indicators::{MatchStatLine, Matchup};
use sportpredict::print::{
    tabulate_goal_tendencies, tabulate_probabilities, tabulate_radars, tabulate_stat_lines,
};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// file to source the home and away team indicators from
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// file to source the per-team match statistics from, home team first
    #[clap(short = 's', long)]
    stats: Option<PathBuf>,

    /// file to source the engine config from
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// model used to split the outcomes (full or heuristic)
    #[clap(short = 'm', long)]
    model: Option<Model>,

    /// calibration applied to the split (replica or corrected)
    #[clap(long)]
    calibration: Option<Calibration>,

    /// print the prediction as JSON
    #[clap(short = 'j', long)]
    json: bool,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if self.file.is_none() && self.stats.is_none()
            || self.file.is_some() && self.stats.is_some()
        {
            bail!("either the -f or the -s flag must be specified");
        }
        Ok(())
    }
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
    args.validate()?;
    debug!("args: {args:?}");

    let config = read_config(&args)?;
    let engine = ProbabilityEngine::try_from(config)?;
    let (matchup, stat_lines) = read_matchup(&args)?;
    info!(
        "{} vs {} ({} model, {} calibration)",
        matchup.home.display_name(),
        matchup.away.display_name(),
        engine.config().model,
        engine.config().calibration
    );

    let prediction = engine.predict(&matchup.home, &matchup.away);
    debug!("prediction: {prediction:?}");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    let console = Console::default();
    println!("{}", console.render(&tabulate_probabilities(&prediction.probabilities)));
    println!("{}", console.render(&tabulate_goal_tendencies(&prediction.goals)));
    println!("{}", console.render(&tabulate_radars(&matchup.home, &matchup.away)));
    if let Some((home, away)) = stat_lines {
        let names = (matchup.home.display_name(), matchup.away.display_name());
        println!("{}", console.render(&tabulate_stat_lines(names, &home, &away)));
    }
    Ok(())
}

fn read_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        None => Config::default(),
        Some(path) => {
            debug!("reading config from {path:?}");
            Config::read_json_file(path)?
        }
    };
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(calibration) = args.calibration {
        config.calibration = calibration;
    }
    Ok(config)
}

/// Home and away, only available when reading match statistics.
type StatLines = Option<(MatchStatLine, MatchStatLine)>;

fn read_matchup(args: &Args) -> anyhow::Result<(Matchup, StatLines)> {
    match (&args.file, &args.stats) {
        (Some(path), _) => {
            debug!("reading team indicators from {path:?}");
            Ok((Matchup::read_json_file(path)?, None))
        }
        (_, Some(path)) => {
            debug!("reading match statistics from {path:?}");
            let stats = Vec::<TeamStatistics>::read_json_file(path)?;
            match stats.as_slice() {
                [home, away] => Ok((
                    Matchup::from_match_stats(home, away),
                    Some((
                        MatchStatLine::from_match_stats(home, away),
                        MatchStatLine::from_match_stats(away, home),
                    )),
                )),
                _ => bail!("expected statistics for exactly two teams, got {}", stats.len()),
            }
        }
        _ => unreachable!(),
    }
}
