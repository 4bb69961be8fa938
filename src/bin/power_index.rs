use clap::Parser;
use power_index::{
    GameDescription, Method, PowerIndexError, Result, coerce_field, compute_indices, swing_counts,
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode};
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Compute Shapley–Shubik or Banzhaf power indices for a vector weighted voting game
#[derive(Parser, Debug)]
#[command(name = "power-index", version)]
struct Opts {
    /// Power index to compute: shapley or banzhaf
    #[arg(short, long, default_value = "shapley")]
    method: Method,

    /// Quota for one issue; repeat once per issue, paired with --weights
    #[arg(short, long, requires = "weights", conflicts_with = "csv")]
    quota: Vec<String>,

    /// Comma-separated player weights for one issue; blank entries count as zero
    #[arg(short, long, requires = "quota")]
    weights: Vec<String>,

    /// CSV file with a header row and one `quota,w0,w1,...` record per issue
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print raw Banzhaf swing counts instead of normalized indices
    #[arg(long)]
    raw: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize, Tabled)]
struct SwingRow {
    player: usize,
    swings: u64,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_field(text: &str, what: &str) -> Result<i64> {
    coerce_field(text)
        .ok_or_else(|| PowerIndexError::InvalidInput(format!("{what} '{text}' is not an integer")))
}

fn game_from_flags(quotas: &[String], weights: &[String]) -> Result<GameDescription> {
    if quotas.len() != weights.len() {
        return Err(PowerIndexError::QuotaCountMismatch {
            expected: weights.len(),
            actual: quotas.len(),
        });
    }

    let quotas = quotas
        .iter()
        .map(|q| parse_field(q, "quota"))
        .collect::<Result<Vec<_>>>()?;
    let weight_vectors = weights
        .iter()
        .map(|list| {
            list.split(',')
                .map(|w| parse_field(w, "weight"))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    GameDescription::from_integers(&quotas, &weight_vectors)
}

fn run(opts: &Opts) -> Result<()> {
    let game = match &opts.csv {
        Some(path) => GameDescription::from_csv(path)?,
        None => game_from_flags(&opts.quota, &opts.weights)?,
    };
    info!(
        players = game.player_count(),
        issues = game.issue_count(),
        "loaded game"
    );

    if opts.raw {
        let rows: Vec<SwingRow> = swing_counts(&game)?
            .into_iter()
            .enumerate()
            .map(|(player, swings)| SwingRow { player, swings })
            .collect();
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            println!("{}", Table::new(rows));
        }
        return Ok(());
    }

    let result = compute_indices(&game, opts.method)?;
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", Table::new(result.rows()));
    }

    Ok(())
}

fn main() -> ExitCode {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error computing power indices: {e}");
            ExitCode::FAILURE
        }
    }
}
