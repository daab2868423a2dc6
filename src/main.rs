mod batting;
mod csv;
mod event;
mod field;
mod geometry;
mod palette;
mod percentage;
mod pitches;
mod report;
mod spray;
mod stats;
mod table;
mod zone;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use field::{FieldGeometry, DEFAULT_FENCE_RADIUS};
use itertools::Itertools;
use report::Report;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Box score, spray chart and plate-location data for one batter's game.
#[derive(Debug, Parser)]
#[command(name = "hitreport")]
struct Cli {
    /// Play-by-play event table (CSV)
    events: PathBuf,

    /// Batter to report on, as written in the Batter column
    #[arg(short, long, env = "HITREPORT_BATTER")]
    batter: String,

    /// Distance from home plate to the outfield fence, in feet
    #[arg(long, env = "HITREPORT_FENCE_RADIUS", default_value_t = DEFAULT_FENCE_RADIUS)]
    fence_radius: f64,

    /// Write the full report as JSON
    #[arg(long, env = "HITREPORT_JSON")]
    json: Option<PathBuf>,

    /// Write spray chart landing points as CSV
    #[arg(long, env = "HITREPORT_SPRAY_CSV")]
    spray_csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

trait ResultExt<T, E> {
    fn log_err(self) -> Option<T>;
    fn log_warn(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn log_err(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(err) => {
                log::error!("{:#}", err);
                None
            }
        }
    }

    fn log_warn(self) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(err) => {
                log::warn!("{:#}", err);
                None
            }
        }
    }
}

fn main() {
    // .env first, so its values are visible to the env fallbacks below
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if run(&cli).log_err().is_none() {
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    ensure!(
        cli.fence_radius.is_finite() && cli.fence_radius > 0.0,
        "invalid fence radius {}",
        cli.fence_radius
    );

    let loaded = csv::load_batter_file(&cli.events, &cli.batter)?;
    if !loaded.dropped_columns.is_empty() {
        log::debug!(
            "dropped empty columns: {}",
            loaded.dropped_columns.iter().join(", ")
        );
    }
    if loaded.rows.is_empty() {
        log::warn!("no events for batter {:?}", cli.batter);
    }

    let report = Report::build(
        &cli.batter,
        &loaded.rows,
        FieldGeometry::with_fence_radius(cli.fence_radius),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}\n", report.title())?;
    let box_score = batting::table(report.stats);
    log::debug!("{}", box_score.key());
    write!(out, "{}", box_score)?;
    for (title, mix) in [("Strikes", &report.strike_mix), ("Balls", &report.ball_mix)] {
        if !mix.is_empty() {
            writeln!(out, "\n{}", title)?;
            write!(out, "{}", batting::mix_table(mix))?;
        }
    }
    if let Some(best) = &report.best_contact {
        if let Some(exit_speed) = best.exit_speed {
            writeln!(
                out,
                "\nBest contact: {} at {:.1} mph ({:.2}, {:.2})",
                best.label, exit_speed, best.side, best.height
            )?;
        }
    }

    if let Some(path) = &cli.json {
        let mut writer = BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        );
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writer.flush()?;
        log::info!("wrote report to {}", path.display());
    }

    if let Some(path) = &cli.spray_csv {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        csv::write_spray(BufWriter::new(file), &report.spray)?;
        log::info!(
            "wrote {} landing points to {}",
            report.spray.len(),
            path.display()
        );
    }

    Ok(())
}
