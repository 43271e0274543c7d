use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::Level;

use fret_cli::config::RunConfig;
use fret_cli::logging::init_logging;
use fret_cli::report::SolveReport;
use fret_solver::FingeringSolver;

/// Ergonomic fingering paths for fretted instruments.
#[derive(Debug, Parser)]
#[command(
    name = "fretpath",
    author,
    version,
    about = "Maps a riff onto the fretboard with minimal hand movement"
)]
struct Cli {
    /// Note names in scientific pitch notation (e.g. E2 G2 B2).
    #[arg(value_name = "NOTE")]
    notes: Vec<String>,

    /// Read the riff from a file instead, one note per line.
    #[arg(long, value_name = "FILE", conflicts_with = "notes")]
    riff_file: Option<PathBuf>,

    /// Path to a YAML run configuration (tuning, frets, cost weights).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the instrument fret count.
    #[arg(long, value_name = "COUNT")]
    frets: Option<u8>,

    /// Solver engine; `both` cross-checks the two and reports A*'s path.
    #[arg(long, value_enum, default_value = "astar")]
    engine: EngineArg,

    /// Emit the report as pretty JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: Level,

    /// Write logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,

    /// Exit after validating the configuration (no riff is solved).
    #[arg(long)]
    validate_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineArg {
    Astar,
    Dp,
    Both,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level, cli.log_json);

    let mut config = match &cli.config {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    if let Some(frets) = cli.frets {
        config.instrument.frets = frets;
    }
    let (mapper, model) = config.build()?;

    if cli.validate_only {
        println!("configuration ok");
        return Ok(());
    }

    let riff = load_riff(&cli)?;
    let solver = FingeringSolver::new(mapper, model);

    let report = match cli.engine {
        EngineArg::Astar => SolveReport::new("astar", &riff, &solver.solve(&riff)),
        EngineArg::Dp => SolveReport::new("dp", &riff, &solver.solve_exact(&riff)),
        EngineArg::Both => {
            let astar = solver.solve(&riff);
            let exact = solver.solve_exact(&riff);
            anyhow::ensure!(
                (astar.analysis.total - exact.analysis.total).abs() < 1e-9
                    && astar.path.len() == exact.path.len(),
                "engines disagree: astar total {} ({} notes), dp total {} ({} notes)",
                astar.analysis.total,
                astar.path.len(),
                exact.analysis.total,
                exact.path.len(),
            );
            SolveReport::new("both", &riff, &astar)
        }
    };

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn load_riff(cli: &Cli) -> anyhow::Result<Vec<String>> {
    match &cli.riff_file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading riff file at {}", path.display()))?;
            Ok(text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string)
                .collect())
        }
        None => Ok(cli.notes.clone()),
    }
}
