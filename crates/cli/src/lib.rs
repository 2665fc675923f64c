use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use smallcancel_core::{Analyzer, AnalysisConfig, PieceCount};
use smallcancel_words::RelatorSet;
use std::io;
use std::path::PathBuf;

mod input;
mod report;

use report::{render_report, render_verdict, Report};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let body = json!({ "status": "ok", "data": data });
    print_stdout(&serde_json::to_string_pretty(&body)?)
}

#[derive(Parser)]
#[command(name = "smallcancel")]
#[command(about = "Small cancellation certificates for finitely presented groups", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON on stdout (implies --quiet)
    #[arg(long, global = true)]
    json: bool,

    /// Analysis config (TOML); missing fields take their defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Cyclically reduce relators instead of rejecting unreduced ones
    #[arg(long, global = true)]
    reduce: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Look for a small cancellation certificate of hyperbolicity
    Check(RelatorArgs),

    /// List the pieces of the relator set
    Pieces(RelatorArgs),

    /// Largest piece-to-relator length ratio
    Cprime(CprimeArgs),

    /// Girth of the reduced Whitehead graph
    Girth(RelatorArgs),

    /// Fewest pieces spelling a cyclic rotation of some relator
    #[command(name = "min-pieces")]
    MinPieces(MinPiecesArgs),

    /// All metrics at once
    Report(RelatorArgs),
}

#[derive(Args)]
struct RelatorArgs {
    /// Relators as case-letter words, e.g. abAB (uppercase = inverse)
    relators: Vec<String>,

    /// JSON array of relators (letter strings or signed generator lists); `-` reads stdin
    #[arg(long)]
    file: Option<PathBuf>,
}

#[derive(Args)]
struct CprimeArgs {
    #[command(flatten)]
    input: RelatorArgs,

    /// Report 1 as soon as a ratio reaches 1/LAMBDA (overrides the config)
    #[arg(long)]
    lambda: Option<u32>,
}

#[derive(Args)]
struct MinPiecesArgs {
    #[command(flatten)]
    input: RelatorArgs,

    /// Stop once every relator needs at least this many pieces
    #[arg(long)]
    quit_at: Option<usize>,
}

impl RelatorArgs {
    fn load(&self, reduce: bool) -> Result<RelatorSet> {
        input::load_relators(&self.relators, self.file.as_deref(), reduce)
    }
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // keep stdout clean for JSON parsing
    if cli.json {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let json = cli.json;
    if let Err(err) = run(cli) {
        if json {
            let body = json!({ "status": "error", "message": format!("{err:#}") });
            print_stdout(&serde_json::to_string_pretty(&body)?)?;
            std::process::exit(1);
        }
        return Err(err);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = input::load_config(cli.config.as_deref())?;
    let reduce = cli.reduce;
    let json = cli.json;

    match cli.command {
        Commands::Check(args) => run_check(&args.load(reduce)?, config, json),
        Commands::Pieces(args) => run_pieces(&args.load(reduce)?, config, json),
        Commands::Cprime(args) => {
            let relators = args.input.load(reduce)?;
            let config = AnalysisConfig {
                lambda: args.lambda.unwrap_or(config.lambda),
                ..config
            };
            run_cprime(&relators, config, json)
        }
        Commands::Girth(args) => run_girth(&args.load(reduce)?, config, json),
        Commands::MinPieces(args) => {
            let relators = args.input.load(reduce)?;
            let quit_at = args.quit_at.map_or(PieceCount::Infinite, PieceCount::Finite);
            run_min_pieces(&relators, quit_at, config, json)
        }
        Commands::Report(args) => run_report(&args.load(reduce)?, config, json),
    }
}

fn analyzer(config: AnalysisConfig) -> Result<Analyzer> {
    Analyzer::new(config).context("Invalid analysis config")
}

/// Decision plus the certificate that settled it
fn run_check(relators: &RelatorSet, config: AnalysisConfig, json: bool) -> Result<()> {
    let verdict = analyzer(config)?
        .decide(relators, None)
        .context("Small cancellation check failed")?;

    if json {
        print_json(&json!({
            "hyperbolic": verdict.is_hyperbolic(),
            "verdict": verdict,
        }))?;
    } else {
        print_stdout(&render_verdict(&verdict))?;
    }
    Ok(())
}

fn run_pieces(relators: &RelatorSet, config: AnalysisConfig, json: bool) -> Result<()> {
    let pieces = analyzer(config)?.pieces(relators);
    let words: Vec<String> = pieces.iter().map(ToString::to_string).collect();

    if json {
        print_json(&json!({ "count": words.len(), "pieces": words }))?;
    } else {
        for word in &words {
            print_stdout(word)?;
        }
    }
    Ok(())
}

fn run_cprime(relators: &RelatorSet, config: AnalysisConfig, json: bool) -> Result<()> {
    let ratio = analyzer(config)?.cprime(relators)?;

    if json {
        print_json(&json!({
            "numerator": ratio.numerator(),
            "denominator": ratio.denominator(),
            "value": ratio.as_f64(),
        }))?;
    } else {
        print_stdout(&ratio.to_string())?;
    }
    Ok(())
}

fn run_girth(relators: &RelatorSet, config: AnalysisConfig, json: bool) -> Result<()> {
    let girth = analyzer(config)?.girth(relators);

    if json {
        print_json(&json!({ "girth": girth }))?;
    } else {
        print_stdout(&girth.to_string())?;
    }
    Ok(())
}

fn run_min_pieces(
    relators: &RelatorSet,
    quit_at: PieceCount,
    config: AnalysisConfig,
    json: bool,
) -> Result<()> {
    let count = analyzer(config)?
        .min_piece_count(relators, quit_at)
        .context("Piece-count search failed")?;

    if json {
        print_json(&json!({ "min_pieces": count, "quit_at": quit_at }))?;
    } else {
        print_stdout(&count.to_string())?;
    }
    Ok(())
}

fn run_report(relators: &RelatorSet, config: AnalysisConfig, json: bool) -> Result<()> {
    let report = Report::build(&analyzer(config)?, relators)?;

    if json {
        print_json(&report)?;
    } else {
        print_stdout(render_report(&report).trim_end())?;
    }
    Ok(())
}
