//! Mastermind Solver - CLI
//!
//! Suggests guesses for a Mastermind code using expected-discard scoring,
//! either interactively or against known secrets.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, analyze_code, parse_code, print_test_all_statistics,
        run_benchmark, run_simple, run_test_all, solve_code,
    },
    core::{GuessCode, Peg, SecretCode},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Opening, SessionConfig},
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind solver choosing guesses by expected discards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of peg colors in play
    #[arg(short, long, global = true, default_value = "6",
          value_parser = clap::value_parser!(u8).range(1..=8))]
    colors: u8,

    /// Number of pegs in a code
    #[arg(short, long, global = true, default_value = "4",
          value_parser = clap::value_parser!(u8).range(1..))]
    pegs: u8,

    /// Worker count for guess evaluation (default: available parallelism)
    #[arg(short, long, global = true)]
    workers: Option<usize>,

    /// Seed for reproducible tie-breaks and simulations
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Open with a half-and-half code instead of evaluating the full space
    #[arg(long, global = true, conflicts_with = "first_guess")]
    optimize: bool,

    /// Fixed opening guess, e.g. RROO
    #[arg(short = 'f', long, global = true)]
    first_guess: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): you hold the secret and score each guess
    Play,

    /// Solve a specific secret code
    Solve {
        /// The secret, as letters (RGBY) or peg names
        code: String,

        /// Show quality and candidate counts per round
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze a code as an opening guess
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Simulate games and report guess statistics
    Benchmark {
        /// Number of games to simulate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Play this secret every game instead of random ones
        #[arg(short, long)]
        secret: Option<String>,
    },

    /// Play every code in the space as the secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the session configuration from the global flags
fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = SessionConfig::default()
        .with_colors(Peg::palette(usize::from(cli.colors)))
        .with_pegs(usize::from(cli.pegs))
        .with_seed(cli.seed);

    if let Some(workers) = cli.workers {
        config = config.with_workers(workers);
    }

    if let Some(text) = &cli.first_guess {
        let code = parse_code(text, &config).map_err(|e| anyhow!(e))?;
        config = config.with_opening(Opening::Fixed(GuessCode::new(code)));
    } else if cli.optimize {
        config = config.with_opening(Opening::Split);
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = session_config(&cli)?;

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build_global()
    {
        warn!(error = %e, "could not size the worker pool");
    }
    debug!(
        colors = config.colors.len(),
        pegs = config.num_pegs,
        workers = config.workers,
        "session configured"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_simple(config).map_err(|e| anyhow!(e)),
        Commands::Solve { code, details } => run_solve_command(code, details, config),
        Commands::Analyze { code } => run_analyze_command(&code, &config),
        Commands::Benchmark { count, secret } => run_benchmark_command(count, secret, config),
        Commands::TestAll { limit } => run_test_all_command(limit, &config),
    }
}

fn run_solve_command(code: String, details: bool, config: SessionConfig) -> Result<()> {
    let result = solve_code(SolveConfig::new(code, config)).map_err(|e| anyhow!(e))?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(code: &str, config: &SessionConfig) -> Result<()> {
    let result = analyze_code(code, config).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, secret: Option<String>, config: SessionConfig) -> Result<()> {
    let secret = secret
        .map(|text| parse_code(&text, &config).map(SecretCode::new))
        .transpose()
        .map_err(|e| anyhow!(e))?;

    match &secret {
        Some(code) => println!("Running benchmark on {count} games with secret {code}..."),
        None => println!("Running benchmark on {count} random secrets..."),
    }

    let result = run_benchmark(&BenchmarkConfig {
        games: count,
        secret,
        session: config,
    })?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_test_all_command(limit: Option<usize>, config: &SessionConfig) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets",
        config.space_size()
    );
    println!(
        "Palette: {} colors, {} pegs",
        config.colors.len(),
        config.num_pegs
    );
    println!();

    let stats = run_test_all(config, limit, true)?;
    print_test_all_statistics(&stats);
    Ok(())
}
