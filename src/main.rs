//! Nerdle Solver - CLI
//!
//! Interactive assistant, computer-hosted game, self-play benchmark and
//! snapshot generation for Nerdle equation puzzles.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use nerdle_solver::{
    commands::{
        Console, SolveConfig, Tables, analyze_equation, computer::random_answer, run_benchmark,
        run_computer, run_generate, run_play, sample_targets, solve_equation, symbol_statistics,
    },
    config::{SelectionMode, SolverConfig},
    core::DEFAULT_LENGTH,
    logging::init_tracing,
    output::{
        formatters::progress_bar, print_analysis_result, print_benchmark_result,
        print_generate_summary, print_solve_result, print_stats,
    },
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nerdle_solver",
    about = "Nerdle solver using information theory over the full equation space",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Symbols per equation (3-10)
    #[arg(short, long, global = true, env = "NERDLE_LENGTH", default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Guess selection: exact (needs a snapshot) or approximate
    #[arg(
        short,
        long,
        global = true,
        env = "NERDLE_MODE",
        value_enum,
        default_value_t = SelectionMode::Exact
    )]
    mode: SelectionMode,

    /// Directory holding generated snapshots
    #[arg(short = 'd', long, global = true, env = "NERDLE_SNAPSHOT_DIR", default_value = ".")]
    snapshot_dir: PathBuf,

    /// Log more (-v info, -vv debug, -vvv trace); `RUST_LOG` takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the equation list and feedback matrix snapshot
    Generate {
        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Interactive assistant for a game played elsewhere (default)
    Play,

    /// Play against a random hidden equation
    Computer,

    /// Solve a specific target equation
    Solve {
        /// The target equation to solve
        equation: String,

        /// Show candidate counts and entropy per turn
        #[arg(long)]
        details: bool,
    },

    /// Analyze the entropy of a specific opening equation
    Analyze {
        /// Equation to analyze
        equation: String,
    },

    /// Benchmark solver performance on random hidden equations
    Benchmark {
        /// Number of random equations to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Per-position symbol frequencies over every equation
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = SolverConfig::new(cli.length, cli.mode, cli.snapshot_dir)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Generate { quiet } => {
            let summary = run_generate(config.length, &config.snapshot_dir, quiet)?;
            print_generate_summary(&summary);
            Ok(())
        }
        Commands::Play => run_play_command(&config),
        Commands::Computer => run_computer_command(&config),
        Commands::Solve { equation, details } => run_solve_command(&config, equation, details),
        Commands::Analyze { equation } => run_analyze_command(&config, &equation),
        Commands::Benchmark { count, seed } => run_benchmark_command(&config, count, seed),
        Commands::Stats => run_stats_command(&config),
    }
}

/// Tables holding only the equations, whatever mode is configured
fn load_equations(config: &SolverConfig) -> Result<Tables> {
    let mut config = config.clone();
    config.mode = SelectionMode::Approximate;
    Tables::load(&config)
}

fn run_play_command(config: &SolverConfig) -> Result<()> {
    let tables = Tables::load(config)?;
    let mut session = tables.session(config.mode);
    let mut console = Console::stdio();

    run_play(&mut session, &mut console)?;
    Ok(())
}

fn run_computer_command(config: &SolverConfig) -> Result<()> {
    let tables = Tables::load(config)?;
    let answer = random_answer(tables.universe()).context("No equations of this length exist")?;
    let mut session = tables.session(config.mode);
    let mut console = Console::stdio();

    run_computer(&mut session, answer, &mut console)?;
    Ok(())
}

fn run_solve_command(config: &SolverConfig, equation: String, details: bool) -> Result<()> {
    let tables = Tables::load(config)?;
    let mut session = tables.session(config.mode);

    let result = solve_equation(SolveConfig::new(equation), &mut session)?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_analyze_command(config: &SolverConfig, equation: &str) -> Result<()> {
    let tables = load_equations(config)?;
    let result = analyze_equation(equation, tables.universe(), tables.lookup())?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(config: &SolverConfig, count: usize, seed: Option<u64>) -> Result<()> {
    let tables = Tables::load(config)?;
    let universe = tables.universe();
    let targets = sample_targets(universe.len(), count, seed);

    println!(
        "Running benchmark on {} random equations ({} mode)...",
        targets.len(),
        config.mode
    );

    let progress = progress_bar(targets.len() as u64, "Benchmark");
    let result = run_benchmark(
        tables.strategy(config.mode),
        universe,
        tables.lookup(),
        &targets,
        &progress,
    );
    progress.finish_and_clear();

    print_benchmark_result(&result);
    Ok(())
}

fn run_stats_command(config: &SolverConfig) -> Result<()> {
    let tables = load_equations(config)?;
    let stats = symbol_statistics(tables.universe());
    print_stats(&stats, tables.universe().len());
    Ok(())
}
