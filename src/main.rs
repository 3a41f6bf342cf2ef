//! Wordle Sieve - CLI
//!
//! Wordle helper with TUI and CLI modes: filter a word list by the colours
//! seen so far and rank what is left.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use wordle_sieve::{
    commands::{
        SolveRequest, check_word, run_benchmark, run_simple, sample_targets, solve_pattern,
    },
    corpus::{CachedProvider, Corpus, CorpusConfig, CorpusProvider, DEFAULT_URL, SourceChoice},
    output::{
        formatters::progress_bar, print_benchmark_result, print_check_result, print_solve_report,
    },
    solver::{ScorerType, Solver},
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle helper: filter a word list by green/yellow/gray letters and rank the rest",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word-list source: local or remote (default: local if --corpus is given, else remote)
    #[arg(long, global = true, env = "WORDLE_SIEVE_SOURCE")]
    source: Option<String>,

    /// Local word-list file (one word per line, optional weight column)
    #[arg(short, long, global = true, env = "WORDLE_SIEVE_CORPUS")]
    corpus: Option<PathBuf>,

    /// Remote word-list URL
    #[arg(long, global = true, env = "WORDLE_SIEVE_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Directory for the downloaded word list
    #[arg(long, global = true, env = "WORDLE_SIEVE_CACHE_DIR", default_value = ".wordle_sieve")]
    cache_dir: PathBuf,

    /// Download the remote word list again even if it is cached
    #[arg(long, global = true)]
    refresh: bool,

    /// Scorer: frequency (default) or coverage
    #[arg(short, long, global = true, default_value = "frequency")]
    scorer: String,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive loop without TUI)
    Simple,

    /// Solve once for a pattern and letter lists
    Solve {
        /// Five positions, letters or wildcards ('.', '?', '_', '*')
        pattern: String,

        /// Letters known to be in the word
        #[arg(short, long, default_value = "")]
        present: String,

        /// Letters known not to be in the word
        #[arg(short, long, default_value = "")]
        absent: String,

        /// Number of suggestions to show
        #[arg(short = 'n', long, default_value = "20")]
        top: usize,
    },

    /// Check whether a word is in the word list
    Check {
        /// Word to look up
        word: String,
    },

    /// Simulate games against random words from the list
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for picking the words
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,wordle_sieve={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn corpus_config(cli: &Cli) -> Result<CorpusConfig> {
    let source = match &cli.source {
        Some(name) => match SourceChoice::from_name(name) {
            Some(source) => source,
            None => bail!("unknown word-list source '{name}' (expected local or remote)"),
        },
        // A corpus path on its own implies the local source
        None if cli.corpus.is_some() => SourceChoice::Local,
        None => SourceChoice::default(),
    };

    Ok(CorpusConfig {
        source,
        path: cli.corpus.clone(),
        url: cli.url.clone(),
        cache_dir: cli.cache_dir.clone(),
        refresh: cli.refresh,
    })
}

fn load_corpus(cli: &Cli) -> Result<Arc<Corpus>> {
    let config = corpus_config(cli)?;
    let provider = CachedProvider::new(config.build()?);
    let corpus = provider
        .load_word_list()
        .context("could not load the word list")?;
    info!(words = corpus.len(), "word list ready");
    Ok(corpus)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = load_corpus(&cli)?;
    let scorer = ScorerType::from_name(&cli.scorer);
    debug!(scorer = scorer.name(), "scorer selected");
    let solver = Solver::new(scorer, &corpus);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(solver),
        Commands::Simple => run_simple(&solver),
        Commands::Solve {
            pattern,
            present,
            absent,
            top,
        } => run_solve_command(&solver, pattern, present, absent, top),
        Commands::Check { word } => {
            print_check_result(&check_word(&corpus, &word));
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&solver, count, seed);
            Ok(())
        }
    }
}

fn run_solve_command(
    solver: &Solver<ScorerType>,
    pattern: String,
    present: String,
    absent: String,
    top: usize,
) -> Result<()> {
    let request = SolveRequest {
        pattern,
        present,
        absent,
        limit: top,
    };
    let report = solve_pattern(solver, &request).context("invalid constraints")?;
    print_solve_report(&report);
    Ok(())
}

fn run_benchmark_command(solver: &Solver<ScorerType>, count: usize, seed: Option<u64>) {
    let seed = seed.unwrap_or_else(rand::random);
    let targets = sample_targets(solver.corpus(), count, seed);

    println!(
        "Running benchmark on {} random words (seed {seed}, scorer {})...",
        targets.len(),
        solver.scorer().name()
    );

    let result = run_benchmark(solver, &targets, &progress_bar(targets.len()));
    print_benchmark_result(&result);
}

fn run_play_command(solver: Solver<ScorerType>) -> Result<()> {
    use wordle_sieve::interactive::{App, run_tui};

    run_tui(App::new(solver))
}
