//! Word Ladder - CLI
//!
//! Finds the shortest ladder between two words, one letter at a time.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::borrow::Cow;
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{
        BenchmarkConfig, SolveConfig, check_words, find_neighbors, pick_pairs, run_benchmark,
        run_simple, solve_ladder,
    },
    dictionary::{Dictionary, DictionaryStatus, loader::load_source},
    output::{
        print_benchmark_result, print_check_result, print_neighbors_result, print_solve_result,
    },
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders through a dictionary, one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a whitespace-separated word list
    #[arg(
        short,
        long,
        global = true,
        env = "WORD_LADDER_DICTIONARY",
        default_value = "embedded"
    )]
    dictionary: String,

    /// Increase log detail (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', global = true, action = clap::ArgAction::Count)]
    log: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Simple,

    /// Find the shortest ladder between two words
    Solve {
        /// Word to start from
        start: String,

        /// Word to reach
        end: String,

        /// Give up beyond this many steps
        #[arg(short, long)]
        max_depth: Option<usize>,

        /// Show search statistics
        #[arg(long)]
        verbose: bool,
    },

    /// List dictionary words one letter away from a word
    Neighbors {
        /// Word to look around
        word: String,
    },

    /// Check a word against the dictionary, and optionally against another word
    Check {
        /// Word to check
        word: String,

        /// Second word to compare with the first
        other: Option<String>,
    },

    /// Solve random pairs in parallel and report statistics
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Word length to draw pairs from (default: most common length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Seed for reproducible pairs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(log: u8) {
    let level = match log {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("word_ladder={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dictionary(source: &str) -> Result<Cow<'static, Dictionary>> {
    let dictionary = load_source(source);
    if let DictionaryStatus::Unavailable { reason } = dictionary.status() {
        bail!("Dictionary unavailable: {reason}");
    }
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log);

    let dictionary = load_dictionary(&cli.dictionary)?;

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&dictionary).context("Interactive mode failed"),
        Commands::Solve {
            start,
            end,
            max_depth,
            verbose,
        } => run_solve_command(&start, &end, max_depth, verbose, &dictionary),
        Commands::Neighbors { word } => {
            let result = find_neighbors(&word, &dictionary)?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Check { word, other } => {
            let result = check_words(&word, other.as_deref(), &dictionary);
            print_check_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            length,
            seed,
        } => {
            run_benchmark_command(
                &BenchmarkConfig {
                    count,
                    length,
                    seed,
                },
                &dictionary,
            );
            Ok(())
        }
    }
}

fn run_solve_command(
    start: &str,
    end: &str,
    max_depth: Option<usize>,
    verbose: bool,
    dictionary: &Dictionary,
) -> Result<()> {
    let config = SolveConfig::new(start, end).with_max_depth(max_depth);
    let result = solve_ladder(config, dictionary)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(config: &BenchmarkConfig, dictionary: &Dictionary) {
    let pairs = pick_pairs(dictionary, config);
    match config.seed {
        Some(seed) => println!("Solving {} random pairs (seed {seed})...", pairs.len()),
        None => println!("Solving {} random pairs...", pairs.len()),
    }

    let result = run_benchmark(dictionary, &pairs, true);
    print_benchmark_result(&result);
}
