//! Letterbag - CLI
//!
//! Joker, glob and regex word search over locale-aware alphabets.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::Builder;
use letterbag::{
    commands::{
        BenchConfig, SearchConfig, SearchMode, Searcher, describe_alphabet, run_benchmark,
        run_interactive,
    },
    core::LocaleRegistry,
    matching::MatchEngine,
    output::{print_alphabet_summary, print_benchmark_result, print_search_report},
    wordlists::{build_registry, load_word_list},
};
use log::{LevelFilter, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letterbag",
    about = "Wildcard word search over locale-aware alphabets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Alphabet: built-in name (tr, de) or path to a lower<TAB>upper file
    #[arg(short, long, global = true)]
    alphabet: Option<String>,

    /// Locale to search under (default: the alphabet's name, or 'en')
    #[arg(short, long, global = true)]
    locale: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Match letters in any order; each '?' is one unknown letter
    Joker {
        /// Word list, one entry per line
        dictionary: PathBuf,

        /// Query to run (interactive mode if omitted)
        query: Option<String>,
    },

    /// Match letters in place; '?' is one letter, '*' one or more
    Glob {
        /// Word list, one entry per line
        dictionary: PathBuf,

        /// Query to run (interactive mode if omitted)
        query: Option<String>,
    },

    /// Find whitespace-delimited tokens containing a regex match
    Grep {
        /// Text file to search
        file: PathBuf,

        /// Regular expression (interactive mode if omitted)
        pattern: Option<String>,
    },

    /// Show the letters of the active alphabet
    Letters,

    /// Time random joker queries built from the word list
    Bench {
        /// Word list, one entry per line
        dictionary: PathBuf,

        /// Number of queries to run
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Letters hidden behind jokers in each query
        #[arg(short = 'j', long, default_value = "2")]
        jokers: usize,

        /// Seed for reproducible query selection
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let (registry, locale) = build_registry(cli.alphabet.as_deref(), cli.locale)
        .context("Failed to set up the alphabet")?;
    info!("Using locale '{locale}'");

    match cli.command {
        Commands::Joker { dictionary, query } => {
            run_search_command(SearchMode::Joker, &dictionary, query.as_deref(), &locale, &registry)
        }
        Commands::Glob { dictionary, query } => {
            run_search_command(SearchMode::Glob, &dictionary, query.as_deref(), &locale, &registry)
        }
        Commands::Grep { file, pattern } => {
            run_search_command(SearchMode::Grep, &file, pattern.as_deref(), &locale, &registry)
        }
        Commands::Letters => {
            let summary = describe_alphabet(&locale, &registry)?;
            print_alphabet_summary(&summary);
            Ok(())
        }
        Commands::Bench {
            dictionary,
            count,
            jokers,
            seed,
        } => run_bench_command(&dictionary, count, jokers, seed, &locale, &registry),
    }
}

fn run_search_command(
    mode: SearchMode,
    path: &Path,
    query: Option<&str>,
    locale: &str,
    registry: &LocaleRegistry,
) -> Result<()> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config = SearchConfig::new(mode).with_locale(locale);
    let searcher = Searcher::new(&config, source, registry)?;

    if let Some(query) = query {
        let report = searcher.run(query)?;
        info!("Query took {:.3}ms", report.duration.as_secs_f64() * 1000.0);
        print_search_report(&report)?;
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let queries = run_interactive(&searcher, stdin.lock(), &mut stdout.lock())?;
        info!("Ran {queries} queries");
    }
    Ok(())
}

fn run_bench_command(
    path: &Path,
    count: usize,
    jokers: usize,
    seed: Option<u64>,
    locale: &str,
    registry: &LocaleRegistry,
) -> Result<()> {
    let dictionary = load_word_list(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let engine = MatchEngine::new(&dictionary, locale, registry)?;

    println!(
        "Running benchmark: {count} queries with {jokers} jokers over {} entries...",
        engine.len()
    );

    let config = BenchConfig {
        seed,
        ..BenchConfig::new(count, jokers)
    };
    let result = run_benchmark(&engine, &dictionary, &config);
    print_benchmark_result(&result);
    Ok(())
}
