use anyhow::Context;
use clap::{Parser, Subcommand};
use corpus_stats::config::{default_workers, WordCountConfig, DEFAULT_CHUNK_SIZE, DEFAULT_THRESHOLD};
use corpus_stats::corpus::FileSet;
use corpus_stats::{pipeline, report};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, trace};

/// Count lines and word frequencies across a directory of text files
#[derive(Parser)]
#[command(name = "corpus-stats")]
#[command(about = "Count lines and word frequencies across a directory of text files", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of lines in each file and the total
    Lines {
        /// Directory whose entries are counted
        #[arg(default_value = "shakespeare")]
        dir: PathBuf,
    },
    /// Print every word that occurs more often than the threshold
    Words {
        /// Directory whose entries are counted
        #[arg(default_value = "shakespeare")]
        dir: PathBuf,

        /// Report words occurring strictly more often than this
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u64,

        /// Number of worker threads (default: available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Files dispatched to a worker at a time
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .with_target(cli.verbose >= 2)
        .with_thread_names(cli.verbose >= 3)
        .with_line_number(cli.verbose >= 3)
        .init();

    debug!("corpus-stats started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let result = match cli.command {
        Commands::Lines { dir } => run_lines(&dir),
        Commands::Words {
            dir,
            threshold,
            workers,
            chunk_size,
        } => {
            let config = WordCountConfig {
                workers: workers.unwrap_or_else(default_workers),
                chunk_size,
                threshold,
            };
            run_words(&dir, &config)
        }
    };

    if let Err(e) = result {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run_lines(dir: &Path) -> anyhow::Result<()> {
    let files = FileSet::discover(dir)?;
    let line_report = pipeline::line_counts(&files)
        .with_context(|| format!("Failed to count lines in {}", dir.display()))?;

    let mut out = io::stdout().lock();
    report::write_line_report(&mut out, &line_report)?;
    out.flush()?;
    Ok(())
}

fn run_words(dir: &Path, config: &WordCountConfig) -> anyhow::Result<()> {
    let files = FileSet::discover(dir)?;
    let counts = pipeline::word_frequencies(&files, config)
        .with_context(|| format!("Failed to count words in {}", dir.display()))?;

    let mut out = io::stdout().lock();
    report::write_word_report(&mut out, &counts, config.threshold)?;
    out.flush()?;
    Ok(())
}
