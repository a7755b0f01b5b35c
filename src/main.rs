//! tst_words - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds a ternary search tree from
//! a word list and runs the requested command against it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tst_words_lib::config::{ConfigLoader, LogConfig, TstConfig, ENV_PREFIX};
use tst_words_lib::data_structures::TernarySearchTree;
use tst_words_lib::error::{report_error, ErrorContext, TstError, TstResult};
use tst_words_lib::wordlist::{verify_membership, WordListReader};

/// Command line arguments for tst_words.
#[derive(Parser, Debug)]
#[clap(name = "tst_words", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overrides `words.path`
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load the word list and print tree statistics
    Load,

    /// Look a word up
    Search {
        /// Word or prefix to look up
        word: String,

        /// Require the word itself to be stored
        #[clap(long)]
        exact: bool,

        /// Accept any stored word starting with the query
        #[clap(long, conflicts_with = "exact")]
        prefix: bool,

        /// Print every stored word starting with the query
        #[clap(long)]
        completions: bool,
    },

    /// Print every stored word in lexicographic order
    List {
        /// Print a JSON array instead of one word per line
        #[clap(long)]
        json: bool,
    },

    /// Print the node structure of the tree
    Dump,

    /// Check the tree against the words it was built from
    Verify,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to standard
/// error so that command output on standard output stays clean.
fn init_logging(log: &LogConfig) -> TstResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| TstError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the tree from the configured word list.
fn build_tree(config: &TstConfig) -> TstResult<(TernarySearchTree, Vec<String>)> {
    let reader = WordListReader::new(config.words.clone());
    let words = reader.read_configured()?;

    let mut tree = TernarySearchTree::new();
    let summary = WordListReader::insert_all(&mut tree, &words);
    info!(
        words = summary.words,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        "Tree built"
    );
    Ok((tree, words))
}

/// Writes the default configuration as TOML.
fn gen_config(output: &Path) -> TstResult<()> {
    info!("Generating default configuration");
    let default_config = TstConfig::default();

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| TstError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run(args: Args) -> TstResult<ExitCode> {
    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = loaded
        .as_ref()
        .map(|config| config.log.clone())
        .unwrap_or_default();
    init_logging(&log_config)?;
    tst_words_lib::init();

    let command = args.command.unwrap_or(Command::Load);
    if let Command::GenConfig { output } = &command {
        // The defaults do not depend on whatever configuration is in place
        gen_config(output)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = loaded?;
    if let Some(words) = args.words {
        config.words.path = Some(words);
    }

    match command {
        Command::Load => {
            let (tree, _) = build_tree(&config)?;
            let stats = tree.stats();
            println!("strings:        {}", stats.strings);
            println!("nodes:          {}", stats.nodes);
            println!("terminal nodes: {}", stats.terminal_nodes);
            println!("max depth:      {}", stats.max_depth);
        }
        Command::Search {
            word,
            exact,
            prefix,
            completions,
        } => {
            let (tree, _) = build_tree(&config)?;
            if completions {
                for found in tree.strings_with_prefix(&word) {
                    println!("{found}");
                }
            } else {
                let exact = config.search.resolve_exact(exact, prefix);
                let found = tree.search(&word, exact);
                println!("{found}");
                if !found {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::List { json } => {
            let (tree, _) = build_tree(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&tree.all_strings())?);
            } else {
                for word in &tree {
                    println!("{word}");
                }
            }
        }
        Command::Dump => {
            let (tree, _) = build_tree(&config)?;
            println!("{}", tree.to_debug_string());
        }
        Command::Verify => {
            let (tree, words) = build_tree(&config)?;
            let report = verify_membership(&tree, &words);
            info!(
                words = report.words_checked,
                prefixes = report.prefixes_checked,
                failures = report.failures.len(),
                "Verification finished"
            );
            for failure in &report.failures {
                println!("{failure}");
            }
            if !report.is_ok() {
                warn!("Tree does not match its word list");
                return Ok(ExitCode::FAILURE);
            }
            println!(
                "ok: {} words, {} prefixes",
                report.words_checked, report.prefixes_checked
            );
        }
        // Written before the configuration was needed
        Command::GenConfig { .. } => {}
    }

    Ok(ExitCode::SUCCESS)
}

/// Main entry point for the application.
fn main() -> ExitCode {
    let args = Args::parse();
    let config_details = args
        .config
        .as_ref()
        .map(|path| format!("config file: {}", path.display()));

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            let mut context = ErrorContext::new(e, "tst_words");
            if let Some(details) = config_details {
                context = context.with_details(details);
            }
            report_error(context);
            ExitCode::FAILURE
        }
    }
}
