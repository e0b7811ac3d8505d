use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use leadscan::engine::LeadSearch;
use leadscan::lead::load_leads;
use leadscan::output::{print_matches, print_stats, write_json};
use leadscan::shell::Shell;
use leadscan::utils::{AppConfig, get_config_path};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leadscan")]
#[command(about = "Fuzzy search, ranking and highlighting for CRM lead exports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the app data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a leads file once and print ranked results
    Search {
        /// Search query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        /// JSON array of lead records
        #[arg(short, long)]
        leads: PathBuf,

        /// Maximum results to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print results and stats as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: one query per line, history and suggestions
    Shell {
        /// JSON array of lead records
        #[arg(short, long)]
        leads: PathBuf,

        /// Maximum results to print per query
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print text as HTML with the given terms highlighted
    Highlight {
        /// Text to render
        text: String,

        /// Term to highlight (repeatable)
        #[arg(short, long = "term")]
        terms: Vec<String>,
    },
    /// Show the config file location and effective settings
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let mut stdout = StandardStream::stdout(cli.color.into());

    match cli.command {
        Commands::Search {
            query,
            leads,
            limit,
            json,
        } => {
            let query = query.join(" ");
            let leads = load_leads(&leads)?;
            let limit = limit.or(config.search.result_limit);

            let mut engine = LeadSearch::new(&config);
            engine.build_index(&leads);
            let ranked = engine.search_ranked(&query, &leads);

            if json {
                write_json(&mut stdout, &ranked.matches, ranked.stats.as_ref(), limit)?;
            } else {
                print_matches(&mut stdout, &ranked.matches, engine.highlighter_mut(), limit)?;
                print_stats(&mut stdout, ranked.stats.as_ref(), leads.len())?;
            }
        }
        Commands::Shell { leads, limit } => {
            let limit = limit.or(config.search.result_limit);
            let mut shell = Shell::open(LeadSearch::new(&config), &leads, limit)?;
            shell.run(io::stdin().lock(), &mut stdout)?;
        }
        Commands::Highlight { text, terms } => {
            let mut engine = LeadSearch::new(&config);
            writeln!(stdout, "{}", engine.highlight(text.as_str(), &terms))?;
        }
        Commands::Config => {
            match &cli.config {
                Some(path) => writeln!(stdout, "Config file: {}", path.display())?,
                None => writeln!(stdout, "Config file: {}", get_config_path()?.display())?,
            }
            let rendered = serde_json::to_string_pretty(&config)
                .context("Failed to serialize config")?;
            writeln!(stdout, "{}", rendered)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so results on stdout stay pipeable. Level comes from
/// `LEADSCAN_LOG` (e.g. `LEADSCAN_LOG=debug`), defaulting to warnings.
fn init_logging() {
    let filter = EnvFilter::try_from_env("LEADSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load().or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Ok(AppConfig::default())
        }),
    }
}
