use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use pubtator_highlight::config::{find_config_file, get_config, load_config};
use pubtator_highlight::fasta::analyze_fasta;
use pubtator_highlight::models::{FastaAnalysis, HighlightedAbstract};
use pubtator_highlight::service::HighlightService;
use pubtator_highlight::sources::PubTatorClient;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// PubTator Highlight - search biomedical literature and render
/// entity-highlighted abstracts
#[derive(Parser, Debug)]
#[command(name = "pubtator-highlight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search PubTator3 and render entity-highlighted abstracts", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search PubTator3 by keywords and print highlighted abstracts
    Search {
        /// Free-text keywords
        keywords: String,

        /// Maximum number of documents to fetch
        #[arg(long, short = 'n')]
        max_results: Option<usize>,
    },

    /// Compute length, GC content, and codon usage for a FASTA file
    Fasta {
        /// Path to the FASTA file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("pubtator_highlight={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()
    };

    match cli.command {
        Commands::Search {
            keywords,
            max_results,
        } => {
            let client = PubTatorClient::new(&config.api)?;
            let service = HighlightService::new(Arc::new(client))
                .max_results(max_results.unwrap_or(config.search.max_results));

            let results = service.search_and_highlight(&keywords).await?;
            output_abstracts(&results, cli.output, cli.quiet);
        }
        Commands::Fasta { file } => {
            let input = std::fs::read_to_string(&file)?;
            let results = analyze_fasta(&input)?;
            output_fasta(&results, cli.output);
        }
    }

    Ok(())
}

fn resolve_format(format: OutputFormat) -> OutputFormat {
    if format == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        format
    }
}

fn output_abstracts(results: &[HighlightedAbstract], format: OutputFormat, quiet: bool) {
    match resolve_format(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results).unwrap());
        }
        OutputFormat::Plain => {
            for result in results {
                println!("PMID {} - {}", result.pmid, result.title);
                println!("{}", result.abstract_html);
                println!();
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["PMID", "Title", "Highlighted Abstract"]);

            for result in results {
                table.add_row(vec![
                    Cell::new(&result.pmid).add_attribute(Attribute::Bold),
                    Cell::new(truncate(&result.title, 40)),
                    Cell::new(truncate(&result.abstract_html, 80)),
                ]);
            }
            println!("{table}");

            if !quiet {
                println!("{} {} documents highlighted", "✓".green().bold(), results.len());
            }
        }
        OutputFormat::Auto => unreachable!(),
    }
}

fn output_fasta(results: &[FastaAnalysis], format: OutputFormat) {
    match resolve_format(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(results).unwrap());
        }
        OutputFormat::Plain => {
            for result in results {
                println!(
                    "{}: length={} gc={:.2}%",
                    result.id, result.length, result.gc_content
                );
            }
        }
        OutputFormat::Table => {
            use comfy_table::{Attribute, Cell, Table};
            let mut table = Table::new();
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.set_header(vec!["ID", "Length", "GC %", "Distinct Codons"]);

            for result in results {
                table.add_row(vec![
                    Cell::new(&result.id).add_attribute(Attribute::Bold),
                    Cell::new(result.length),
                    Cell::new(format!("{:.2}", result.gc_content)),
                    Cell::new(result.codon_usage.len()),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Auto => unreachable!(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
