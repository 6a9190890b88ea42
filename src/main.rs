// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docs_index::utils::logging::{format_error, format_info, format_success, format_warning};
use docs_index::{
    Config, HeadingExtractor, IndexBuilder, IndexLocation, MarkdownNormalizer, SearchOutcome,
    SearchRuntime,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "docs_index")]
#[command(version = "0.1.0")]
#[command(about = "Static documentation index builder and search runtime", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = docs_index::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the search index artifact from the content tree (default)
    Build {
        #[arg(short, long)]
        pretty: bool,

        #[arg(long)]
        no_manifest: bool,

        /// Override the configured content root
        #[arg(long, value_name = "DIR")]
        root: Option<PathBuf>,

        /// Override the configured artifact path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Query a built index
    Search {
        query: String,

        /// File path or http(s) URL of the index; defaults to the configured location
        #[arg(short, long)]
        index: Option<String>,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the table of contents of a Markdown file
    Toc { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docs_index::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command.unwrap_or(Commands::Build {
        pretty: false,
        no_manifest: false,
        root: None,
        output: None,
    }) {
        Commands::Build {
            pretty,
            no_manifest,
            root,
            output,
        } => cmd_build(config, pretty, no_manifest, root, output)?,
        Commands::Search {
            query,
            index,
            limit,
        } => cmd_search(&config, &query, index, limit).await?,
        Commands::Toc { file } => cmd_toc(&file)?,
    }

    Ok(())
}

fn cmd_build(
    mut config: Config,
    pretty: bool,
    no_manifest: bool,
    root: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Some(root) = root {
        config.content.root = root;
    }
    if let Some(output) = output {
        config.index.output_path = output;
    }
    config.index.pretty |= pretty;
    config.index.write_manifest &= !no_manifest;

    info!("Building search index from {}", config.content.root.display());
    let start_time = Instant::now();

    let report = IndexBuilder::new(config)
        .with_progress(true)
        .run()
        .context("Index build failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Wrote {} documents to {} in {:.2}s",
            report.manifest.total_documents,
            report.output_path.display(),
            start_time.elapsed().as_secs_f64()
        ))
    );

    if report.stats.documents_truncated > 0 {
        println!(
            "{}",
            format_info(&format!(
                "{} documents truncated to the content limit",
                report.stats.documents_truncated
            ))
        );
    }
    if report.stats.untitled_documents > 0 {
        println!(
            "{}",
            format_warning(&format!(
                "{} documents have no top-level heading",
                report.stats.untitled_documents
            ))
        );
    }

    Ok(())
}

async fn cmd_search(
    config: &Config,
    query: &str,
    index: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let location = index.unwrap_or_else(|| config.search.index_location.clone());
    let source = IndexLocation::parse(&location);

    let mut runtime = SearchRuntime::new(&config.search);
    runtime.load(&source).await;

    let outcome = runtime.query_limited(query, limit);
    match &outcome {
        SearchOutcome::Matches(group) => {
            println!("\n{} results for \"{}\"\n", group.label, query);
            println!("{}", "=".repeat(80));
            for (idx, found) in group.matches.iter().enumerate() {
                print!("\n{}. {}", idx + 1, found.format_summary(config.search.match_prefix_chars));
            }
            println!("\n{}", "=".repeat(80));
        }
        SearchOutcome::Failed(_) => {
            eprintln!("{}", format_error(&outcome.to_string()));
            anyhow::bail!("Search index unavailable at {}", location);
        }
        other => println!("{}", format_warning(&other.to_string())),
    }

    Ok(())
}

fn cmd_toc(file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let title = MarkdownNormalizer::new().extract_title(&content);
    let anchors = HeadingExtractor::new().extract(&content);

    println!("{}", title);
    if anchors.is_empty() {
        println!("{}", format_info("No section headings"));
        return Ok(());
    }

    for anchor in &anchors {
        println!("{}- {} ({})", "  ".repeat(anchor.depth()), anchor.title, anchor.fragment());
    }

    Ok(())
}
