//! rag-shim - Precomputed context retrieval and injection
//!
//! # Usage
//!
//! ```bash
//! # Look up snippets for a query
//! rag-shim search "What drives the water cycle?"
//!
//! # Augment a conversation (JSON array of messages) from stdin
//! cat conversation.json | rag-shim inject
//!
//! # Check the verification document loads
//! rag-shim --data ./verification_data.json stats
//! ```
//!
//! # Environment Variables
//!
//! - `RAG_CONFIG`: Path to a TOML config file (default: ./rag_config.toml)
//! - `RAG_DATA_PATH`: Path to the verification document
//! - `RAG_TOP_K`: Snippets injected per query (default: 3)
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use rag_shim::{ChatMessage, ContextInjector, LoadState, RagConfig, VerificationStore};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "rag-shim")]
#[command(about = "Inject precomputed retrieval context into chat conversations")]
#[command(version)]
struct CliArgs {
    /// Path to the verification document (overrides config and RAG_DATA_PATH)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Number of snippets to retrieve (overrides config and RAG_TOP_K)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    top_k: Option<u64>,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Print the snippets matched for a query as JSON
    Search {
        /// Free-text query
        query: String,
    },

    /// Print the exact-match description for a query
    Describe {
        /// Free-text query
        query: String,
    },

    /// Augment a conversation read as a JSON array of messages
    Inject {
        /// Read the conversation from this file instead of stdin
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Load the verification document and report its state
    Stats,
}

// ============================================================================
// Commands
// ============================================================================

fn read_conversation(input: Option<&PathBuf>) -> Result<Vec<ChatMessage>> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read conversation from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read conversation from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Conversation is not a JSON array of messages")
}

fn run(args: CliArgs, config: &RagConfig) -> Result<()> {
    let store = Arc::new(VerificationStore::new(&config.data_path));

    match args.command {
        SubCommand::Search { query } => {
            let results = store.search(&query, config.top_k);
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        SubCommand::Describe { query } => {
            println!("{}", store.description(&query));
        }
        SubCommand::Inject { input } => {
            let messages = read_conversation(input.as_ref())?;
            let injector = ContextInjector::new(store).with_top_k(config.top_k);
            let augmented = injector.inject(&messages);
            println!("{}", serde_json::to_string_pretty(&*augmented)?);
        }
        SubCommand::Stats => {
            let state = store.load();
            println!("path:    {}", store.path().display());
            println!("state:   {state:?}");
            println!("entries: {}", store.entry_count());
            if state != LoadState::Loaded {
                anyhow::bail!("verification data unavailable at {}", store.path().display());
            }
        }
    }

    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    // Initialize logging (stderr keeps stdout machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = RagConfig::load();
    if let Some(path) = &args.data {
        config.data_path.clone_from(path);
    }
    if let Some(top_k) = args.top_k {
        config.top_k = usize::try_from(top_k).context("--top-k out of range")?;
    }
    info!(data = %config.data_path.display(), top_k = config.top_k, "RAG shim configured");

    run(args, &config)
}
