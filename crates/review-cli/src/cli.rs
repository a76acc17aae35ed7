//! CLI argument parsing for the review responder.
//!
//! CLI flags override every other config source.

use clap::{Parser, Subcommand};

/// App Review Responder
///
/// Classifies app store reviews, matches them to an FAQ answer, drafts a
/// reply, and scores the reply.
#[derive(Parser, Debug)]
#[command(name = "review-responder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default <config dir>/review-responder/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Override the FAQ collection file (JSON array of {category, title, body})
    #[arg(long, global = true)]
    pub faq: Option<String>,

    /// Disable semantic FAQ lookup; use keyword scoring only
    #[arg(long, global = true)]
    pub keyword_only: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Draft a reply to a single review
    Respond {
        /// Review text
        #[arg(short, long)]
        text: String,

        /// Review author
        #[arg(short, long)]
        author: Option<String>,

        /// Star rating (1-5)
        #[arg(short, long)]
        rating: Option<u8>,

        /// Skip quality scoring
        #[arg(long)]
        no_eval: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draft replies for a list of reviews
    Batch {
        /// JSON file with an array of reviews (built-in demo reviews when omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Process at most this many reviews
        #[arg(long)]
        limit: Option<usize>,

        /// Skip quality scoring
        #[arg(long)]
        no_eval: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the category a text would be classified as
    Classify {
        /// Review text
        text: String,
    },

    /// Inspect the FAQ collection
    Faq {
        #[command(subcommand)]
        command: FaqCommands,
    },

    /// Show retrieval strategy and evaluation mode
    Status,
}

/// FAQ subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum FaqCommands {
    /// List every FAQ entry
    List,

    /// Show which entry the retriever picks for a query
    Search {
        /// Query text
        query: String,

        /// Category to favour (bug, feature request, praise, complaint)
        #[arg(long)]
        category: Option<String>,
    },
}
