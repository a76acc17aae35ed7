//! App Review Responder
//!
//! Drafts customer-service replies to app store reviews.
//!
//! # Usage
//!
//! ```bash
//! review-responder respond --text "The app keeps crashing" [--author NAME] [--rating N]
//! review-responder batch [--input reviews.json] [--json]
//! review-responder classify "Could you add dark mode?"
//! review-responder faq search "refund" [--category complaint]
//! review-responder status
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (<config dir>/review-responder/config.toml)
//! 3. `--config` file
//! 4. Environment variables (REVIEW_*, plus OPENAI_API_KEY and HONEYHIVE_API_KEY)
//! 5. CLI flags

use anyhow::Result;
use clap::Parser;

use review_cli::{
    handle_batch, handle_classify, handle_faq_list, handle_faq_search, handle_respond,
    init_logging, load_settings, show_status, Cli, Commands, FaqCommands,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(
        cli.config.as_deref(),
        cli.log_level.as_deref(),
        cli.faq.as_deref(),
        cli.keyword_only,
    )?;
    init_logging(&settings)?;

    match cli.command {
        Commands::Respond {
            text,
            author,
            rating,
            no_eval,
            json,
        } => {
            handle_respond(&settings, &text, author.as_deref(), rating, no_eval, json)?;
        }
        Commands::Batch {
            input,
            limit,
            no_eval,
            json,
        } => {
            handle_batch(&settings, input.as_deref(), limit, no_eval, json)?;
        }
        Commands::Classify { text } => {
            handle_classify(&text)?;
        }
        Commands::Faq { command } => match command {
            FaqCommands::List => handle_faq_list(&settings)?,
            FaqCommands::Search { query, category } => {
                handle_faq_search(&settings, &query, category.as_deref())?;
            }
        },
        Commands::Status => {
            show_status(&settings)?;
        }
    }

    Ok(())
}
