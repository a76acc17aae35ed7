//! Review responder CLI library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `commands`: Command implementations (respond, batch, classify, faq, status)

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, FaqCommands};
pub use commands::{
    handle_batch, handle_classify, handle_faq_list, handle_faq_search, handle_respond,
    init_logging, load_settings, show_status, cli_review, BatchReport,
};
