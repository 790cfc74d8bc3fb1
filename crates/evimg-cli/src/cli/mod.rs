//! CLI for the evimg event image ingestor.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use evimg_core::config::{self, IngestConfig};
use evimg_core::{CurlFetcher, FetchOptions, IssueContext};
use std::io;
use std::path::PathBuf;

use commands::{run_extract, run_ingest, run_next_index};

/// Top-level CLI for evimg.
#[derive(Debug, Parser)]
#[command(name = "evimg")]
#[command(about = "evimg: save images attached to an event issue under the site's asset directory", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/evimg/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Issue fields, normally provided by the workflow through the environment.
#[derive(Debug, Args)]
pub struct IssueArgs {
    /// Repository the issue belongs to (owner/name).
    #[arg(long, env = "REPO", default_value = "")]
    pub repo: String,

    /// Issue number.
    #[arg(long, env = "ISSUE_NUMBER", default_value = "")]
    pub issue_number: String,

    /// Full issue body text.
    #[arg(long, env = "ISSUE_BODY", default_value = "", hide_env_values = true)]
    pub body: String,

    /// Login of the issue author.
    #[arg(long, env = "ISSUE_AUTHOR", default_value = "")]
    pub author: String,

    /// Access token (downloads are currently unauthenticated).
    #[arg(long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true)]
    pub token: String,
}

impl From<IssueArgs> for IssueContext {
    fn from(args: IssueArgs) -> Self {
        IssueContext {
            repository: args.repo,
            issue_number: args.issue_number,
            body: args.body,
            author: args.author,
            token: args.token,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every attached image and print the saved paths.
    Ingest {
        #[command(flatten)]
        issue: IssueArgs,

        /// Directory to save images into (overrides config).
        #[arg(long, value_name = "DIR")]
        asset_dir: Option<PathBuf>,
    },

    /// Print the index the next ingest for an event would start at.
    NextIndex {
        /// Event identifier ([A-Za-z0-9_-]+).
        event_id: String,

        /// Directory to scan (overrides config).
        #[arg(long, value_name = "DIR")]
        asset_dir: Option<PathBuf>,
    },

    /// Print the event ID and image URLs found in an issue body, without downloading.
    Extract {
        /// Full issue body text.
        #[arg(long, env = "ISSUE_BODY", default_value = "", hide_env_values = true)]
        body: String,
    },
}

/// Explicit `--config` must load; the default location falls back to built-in values.
fn load_config(path: Option<&PathBuf>) -> Result<IngestConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => Ok(config::load_or_default().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            IngestConfig::default()
        })),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_ref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut out = io::stdout().lock();
        match cli.command {
            CliCommand::Ingest { issue, asset_dir } => {
                let asset_dir = asset_dir.unwrap_or_else(|| cfg.asset_dir.clone());
                let fetcher = CurlFetcher::new(FetchOptions::from(&cfg));
                let ctx: IssueContext = issue.into();
                run_ingest(&asset_dir, &ctx, &fetcher, &mut out)?;
            }
            CliCommand::NextIndex { event_id, asset_dir } => {
                let asset_dir = asset_dir.unwrap_or_else(|| cfg.asset_dir.clone());
                run_next_index(&asset_dir, &event_id, &mut out)?;
            }
            CliCommand::Extract { body } => run_extract(&body, &mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
