// src/config.rs
use crate::constants::{ACCESS_TOKEN_ENV, API_ENDPOINT_ENV};
use crate::error::AppError;
use crate::types::PreviewRef;
use clap::{Parser, Subcommand};
use url::Url;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Command,

    /// Content store API endpoint (falls back to WAYPOST_API_ENDPOINT)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Preview snapshot ref; all queries resolve against it when set
    #[arg(long)]
    pub preview_ref: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List posts, following pagination to the requested depth
    List {
        /// Number of extra pages to load after the first
        #[arg(long, default_value_t = 0)]
        more: u32,
    },
    /// Show one post with reading time and chronological neighbors
    Show {
        /// The post's uid (routing slug)
        uid: String,
    },
}

/// Resolved configuration — validated and ready to drive a request.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: Url,
    pub access_token: Option<String>,
    pub preview_ref: Option<PreviewRef>,
    pub verbose: bool,
}

impl ResolvedConfig {
    /// Resolves configuration from CLI input and environment.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let endpoint = cli
            .endpoint
            .clone()
            .or_else(|| std::env::var(API_ENDPOINT_ENV).ok())
            .ok_or_else(|| {
                AppError::MissingConfiguration(format!(
                    "no --endpoint given and {} not set",
                    API_ENDPOINT_ENV
                ))
            })?;
        let endpoint = Url::parse(&endpoint)?;

        let access_token = std::env::var(ACCESS_TOKEN_ENV).ok();

        let preview_ref = cli
            .preview_ref
            .as_deref()
            .map(PreviewRef::new)
            .transpose()?;

        Ok(Self {
            endpoint,
            access_token,
            preview_ref,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_endpoint_wins_over_environment() {
        let cli = CommandLineInput {
            command: Command::List { more: 0 },
            endpoint: Some("https://blog.example/api/v2/".to_string()),
            preview_ref: None,
            verbose: false,
        };
        let config = ResolvedConfig::resolve(&cli).unwrap();
        assert_eq!(config.endpoint.host_str(), Some("blog.example"));
        assert!(config.preview_ref.is_none());
    }

    #[test]
    fn empty_preview_ref_is_rejected() {
        let cli = CommandLineInput {
            command: Command::List { more: 0 },
            endpoint: Some("https://blog.example/api/v2/".to_string()),
            preview_ref: Some("   ".to_string()),
            verbose: false,
        };
        assert!(matches!(
            ResolvedConfig::resolve(&cli),
            Err(AppError::Validation(_))
        ));
    }
}
