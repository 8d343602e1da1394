//! Command-line and environment configuration.

use clap::Parser;
use leetcode_provider::{Credential, ParseSiteVariantError, SiteVariant};

/// Configuration errors surfaced before the server starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidSite(#[from] ParseSiteVariantError),
}

/// LeetCode MCP Server
#[derive(Debug, Parser)]
#[command(name = "leetcode-mcp", version, about)]
pub struct Cli {
    /// LeetCode site to connect to (global or cn)
    #[arg(long, env = "LEETCODE_SITE", default_value = "global")]
    pub site: String,

    /// LEETCODE_SESSION cookie value
    #[arg(long, env = "LEETCODE_SESSION", hide_env_values = true)]
    pub session: Option<String>,

    /// csrftoken cookie value
    #[arg(long = "csrf", env = "LEETCODE_CSRF_TOKEN", hide_env_values = true)]
    pub csrf_token: Option<String>,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub variant: SiteVariant,
    pub credential: Credential,
}

impl Config {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_complete()
    }
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let variant = cli.site.parse::<SiteVariant>()?;
        // Credential drops blank values, so `--session ""` counts as absent.
        let credential = Credential::new(cli.session, cli.csrf_token);
        Ok(Self {
            variant,
            credential,
        })
    }
}
