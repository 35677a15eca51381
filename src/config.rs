//! Process-wide configuration for Lathe.
//! The workspace root and default hosting domain are read once at startup
//! and threaded into the path resolver as an explicit value.

use crate::cli::Args;
use std::env;
use std::path::PathBuf;

/// Environment variable naming the workspace root directory
pub const WORKSPACE_ENV: &str = "LATHE_WORKSPACE";

/// Environment variable overriding the default hosting domain
pub const DOMAIN_ENV: &str = "LATHE_DOMAIN";

/// Hosting domain assumed for two-segment "account/project" shorthand
pub const DEFAULT_DOMAIN: &str = "github.com";

/// Resolved process-wide settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base directory for shorthand relative project paths, if configured
    pub workspace_root: Option<PathBuf>,
    /// Hosting domain inserted in front of "account/project" inputs
    pub default_domain: String,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// An unset workspace variable leaves `workspace_root` empty; the
    /// resolver reports a configuration error only if a shorthand input
    /// actually needs it.
    pub fn from_env() -> Self {
        let workspace_root = env::var_os(WORKSPACE_ENV).map(PathBuf::from);
        let default_domain =
            env::var(DOMAIN_ENV).unwrap_or_else(|_| DEFAULT_DOMAIN.to_string());

        Self { workspace_root, default_domain }
    }

    /// Applies command-line overrides on top of environment settings.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(workspace) = &args.workspace {
            self.workspace_root = Some(workspace.clone());
        }
        if let Some(domain) = &args.domain {
            self.default_domain = domain.clone();
        }
        self
    }
}
