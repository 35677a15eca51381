//! Project path resolution for Lathe.
//! Classifies the user-supplied path string and produces the single
//! absolute destination directory the generated tree is written under.

use crate::config::{Settings, WORKSPACE_ENV};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Resolves shorthand project paths against the current directory and the
/// configured workspace root.
///
/// Supported shapes, first match wins:
/// 1. empty input: the current working directory
/// 2. absolute input: returned as-is, lexically cleaned
/// 3. `account/project`: `<workspace>/<default domain>/account/project`
/// 4. `domain/account/project`: `<workspace>/domain/account/project`
/// 5. deeper relative paths: rejected as an unknown directory shape
/// 6. a bare word: a subfolder of the current working directory
#[derive(Debug)]
pub struct PathResolver {
    cwd: PathBuf,
    workspace_root: Option<PathBuf>,
    default_domain: String,
}

impl PathResolver {
    pub fn new(cwd: PathBuf, settings: &Settings) -> Self {
        Self {
            cwd,
            workspace_root: settings.workspace_root.clone(),
            default_domain: settings.default_domain.clone(),
        }
    }

    /// Maps the input string to an absolute destination directory.
    ///
    /// # Errors
    /// * `Error::UnsupportedPathShape` for relative inputs with more than
    ///   two separators
    /// * `Error::ConfigError` when a shorthand input needs the workspace
    ///   root and none is configured
    pub fn resolve(&self, input: &str) -> Result<PathBuf> {
        if input.is_empty() {
            return Ok(self.cwd.clone());
        }

        let path = Path::new(input);
        let separators = input.matches(MAIN_SEPARATOR).count();

        if separators > 0 {
            if path.is_absolute() || input.starts_with(MAIN_SEPARATOR) {
                let cleaned = clean_path(path);
                debug!("Resolved absolute input to {}", cleaned.display());
                return Ok(cleaned);
            }

            return match separators {
                // One level deep: assume the input is missing its hosting
                // domain prefix.
                1 => {
                    let root = self.require_workspace()?;
                    Ok(root.join(&self.default_domain).join(input))
                }
                2 => {
                    let root = self.require_workspace()?;
                    Ok(root.join(input))
                }
                _ => Err(Error::UnsupportedPathShape { input: input.to_string() }),
            };
        }

        // Just a word: a subfolder of the current directory.
        Ok(self.cwd.join(input))
    }

    fn require_workspace(&self) -> Result<&Path> {
        self.workspace_root.as_deref().ok_or_else(|| {
            Error::ConfigError(format!(
                "shorthand project paths need a workspace root; set {} or pass --workspace",
                WORKSPACE_ENV
            ))
        })
    }
}

/// Lexically cleans a path: collapses duplicate separators, removes `.`
/// components and resolves `..` against preceding components. No
/// filesystem access, mirroring `filepath.Clean` semantics.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }

    cleaned
}
