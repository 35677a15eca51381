//! Derived project data.
//! Everything templates know about the project is computed here from the
//! resolved destination and the user's original input; nothing persists
//! beyond a single run.

use crate::error::{Error, Result};
use crate::naming;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Data describing the project being generated.
#[derive(Debug, Serialize)]
pub struct Project {
    /// Final path segment of the resolved destination; never contains a
    /// separator
    pub name: String,
    /// The path string exactly as the user typed it
    pub relative_name: String,
    /// Absolute destination directory
    pub project_dir: PathBuf,
    /// Destination relative to the workspace root, for display
    pub rel_dir: String,
}

impl Project {
    /// Derives project data from the resolved destination directory.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the destination has no usable final
    ///   segment to serve as the project name
    pub fn new(
        project_dir: PathBuf,
        relative_name: &str,
        workspace_root: Option<&Path>,
    ) -> Result<Self> {
        let name = project_dir
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                Error::ValidationError(format!(
                    "cannot derive a project name from '{}'",
                    project_dir.display()
                ))
            })?;
        naming::validate_name(&name)?;

        let rel_dir = rel_display(&project_dir, workspace_root);

        Ok(Self { name, relative_name: relative_name.to_string(), project_dir, rel_dir })
    }

    /// UpperCamelCase name of the service, e.g. for type identifiers.
    pub fn camel_case_name(&self) -> String {
        naming::camel_case(&self.name)
    }

    /// snake_case name of the service, e.g. for module identifiers.
    pub fn snake_case_name(&self) -> String {
        naming::snake_case(&self.name)
    }

    /// Hyphenated name of the service, usable as a URL or package name.
    pub fn dns_name(&self) -> String {
        naming::dns_case(&self.name)
    }

    /// Builds the render context handed to every template.
    pub fn context(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "relative_name": self.relative_name,
            "project_dir": self.project_dir.display().to_string(),
            "rel_dir": self.rel_dir,
            "camel_case_name": self.camel_case_name(),
            "snake_case_name": self.snake_case_name(),
            "dns_name": self.dns_name(),
        })
    }
}

/// Display form of the destination: relative to the workspace root when
/// the destination lives under it, absolute otherwise.
fn rel_display(project_dir: &Path, workspace_root: Option<&Path>) -> String {
    match workspace_root.and_then(|root| project_dir.strip_prefix(root).ok()) {
        Some(rel) => rel.display().to_string(),
        None => project_dir.display().to_string(),
    }
}
