//! Name derivation for generated projects.
//! Pure string transforms from the raw project name to the casing
//! variants consumed by templates.

use crate::error::{Error, Result};
use std::path::MAIN_SEPARATOR;

/// Returns the UpperCamelCase form of the service name,
/// e.g. `user-search` becomes `UserSearch`.
pub fn camel_case(name: &str) -> String {
    cruet::to_pascal_case(name)
}

/// Returns the snake_case form of the service name with hyphens
/// normalized to underscores, suitable as a code identifier.
pub fn snake_case(name: &str) -> String {
    cruet::to_snake_case(name).replace('-', "_")
}

/// Returns the hyphenated form of the service name with underscores
/// normalized to hyphens, safe for DNS labels and package names.
pub fn dns_case(name: &str) -> String {
    cruet::to_snake_case(name).replace('_', "-")
}

/// Rejects names that would produce degenerate paths or identifiers.
///
/// # Errors
/// * `Error::ValidationError` if the name is empty or consists solely of
///   path separator characters
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name.chars().all(|c| c == '/' || c == MAIN_SEPARATOR) {
        return Err(Error::ValidationError(
            "project name must contain at least one non-separator character".to_string(),
        ));
    }
    Ok(())
}
