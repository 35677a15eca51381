//! Lathe generates the boilerplate source tree for a new network service
//! from a fixed set of built-in templates. A single project path drives
//! destination resolution, the project's name and the identifier casings
//! used inside rendered files.

/// Command-line interface module for the Lathe application
pub mod cli;

/// Process-wide configuration (workspace root, default hosting domain)
/// read once at startup from the environment
pub mod config;

/// Error types and handling for the Lathe application
pub mod error;

/// Logger initialization
pub mod logger;

/// Pure casing transforms over the raw project name
pub mod naming;

/// Derived project data handed to templates during rendering
pub mod project;

/// Template rendering engine behind the TemplateRenderer trait
pub mod renderer;

/// Project path resolution
/// Maps shorthand path inputs to one absolute destination directory
pub mod resolver;

/// The built-in template registry, embedded at compile time
pub mod templates;

/// In-memory folder/file model of the generated tree
pub mod tree;

/// Walks the tree and writes rendered files to disk
pub mod writer;
