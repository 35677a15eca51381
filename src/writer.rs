//! Project writer.
//! Walks the in-memory tree, creates directories and renders each bound
//! template into its target file.

use crate::error::Result;
use crate::project::Project;
use crate::renderer::TemplateRenderer;
use crate::tree::Folder;
use log::debug;
use std::fs;

/// Materializes the tree under its root's absolute path.
///
/// Directory creation is idempotent and existing files are overwritten
/// silently. The first rendering or I/O failure aborts the walk; files
/// written before the failure are left in place.
pub fn write(root: &Folder, project: &Project, renderer: &dyn TemplateRenderer) -> Result<()> {
    let context = project.context();
    write_folder(root, &context, renderer)
}

fn write_folder(
    folder: &Folder,
    context: &serde_json::Value,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    debug!("Creating directory {}", folder.abs_path.display());
    fs::create_dir_all(&folder.abs_path)?;

    for file in &folder.files {
        let content = renderer.render(file.template, context)?;
        let target = folder.abs_path.join(&file.relative_name);
        debug!("Writing file {}", target.display());
        fs::write(&target, content)?;
    }

    for child in &folder.folders {
        write_folder(child, context, renderer)?;
    }

    Ok(())
}
