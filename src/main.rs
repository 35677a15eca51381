//! Lathe's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates the
//! resolve, build and write phases of project generation.

use lathe::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, Result},
    logger::init_logger,
    project::Project,
    renderer::MiniJinjaRenderer,
    resolver::PathResolver,
    tree, writer,
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Reads process-wide settings and applies CLI overrides
/// 2. Resolves the input path to an absolute destination directory
/// 3. Derives project data (name, casings, display path)
/// 4. Builds the fixed folder/file tree
/// 5. Renders every bound template and writes the tree to disk
fn run(args: Args) -> Result<()> {
    let settings = Settings::from_env().with_overrides(&args);
    let cwd = std::env::current_dir()?;

    let input = args.path.as_deref().unwrap_or("");
    let resolver = PathResolver::new(cwd, &settings);
    let project_dir = resolver.resolve(input)?;

    let project = Project::new(project_dir, input, settings.workspace_root.as_deref())?;
    let tree = tree::build(&project.name, &project.project_dir);

    let renderer = MiniJinjaRenderer::new();
    writer::write(&tree, &project, &renderer)?;

    println!("Created project '{}' in {}.", project.name, project.rel_dir);
    Ok(())
}
