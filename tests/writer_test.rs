use lathe::project::Project;
use lathe::renderer::MiniJinjaRenderer;
use lathe::{tree, writer};
use std::fs;
use tempfile::TempDir;
use walkdir::WalkDir;

fn generate(dest: &std::path::Path) -> Project {
    let project = Project::new(dest.to_path_buf(), "orders", None).unwrap();
    let root = tree::build(&project.name, &project.project_dir);
    let renderer = MiniJinjaRenderer::new();

    writer::write(&root, &project, &renderer).unwrap();
    project
}

#[test]
fn test_writes_full_tree() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("orders");

    generate(&dest);

    for relative in [
        "server/server.rs",
        "server/server_test.rs",
        "subscribers/subscribers.rs",
        "orders/main.rs",
        "orders/cmd/root.rs",
        "orders/cmd/up.rs",
        "orders.proto",
        "client.rs",
        "Makefile",
        "Dockerfile",
        ".gitignore",
    ] {
        assert!(dest.join(relative).is_file(), "missing file: {}", relative);
    }

    let written = WalkDir::new(&dest)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count();
    assert_eq!(written, 11);
}

#[test]
fn test_rendered_contents_use_project_name() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("orders");

    generate(&dest);

    let proto = fs::read_to_string(dest.join("orders.proto")).unwrap();
    assert!(proto.contains("package orders;"));
    assert!(proto.contains("service Orders {"));

    let server = fs::read_to_string(dest.join("server/server.rs")).unwrap();
    assert!(server.contains("pub struct OrdersService;"));
}

#[test]
fn test_write_is_repeatable() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("orders");

    generate(&dest);
    fs::write(dest.join("Makefile"), "stale contents").unwrap();

    // Second run overwrites silently, no error and no stale leftovers.
    generate(&dest);
    let makefile = fs::read_to_string(dest.join("Makefile")).unwrap();
    assert!(makefile.contains("NAME := orders"));
}

#[test]
fn test_existing_destination_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("orders");
    fs::create_dir_all(&dest).unwrap();

    generate(&dest);
    assert!(dest.join("client.rs").is_file());
}
