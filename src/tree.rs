//! In-memory model of the generated directory tree.
//! The tree is built once per run, never mutated afterwards, and walked
//! exactly once by the writer.

use std::path::{Path, PathBuf};

/// One file to generate: its name within the owning folder and the id of
/// the built-in template that produces its contents.
#[derive(Debug)]
pub struct FileSpec {
    pub relative_name: String,
    pub template: &'static str,
}

/// One directory of the generated tree, owning its children outright.
#[derive(Debug)]
pub struct Folder {
    pub name: String,
    pub abs_path: PathBuf,
    pub folders: Vec<Folder>,
    pub files: Vec<FileSpec>,
}

impl Folder {
    pub fn new(name: impl Into<String>, abs_path: PathBuf) -> Self {
        Self { name: name.into(), abs_path, folders: Vec::new(), files: Vec::new() }
    }

    /// Creates a subfolder whose absolute path hangs off this folder.
    /// The child is attached separately once populated.
    pub fn child(&self, name: &str) -> Folder {
        Folder::new(name, self.abs_path.join(name))
    }

    pub fn attach(&mut self, folder: Folder) {
        self.folders.push(folder);
    }

    pub fn add_file(&mut self, relative_name: &str, template: &'static str) {
        self.files.push(FileSpec { relative_name: relative_name.to_string(), template });
    }
}

/// Builds the fixed tree shape of a generated service.
///
/// The shape is identical for every invocation; only the project name
/// (used both as the root folder's identity and as a nested subfolder)
/// and the destination path vary. Children keep insertion order so
/// directory listings come out deterministic.
pub fn build(name: &str, dest: &Path) -> Folder {
    let mut root = Folder::new(name, dest.to_path_buf());

    let mut server = root.child("server");
    server.add_file("server.rs", "server.tmpl");
    server.add_file("server_test.rs", "server_test.tmpl");
    root.attach(server);

    let mut subscribers = root.child("subscribers");
    subscribers.add_file("subscribers.rs", "subscribers.tmpl");
    root.attach(subscribers);

    let mut binary = root.child(name);
    binary.add_file("main.rs", "main.tmpl");

    let mut cmd = binary.child("cmd");
    cmd.add_file("root.rs", "root.tmpl");
    cmd.add_file("up.rs", "up.tmpl");
    binary.attach(cmd);
    root.attach(binary);

    root.add_file(&format!("{}.proto", name), "proto.tmpl");
    root.add_file("client.rs", "client.tmpl");
    root.add_file("Makefile", "Makefile.tmpl");
    root.add_file("Dockerfile", "Dockerfile.tmpl");
    root.add_file(".gitignore", "gitignore.tmpl");

    root
}
