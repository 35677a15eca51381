//! The built-in template registry.
//! Template sources live under `templates/` and are embedded at compile
//! time; the tree builder refers to them by id.

/// Every template shipped with the tool, in tree order.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("server.tmpl", include_str!("../templates/server.tmpl")),
    ("server_test.tmpl", include_str!("../templates/server_test.tmpl")),
    ("subscribers.tmpl", include_str!("../templates/subscribers.tmpl")),
    ("main.tmpl", include_str!("../templates/main.tmpl")),
    ("root.tmpl", include_str!("../templates/root.tmpl")),
    ("up.tmpl", include_str!("../templates/up.tmpl")),
    ("proto.tmpl", include_str!("../templates/proto.tmpl")),
    ("client.tmpl", include_str!("../templates/client.tmpl")),
    ("Makefile.tmpl", include_str!("../templates/Makefile.tmpl")),
    ("Dockerfile.tmpl", include_str!("../templates/Dockerfile.tmpl")),
    ("gitignore.tmpl", include_str!("../templates/gitignore.tmpl")),
];

/// Looks up a template source by id.
pub fn get(id: &str) -> Option<&'static str> {
    TEMPLATES.iter().find(|(name, _)| *name == id).map(|(_, source)| *source)
}
