use lathe::error::Error;
use lathe::renderer::{MiniJinjaRenderer, TemplateRenderer};

fn context() -> serde_json::Value {
    serde_json::json!({
        "name": "user-search",
        "relative_name": "acme/user-search",
        "project_dir": "/workspace/github.com/acme/user-search",
        "rel_dir": "github.com/acme/user-search",
        "camel_case_name": "UserSearch",
        "snake_case_name": "user_search",
        "dns_name": "user-search",
    })
}

#[test]
fn test_renders_proto_template() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = renderer.render("proto.tmpl", &context()).unwrap();

    assert!(rendered.contains("package user_search;"));
    assert!(rendered.contains("service UserSearch {"));
}

#[test]
fn test_renders_server_template() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = renderer.render("server.tmpl", &context()).unwrap();

    assert!(rendered.contains("pub struct UserSearchService;"));
    assert!(rendered.contains("user_search_server::UserSearch"));
}

#[test]
fn test_renders_makefile_template() {
    let renderer = MiniJinjaRenderer::new();
    let rendered = renderer.render("Makefile.tmpl", &context()).unwrap();

    assert!(rendered.contains("NAME := user-search"));
    assert!(rendered.contains("user-search.proto"));
}

#[test]
fn test_unknown_template_id() {
    let renderer = MiniJinjaRenderer::new();

    match renderer.render("nonexistent.tmpl", &context()) {
        Err(Error::TemplateError(msg)) => assert!(msg.contains("nonexistent.tmpl")),
        _ => panic!("Expected TemplateError"),
    }
}
