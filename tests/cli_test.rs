use clap::Parser;
use lathe::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("lathe")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["acme/orders"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.path.as_deref(), Some("acme/orders"));
    assert!(parsed.workspace.is_none());
    assert!(parsed.domain.is_none());
    assert!(!parsed.verbose);
}

#[test]
fn test_path_is_optional() {
    let args = make_args(&[]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.path.is_none());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--workspace",
        "/workspace",
        "--domain",
        "example.com",
        "--verbose",
        "orders",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.workspace, Some(PathBuf::from("/workspace")));
    assert_eq!(parsed.domain.as_deref(), Some("example.com"));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-w", "/workspace", "-d", "example.com", "-v", "orders"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.workspace, Some(PathBuf::from("/workspace")));
    assert_eq!(parsed.domain.as_deref(), Some("example.com"));
    assert!(parsed.verbose);
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["acme/orders", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
