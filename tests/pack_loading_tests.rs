//! Tests for style pack loading and resolution
use std::io::Write;

use style_linter::config::Config;
use style_linter::pack::{load_style_pack, resolve_style_pack};

#[test]
fn test_load_pack_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(
        file,
        r#"{{
            "brand_voice": "Friendly",
            "reading_level": "Grade 6-8",
            "must_use": ["safety"],
            "must_avoid": ["hype"]
        }}"#
    )
    .expect("write pack");

    let pack = load_style_pack(file.path()).expect("load pack");
    assert_eq!(pack.brand_voice.as_deref(), Some("Friendly"));
    assert_eq!(pack.reading_level, "Grade 6-8");
    assert_eq!(pack.must_use, vec!["safety"]);
    assert_eq!(pack.must_avoid, vec!["hype"]);
}

#[test]
fn test_load_pack_applies_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, r#"{{"must_avoid": ["spam"]}}"#).expect("write pack");

    let pack = load_style_pack(file.path()).expect("load pack");
    assert_eq!(pack.reading_level, "Grade 8-10");
    assert!(pack.must_use.is_empty());
    assert!(pack.brand_voice.is_none());
}

#[test]
fn test_malformed_pack_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "not json at all").expect("write garbage");

    let err = load_style_pack(file.path()).expect_err("should fail");
    assert!(err.to_string().contains("invalid style pack JSON"));
}

#[test]
fn test_missing_pack_error_names_path() {
    let err = load_style_pack(std::path::Path::new("/no/such/stylepack.json"))
        .expect_err("should fail");
    assert!(err.to_string().contains("/no/such/stylepack.json"));
}

#[test]
fn test_resolve_explicit_path_wins() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, r#"{{"must_avoid": ["explicit"]}}"#).expect("write pack");

    let config = Config::new(Some(file.path().to_path_buf()), "info").expect("config");
    let pack = resolve_style_pack(&config).expect("resolve");
    assert_eq!(pack.must_avoid, vec!["explicit"]);
}

#[test]
fn test_resolve_falls_back_to_embedded_default() {
    // search dirs that cannot contain a pack
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Config {
        pack_path: None,
        pack_dirs: vec![dir.path().join("empty")],
        log_level: "info".to_string(),
    };

    let pack = resolve_style_pack(&config).expect("resolve");
    assert_eq!(pack.reading_level, "Grade 8-10");
    assert!(!pack.must_avoid.is_empty());
}

#[test]
fn test_resolve_finds_pack_in_search_dir() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(
        dir.path().join("stylepack.json"),
        r#"{"must_avoid": ["found"]}"#,
    )
    .expect("write pack");

    let config = Config {
        pack_path: None,
        pack_dirs: vec![dir.path().to_path_buf()],
        log_level: "info".to_string(),
    };

    let pack = resolve_style_pack(&config).expect("resolve");
    assert_eq!(pack.must_avoid, vec!["found"]);
}
