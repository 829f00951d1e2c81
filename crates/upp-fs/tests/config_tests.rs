use serde::Deserialize;
use std::fs;
use tempfile::TempDir;
use upp_fs::{ConfigStore, Error, NormalizedPath};

#[derive(Debug, Deserialize, PartialEq)]
struct TestOptions {
    dir: String,
    lang: Option<String>,
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upp.toml");
    fs::write(&file_path, "dir = \"config\"\nlang = \"yaml\"\n").unwrap();

    let options: TestOptions = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(options.dir, "config");
    assert_eq!(options.lang.as_deref(), Some("yaml"));
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upp.json");
    fs::write(&file_path, r#"{"dir": "src"}"#).unwrap();

    let options: TestOptions = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(options.dir, "src");
    assert!(options.lang.is_none());
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upp.yml");
    fs::write(&file_path, "dir: app\nlang: json5\n").unwrap();

    let options: TestOptions = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(options.dir, "app");
    assert_eq!(options.lang.as_deref(), Some("json5"));
}

#[test]
fn test_load_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upp.ini");
    fs::write(&file_path, "dir=src").unwrap();

    let result: upp_fs::Result<TestOptions> =
        ConfigStore::new().load(&NormalizedPath::new(&file_path));

    assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
}

#[test]
fn test_load_malformed_reports_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("upp.toml");
    fs::write(&file_path, "dir = ").unwrap();

    let err = ConfigStore::new()
        .load::<TestOptions>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    assert!(err.to_string().contains("TOML"), "got: {err}");
}
