use assert_cmd::Command;
use serde_json::json;
use tempfile::TempDir;

fn valid_entry() -> serde_json::Value {
    json!({
        "addonId": "Clock", "channel": "stable", "displayName": "Clock",
        "description": "d", "publisher": "p", "addonVersionName": "1.0",
        "addonVersionNumber": {"major": 1, "minor": 0, "patch": 0},
        "license": "GPL", "sourceURL": "http://x", "URL": "http://y", "sha256": "ab12",
        "minNVDAVersion": {"major": 2019, "minor": 3, "patch": 0},
        "lastTestedVersion": {"major": 2023, "minor": 1, "patch": 0}
    })
}

fn addonstore(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("addonstore").unwrap();
    cmd.current_dir(dir.path()).env_remove("ADDONSTORE_CATALOG_PATH").env_remove("ADDONSTORE_INSTALLED_PATH")
        .env_remove("ADDONSTORE_API_VERSION");
    cmd
}

#[test]
fn list_succeeds_on_valid_catalog() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.json"), json!([valid_entry()]).to_string()).unwrap();

    addonstore(&dir).args(["--catalog", "catalog.json", "list"]).assert().success();
}

#[test]
fn malformed_catalog_exits_with_parse_code() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.json"), r#"[{"addonId":"x"}]"#).unwrap();

    addonstore(&dir).args(["--catalog", "bad.json", "list"]).assert().code(4);
}

#[test]
fn malformed_installed_file_exits_with_parse_code() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.json"), json!([valid_entry()]).to_string()).unwrap();
    std::fs::write(dir.path().join("installed.json"), r#"{"not": "a list"}"#).unwrap();

    addonstore(&dir)
        .args(["--catalog", "catalog.json", "--installed", "installed.json", "show", "clock"])
        .assert()
        .code(4);
}

#[test]
fn unknown_addon_exits_with_not_found_code() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.json"), json!([valid_entry()]).to_string()).unwrap();

    addonstore(&dir).args(["--catalog", "catalog.json", "show", "missing"]).assert().code(2);
}

#[test]
fn checksum_mismatch_exits_with_verify_code() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("catalog.json"), json!([valid_entry()]).to_string()).unwrap();
    std::fs::write(dir.path().join("clock.nvda-addon"), b"tampered").unwrap();

    addonstore(&dir)
        .args(["--catalog", "catalog.json", "verify", "clock", "clock.nvda-addon"])
        .assert()
        .code(3);
}
