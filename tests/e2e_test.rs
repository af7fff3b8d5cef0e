/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/orders.json";

mod exit_code_tests {
    use super::*;

    /// Exit code 0: listing the fixture file
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("order-lister")
            .args(["-s", FIXTURE])
            .assert()
            .code(0);
    }

    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("order-lister").arg("--help").assert().code(0);
    }

    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("order-lister")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: unknown flag
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("order-lister")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: unknown format
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("order-lister")
            .args(["-f", "csv", "-s", FIXTURE])
            .assert()
            .code(2);
    }

    /// Exit code 2: --source and --url together
    #[test]
    fn test_exit_code_conflicting_sources() {
        cargo_bin_cmd!("order-lister")
            .args(["-s", FIXTURE, "-u", "http://localhost:8000"])
            .assert()
            .code(2);
    }

    /// Exit code 3: repository failure
    #[test]
    fn test_exit_code_missing_orders_file() {
        cargo_bin_cmd!("order-lister")
            .args(["-s", "/nonexistent/orders.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Orders file not found"));
    }

    /// Exit code 3: unsupported URL scheme
    #[test]
    fn test_exit_code_bad_url() {
        cargo_bin_cmd!("order-lister")
            .args(["-u", "ftp://localhost/orders"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid order source"));
    }
}

#[test]
fn test_e2e_json_output_to_stdout() {
    let output = cargo_bin_cmd!("order-lister")
        .args(["-s", FIXTURE, "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = json["orders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(json["summary"]["orderCount"], 3);
    assert_eq!(json["metadata"]["tool"]["name"], "order-lister");
}

#[test]
fn test_e2e_markdown_output() {
    cargo_bin_cmd!("order-lister")
        .args(["-s", FIXTURE, "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Orders"))
        .stdout(predicate::str::contains("| 2 | 250.50 | 25.05 | 275.55 |"))
        .stderr(predicate::str::contains("Found 3 order(s)"));
}

#[test]
fn test_e2e_empty_orders_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");
    fs::write(&path, "[]").unwrap();

    cargo_bin_cmd!("order-lister")
        .args(["-f", "md", "-s"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("*No orders found.*"));
}

#[test]
fn test_e2e_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("orders.md");

    cargo_bin_cmd!("order-lister")
        .args(["-s", FIXTURE, "-f", "markdown", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output complete"));

    let written = fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("- Orders: 3"));
}

#[test]
fn test_e2e_default_source_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("orders.json"), r#"[{"id":"only"}]"#).unwrap();

    cargo_bin_cmd!("order-lister")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"only\""));
}

#[test]
fn test_e2e_malformed_orders_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("orders.json");
    fs::write(&path, "not json").unwrap();

    cargo_bin_cmd!("order-lister")
        .arg("-s")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse orders file"));
}
