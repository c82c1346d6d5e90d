/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;

const RECORDS: &str = "tests/fixtures/scan_records.json";

fn run_json(args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("scan-grid")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

fn paths(response: &Value) -> Vec<String> {
    response["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap().to_string())
        .collect()
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("scan-grid")
            .args(["query", "--records", RECORDS])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("scan-grid").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("scan-grid").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("scan-grid")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid render mode
    #[test]
    fn test_exit_code_invalid_render() {
        cargo_bin_cmd!("scan-grid")
            .args(["query", "--records", RECORDS, "--render", "pdf"])
            .assert()
            .code(2);
    }

    /// Exit code 1: Application error - records file does not exist
    #[test]
    fn test_exit_code_missing_records() {
        cargo_bin_cmd!("scan-grid")
            .args(["query", "--records", "tests/fixtures/nonexistent.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Scan records file not found"));
    }

    /// Exit code 1: Application error - sort index outside the column list
    #[test]
    fn test_exit_code_invalid_sort_column() {
        cargo_bin_cmd!("scan-grid")
            .args(["query", "--records", RECORDS, "--order-column", "99"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid sort column index 99"));
    }

    /// Exit code 1: Application error - column search on an unknown column
    #[test]
    fn test_exit_code_unknown_column() {
        cargo_bin_cmd!("scan-grid")
            .args(["query", "--records", RECORDS, "-c", "license_shortname=mit"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unknown column: license_shortname"));
    }

    /// Exit code 1: Application error - no records file anywhere
    #[test]
    fn test_exit_code_no_records_given() {
        cargo_bin_cmd!("scan-grid")
            .arg("query")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("No scan records file given"));
    }
}

#[test]
fn test_e2e_columns() {
    let columns = run_json(&["columns"]);
    let columns = columns.as_array().unwrap();

    assert_eq!(columns.len(), 43);
    assert_eq!(columns[0]["name"], "path");
    assert!(columns
        .iter()
        .any(|c| c["name"] == "license_short_name" && c["data"] == "license_short_name[<hr/>]"));
}

#[test]
fn test_e2e_columns_group() {
    let columns = run_json(&["columns", "--group", "email"]);
    let names: Vec<&str> = columns
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["path", "email", "email_start_line", "email_end_line"]);
}

#[test]
fn test_e2e_setup() {
    let setup = run_json(&["setup"]);

    assert_eq!(setup["columns"].as_array().unwrap().len(), 43);
    assert_eq!(setup["fixed_left_columns"], 1);
    let labels: Vec<&str> = setup["visibility_presets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec!["Copyright info", "License info", "Origin info", "Show all columns"]
    );
}

#[test]
fn test_e2e_first_page() {
    let response = run_json(&["--quiet", "query", "--records", RECORDS, "--draw", "1"]);

    assert_eq!(response["draw"], 1);
    assert_eq!(response["recordsTotal"], 25);
    assert_eq!(response["recordsFiltered"], 25);
    let paths = paths(&response);
    assert_eq!(paths.len(), 10);
    assert_eq!(&paths[..4], ["docs/CHANGES.md", "docs/COPYING", "docs/INSTALL.md", "docs/README.md"]);
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn test_e2e_column_search_prefix() {
    let response = run_json(&["query", "--records", RECORDS, "-c", "path=lib", "--length", "-1"]);

    assert_eq!(response["recordsTotal"], 25);
    assert_eq!(response["recordsFiltered"], 8);
    assert!(paths(&response).iter().all(|p| p.starts_with("lib/")));
}

#[test]
fn test_e2e_global_search_and_paging() {
    let response = run_json(&[
        "query", "--records", RECORDS, "--search", "GPL", "--start", "2", "--length", "2",
    ]);

    assert_eq!(response["recordsFiltered"], 4);
    assert_eq!(paths(&response), vec!["lib/libcrc32.c", "lib/liblist.c"]);
}

#[test]
fn test_e2e_descending_by_size() {
    // Column 27 is "size" in catalog order
    let response = run_json(&[
        "query", "--records", RECORDS, "--order-column", "27", "--order-dir", "desc", "--length", "1",
    ]);

    assert_eq!(paths(&response), vec!["tests/test_io.c"]);
}

#[test]
fn test_e2e_html_render() {
    let response = run_json(&[
        "query", "--records", RECORDS, "--render", "html", "-c", "path=lib/liballoc",
    ]);

    let columns: Vec<&str> = response["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_str().unwrap())
        .collect();
    let cell = |name: &str| {
        let index = columns.iter().position(|c| *c == name).unwrap();
        response["data"][0][index].as_str().unwrap().to_string()
    };

    assert_eq!(response["recordsFiltered"], 1);
    assert_eq!(cell("path"), "lib/liballoc.c");
    assert_eq!(cell("license_key"), "zlib<hr/>gpl-2.0");
    assert_eq!(cell("copyright_holders"), "Jean-loup Gailly<br/>Mark Adler");
    assert_eq!(
        cell("license_homepage_url"),
        "<a href=\"https://example.org/licenses/zlib\" target=\"_blank\">https://example.org/licenses/zlib</a>\
         <br><a href=\"https://example.org/licenses/gpl-2.0\" target=\"_blank\">https://example.org/licenses/gpl-2.0</a>"
    );
}

#[test]
fn test_e2e_request_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let request_path = dir.path().join("request.json");
    std::fs::write(
        &request_path,
        r#"{
            "draw": 42,
            "start": 0,
            "length": 5,
            "order": [{"column": 0, "dir": "desc"}],
            "columns": [
                {"data": "path", "name": "path", "searchable": true, "orderable": true,
                 "search": {"value": "src", "regex": false}},
                {"data": "name", "name": "name", "searchable": true, "orderable": true,
                 "search": {"value": "", "regex": false}}
            ],
            "search": {"value": "", "regex": false}
        }"#,
    )
    .unwrap();

    let response = run_json(&[
        "query",
        "--records",
        RECORDS,
        "--request",
        request_path.to_str().unwrap(),
    ]);

    assert_eq!(response["draw"], 42);
    assert_eq!(response["recordsFiltered"], 10);
    assert_eq!(paths(&response)[0], "src/version.h");
    assert_eq!(paths(&response).len(), 5);
}

#[test]
fn test_e2e_output_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_path = dir.path().join("grid.json");

    cargo_bin_cmd!("scan-grid")
        .args(["query", "--records", RECORDS, "--output"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written["recordsTotal"], 25);
}
