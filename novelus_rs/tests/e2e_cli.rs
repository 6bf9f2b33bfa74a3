//! End-to-End CLI Tests for novelus

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the novelus binary
fn novelus() -> Command {
    cargo_bin_cmd!("novelus")
}

/// Same, running inside `dir` so no stray novelus.toml is picked up
fn novelus_in(dir: &TempDir) -> Command {
    let mut cmd = novelus();
    cmd.current_dir(dir.path());
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        novelus()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        novelus()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn requires_subcommand() {
        novelus().assert().failure();
    }
}

// ============================================
// Build / Render
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_index_html() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");

        novelus_in(&dir)
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"));

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="services""#));
        assert!(html.contains("/images/Light%20Bulb.jpg"));
    }

    #[test]
    fn asset_base_flag_is_applied() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("public");

        novelus_in(&dir)
            .args(["build", "--asset-base", "https://cdn.example.com/img", "--out"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("https://cdn.example.com/img/Decision.jpg"));
    }

    #[test]
    fn render_prints_document_to_stdout() {
        let dir = TempDir::new().unwrap();
        novelus_in(&dir)
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Get in touch"));
    }
}

// ============================================
// Config file
// ============================================

mod config {
    use super::*;

    #[test]
    fn picks_up_novelus_toml_in_working_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("novelus.toml"),
            "[site]\ntitle = \"Novelus IP Staging\"\ncopyright_year = 2030\n",
        )
        .unwrap();

        novelus_in(&dir)
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Novelus IP Staging</title>"))
            .stdout(predicate::str::contains("2030 Novelus IP"));
    }

    #[test]
    fn explicit_missing_config_fails() {
        let dir = TempDir::new().unwrap();
        novelus_in(&dir)
            .args(["render", "--config", "missing.toml"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to read config"));
    }
}

// ============================================
// Check / Content
// ============================================

mod inspect {
    use super::*;

    #[test]
    fn check_resolves_navigation() {
        let dir = TempDir::new().unwrap();
        novelus_in(&dir)
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("ok  #services"))
            .stdout(predicate::str::contains("ok  #contact"))
            .stdout(predicate::str::contains("ok  #top"))
            .stdout(predicate::str::contains("5 anchors resolve"));
    }

    #[test]
    fn content_dumps_datasets_as_json() {
        let dir = TempDir::new().unwrap();
        let output = novelus_in(&dir).arg("content").output().unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let titles: Vec<_> = value["approach"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Discovery", "Diligence", "Decision"]);
        assert_eq!(value["services"].as_array().unwrap().len(), 4);
    }
}
