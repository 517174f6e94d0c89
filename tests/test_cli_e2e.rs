mod common;

use common::{HostDocument, run_permstable};

const HOST: &str = "---\nlayout: docs\n---\n\n# Resource table\n\n{/* BEGIN TABLE */}\n\nstale content\n\n{/* END TABLE */}\n\nFooter\n";

// ============================================================================
// generate
// ============================================================================

#[test]
fn generate_splices_table_silently() {
    let doc = HostDocument::new(HOST);
    let output = run_permstable(&["generate", "--file", doc.arg()]);

    assert!(
        output.status.success(),
        "generate should exit 0: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(output.stdout.is_empty(), "generate should print nothing");

    let written = doc.read();
    assert!(written.starts_with("---\nlayout: docs\n---\n\n# Resource table\n\n{/* BEGIN TABLE */}\n\n- [Account](#account)\n"));
    assert!(written.ends_with("\n\n{/* END TABLE */}\n\nFooter\n"));
    assert!(!written.contains("stale content"));
    assert!(written.contains("## Session recording\n"));
    assert!(written.contains("| <code>/hosts/&lt;id&gt;</code> | <ul><li>ID</li>"));
}

#[test]
fn generate_twice_is_byte_identical() {
    let doc = HostDocument::new(HOST);
    assert!(run_permstable(&["generate", "-f", doc.arg()]).status.success());
    let first = doc.read();
    assert!(run_permstable(&["generate", "-f", doc.arg()]).status.success());
    assert_eq!(doc.read(), first);
}

#[test]
fn generate_reads_file_from_env() {
    let doc = HostDocument::new(HOST);
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_permstable"))
        .arg("generate")
        .env("PERMSTABLE_FILE", doc.arg())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(doc.read().contains("- [Worker](#worker)"));
}

#[test]
fn bare_invocation_reads_file_from_env() {
    let doc = HostDocument::new(HOST);
    let workdir = tempfile::tempdir().unwrap();
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_permstable"))
        .current_dir(workdir.path())
        .env("PERMSTABLE_FILE", doc.arg())
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "bare invocation should honour PERMSTABLE_FILE: {}",
        String::from_utf8_lossy(&output.stdout)
    );
    assert!(doc.read().contains("- [Worker](#worker)"));
    assert!(!doc.read().contains("stale content"));
}

#[test]
fn missing_marker_reports_on_stdout() {
    let doc = HostDocument::new("no markers\n");
    let output = run_permstable(&["generate", "-f", doc.arg()]);

    assert_eq!(output.status.code(), Some(4));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("error: marker \"BEGIN TABLE\" not found"),
        "unexpected output: {stdout}"
    );
    assert_eq!(doc.read(), "no markers\n");
}

#[test]
fn missing_file_exits_nonzero() {
    let output = run_permstable(&[
        "generate",
        "-f",
        "/tmp/nonexistent_permstable_dir/resource-table.mdx",
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("error: failed to read"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn check_detects_stale_then_passes() {
    let doc = HostDocument::new(HOST);

    let stale = run_permstable(&["check", "-f", doc.arg()]);
    assert_eq!(stale.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&stale.stdout).contains("out of date"));
    assert_eq!(doc.read(), HOST, "check must not write");

    assert!(run_permstable(&["generate", "-f", doc.arg()]).status.success());
    let fresh = run_permstable(&["check", "-f", doc.arg()]);
    assert!(fresh.status.success());
}

// ============================================================================
// print / catalog
// ============================================================================

#[test]
fn print_toc() {
    let output = run_permstable(&["print", "--section", "toc"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 16);
    assert!(stdout.contains("- [Host catalog](#host-catalog)\n"));
}

#[test]
fn catalog_json() {
    let output = run_permstable(&["catalog", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("catalog JSON should be valid");
    let resources = parsed["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 16);
    assert_eq!(resources[0]["type"], "Account");
    assert_eq!(resources[0]["endpoints"][1]["params"]["Pin"], "<auth-method-id>");
}

// ============================================================================
// version / completions / usage
// ============================================================================

#[test]
fn version_json() {
    let output = run_permstable(&["version", "--format", "json"]);
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["name"], "permstable");
    assert_eq!(parsed["resources"], 16);
}

#[test]
fn completions_zsh() {
    let output = run_permstable(&["completions", "zsh"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("permstable"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let output = run_permstable(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(64));
}
