//! Integration tests for the docnav CLI.
//!
//! Each test builds a documentation tree in a temporary directory and runs
//! the binary against it.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn docnav(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docnav").unwrap();
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "# Page\n").unwrap();
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn default_docs_dir_without_arguments() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "docs/index.md");
    write(temp_dir.path(), "docs/guide.md");

    let stdout = stdout_of(&mut docnav(temp_dir.path()));

    assert_eq!(
        stdout,
        "nav:\n  - \"Home\": \"index.md\"\n  - \"guide\": \"guide.md\"\n"
    );
}

#[test]
fn package_directory_gets_index() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "docs/db.md");
    write(temp_dir.path(), "docs/engine.db/b.md");
    write(temp_dir.path(), "docs/engine.db/a.md");

    let stdout = stdout_of(docnav(temp_dir.path()).args(["--source-dir", "docs"]));

    assert_eq!(
        stdout,
        "\
nav:
  - \"engine.db\":
    - \"db.md\"
    - \"a\": \"engine.db/a.md\"
    - \"b\": \"engine.db/b.md\"
"
    );
}

#[test]
fn directory_without_markdown_is_omitted() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("docs/empty")).unwrap();
    fs::write(temp_dir.path().join("docs/empty/logo.svg"), "<svg/>").unwrap();

    let stdout = stdout_of(&mut docnav(temp_dir.path()));

    assert_eq!(stdout, "nav:\n");
}

#[test]
fn repeated_runs_are_identical() {
    let temp_dir = tempfile::tempdir().unwrap();
    for rel in [
        "docs/index.md",
        "docs/mylib.md",
        "docs/foo.mylib/x.md",
        "docs/foo.mylib/sub.md",
        "docs/foo.mylib/sub/y.md",
        "docs/misc/notes.md",
    ] {
        write(temp_dir.path(), rel);
    }

    let first = stdout_of(&mut docnav(temp_dir.path()));
    let second = stdout_of(&mut docnav(temp_dir.path()));

    assert_eq!(first, second);
    assert_eq!(
        first,
        "\
nav:
  - \"Home\": \"index.md\"
  - \"foo.mylib\":
    - \"mylib.md\"
    - \"sub\":
      - \"foo.mylib/sub.md\"
      - \"y\": \"foo.mylib/sub/y.md\"
    - \"x\": \"foo.mylib/x.md\"
  - \"misc\":
    - \"notes\": \"misc/notes.md\"
"
    );
}

#[test]
fn json_format() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "docs/db.md");
    write(temp_dir.path(), "docs/engine.db/a.md");

    let stdout = stdout_of(docnav(temp_dir.path()).args(["--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["nav"][0]["title"], "engine.db");
    assert_eq!(value["nav"][0]["index"]["path"], "db.md");
    assert_eq!(value["nav"][0]["children"][0]["path"], "engine.db/a.md");
}

#[test]
fn config_file_settings_apply() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "site/index.md");
    fs::write(
        temp_dir.path().join("docnav.toml"),
        "[docs]\nsource_dir = \"site\"\n\n[nav]\nhome_title = \"Overview\"\n",
    )
    .unwrap();

    let stdout = stdout_of(&mut docnav(temp_dir.path()));

    assert_eq!(stdout, "nav:\n  - \"Overview\": \"index.md\"\n");
}

#[test]
fn missing_source_dir_fails_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    let assert = docnav(temp_dir.path())
        .args(["--source-dir", "nope"])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();

    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not found"), "stderr: {stderr}");
}

#[test]
fn output_file_and_check() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "docs/guide.md");
    let nav_file = temp_dir.path().join("nav.yml");

    docnav(temp_dir.path())
        .args(["--output", "nav.yml"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&nav_file).unwrap(),
        "nav:\n  - \"guide\": \"guide.md\"\n"
    );

    docnav(temp_dir.path())
        .args(["--output", "nav.yml", "--check"])
        .assert()
        .success();

    write(temp_dir.path(), "docs/added.md");
    let assert = docnav(temp_dir.path())
        .args(["--output", "nav.yml", "--check"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("out of date"), "stderr: {stderr}");

    // --check never rewrites the file.
    assert_eq!(
        fs::read_to_string(&nav_file).unwrap(),
        "nav:\n  - \"guide\": \"guide.md\"\n"
    );
}

#[test]
fn check_missing_output_names_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "docs/guide.md");

    let assert = docnav(temp_dir.path())
        .args(["--output", "missing.yml", "--check"])
        .assert()
        .failure()
        .code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();

    assert!(stderr.contains("Cannot read missing.yml"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("missing.yml").exists());
}

#[test]
fn hidden_files_listed_unless_skipped() {
    let temp_dir = tempfile::tempdir().unwrap();
    write(temp_dir.path(), "docs/.intro.md");
    write(temp_dir.path(), "docs/guide.md");

    let stdout = stdout_of(&mut docnav(temp_dir.path()));
    assert_eq!(
        stdout,
        "nav:\n  - \".intro\": \".intro.md\"\n  - \"guide\": \"guide.md\"\n"
    );

    let stdout = stdout_of(docnav(temp_dir.path()).arg("--skip-hidden"));
    assert_eq!(stdout, "nav:\n  - \"guide\": \"guide.md\"\n");
}

#[test]
fn check_requires_output() {
    let temp_dir = tempfile::tempdir().unwrap();

    docnav(temp_dir.path()).arg("--check").assert().failure();
}
