//! Command-line tests for the `akmc-tools` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn akmc_tools(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("akmc-tools").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// `states/` with state 0 (processes 0 and 1 connected, 2 not) and state 1
/// (process 0 connected).
fn states_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("states");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("state_table"), "0 -100.0 0\n1 -99.0 0\n").unwrap();

    let states: [(&str, &[(&str, &str)]); 2] = [
        ("0", &[("0", "1"), ("1", "4"), ("2", "-1")]),
        ("1", &[("0", "0")]),
    ];
    for (state, processes) in states {
        let procdata = root.join(state).join("procdata");
        fs::create_dir_all(&procdata).unwrap();
        let mut table = String::from("proc saddle-energy prefactor product\n");
        for (process, product) in processes {
            table.push_str(&format!("{process} -1.0 1e12 {product}\n"));
            for role in ["reactant", "saddle", "product"] {
                fs::write(procdata.join(format!("{role}_{process}.con")), "structure").unwrap();
            }
        }
        fs::write(root.join(state).join("processtable"), table).unwrap();
    }
    dir
}

#[test]
fn test_help_lists_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    akmc_tools(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("con2xyz"))
        .stdout(predicate::str::contains("html5"))
        .stdout(predicate::str::contains("pptx"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_html_without_conversion_writes_index() {
    let dir = states_dir();
    akmc_tools(dir.path())
        .args(["html", "states", "--no-convert"])
        .assert()
        .success()
        .stderr(predicate::str::contains("3 records written to index.html"));

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert_eq!(html.matches("<TR>").count(), 3);
    assert!(html.contains("<IMG SRC=\"states/0/procdata/saddle_1.png\">"));
    assert!(!html.contains("_2.png"));
}

#[test]
fn test_html5_movies_json_summary() {
    let dir = states_dir();
    akmc_tools(dir.path())
        .args(["html5", "states", "--movies", "--no-convert", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"FINALIZED\""))
        .stdout(predicate::str::contains("\"records\": 3"));

    let html = fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert_eq!(html.matches("jmolApplet(400,").count(), 3);
    assert!(html.contains("states/1/procdata/reaction_0.xyz"));
}

#[test]
fn test_html_custom_output() {
    let dir = states_dir();
    akmc_tools(dir.path())
        .args(["html", "states", "--no-convert", "--output", "report.html"])
        .assert()
        .success();

    assert!(dir.path().join("report.html").exists());
    assert!(!dir.path().join("index.html").exists());
}

#[test]
fn test_missing_state_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("states")).unwrap();

    akmc_tools(dir.path())
        .args(["html", "states", "--no-convert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("state_table"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = states_dir();
    akmc_tools(dir.path())
        .args(["--config", "missing.toml", "html", "states", "--no-convert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_con2xyz_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    akmc_tools(dir.path())
        .args(["con2xyz", "reactant_0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reactant_0.con"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = tempfile::tempdir().unwrap();
    akmc_tools(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("akmc-tools.toml").exists());

    akmc_tools(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    akmc_tools(dir.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_ignores_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.toml"), "input-extension = [").unwrap();

    akmc_tools(dir.path())
        .args(["--config", "broken.toml", "init"])
        .assert()
        .success();
    assert!(dir.path().join("akmc-tools.toml").exists());
}

#[cfg(unix)]
#[test]
fn test_con2xyz_uses_configured_converter() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("saddle_3.con"), "structure\n").unwrap();
    fs::write(
        dir.path().join("akmc-tools.toml"),
        "[converter.still]\nprogram = \"cp\"\nargs = [\"{input}\", \"{output}\"]\n",
    )
    .unwrap();

    akmc_tools(dir.path())
        .args(["con2xyz", "saddle_3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("saddle_3.xyz"));

    assert_eq!(
        fs::read_to_string(dir.path().join("saddle_3.xyz")).unwrap(),
        "structure\n"
    );
}

#[cfg(unix)]
#[test]
fn test_pptx_with_configured_deck_writer() {
    let dir = states_dir();
    fs::write(
        dir.path().join("writer.toml"),
        "[deck-writer]\nprogram = \"cp\"\nargs = [\"{source}\", \"{output}\"]\n",
    )
    .unwrap();

    akmc_tools(dir.path())
        .args(["--config", "writer.toml", "pptx", "states", "--no-convert"])
        .assert()
        .success();

    let deck = fs::read_to_string(dir.path().join("states.pptx")).unwrap();
    assert!(deck.contains("# State: 0 Process: 1"));
    assert!(deck.contains("# State: 1 Process: 0"));
}
