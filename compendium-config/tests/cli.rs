use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixtures() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

fn compendium(prefs: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("compendium");
    cmd.env("COMPENDIUM_CORPUS_DIR", fixtures())
        .env(
            "COMPENDIUM_PREFERENCES_PATH",
            prefs.path().join("preferences.json"),
        )
        .env("COMPENDIUM_LOG", "off")
        .env("COMPENDIUM_CONFIG_PATH", fixtures().join("compendium.toml"));
    cmd
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("compendium");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("prefs"));
}

#[test]
fn list_reads_local_corpus_and_remembers_view() {
    let prefs = TempDir::new().expect("tempdir");

    compendium(&prefs)
        .args(["list", "monsters", "--filter", "cr=2", "--sort", "name", "--desc"])
        .args(["--view", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 2 of 2 monsters"))
        .stdout(predicate::str::contains("Name v"));

    compendium(&prefs)
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view: table"));
}

#[test]
fn unknown_filter_is_rejected() {
    let prefs = TempDir::new().expect("tempdir");
    compendium(&prefs)
        .args(["list", "monsters", "--filter", "rarity=Rare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown filter 'rarity'"));
}

#[test]
fn malformed_detail_id_is_not_found() {
    let prefs = TempDir::new().expect("tempdir");
    compendium(&prefs)
        .args(["show", "monsters", "abc"])
        .assert()
        .success()
        .stdout("monster not found\n");
}

#[test]
fn theme_cycles_and_persists() {
    let prefs = TempDir::new().expect("tempdir");
    compendium(&prefs)
        .args(["prefs", "set", "theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme: dark"));
    compendium(&prefs)
        .args(["prefs", "cycle-theme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("theme: system"));
}
