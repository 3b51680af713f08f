use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn itemreg() -> Command {
    Command::cargo_bin("itemreg").unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    itemreg().arg("--help").assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("departments"))
            .and(predicate::str::contains("export"))
            .and(predicate::str::contains("config"))
            .and(predicate::str::contains("--api-url"))
            .and(predicate::str::contains("--data-dir")),
    );
}

#[test]
fn test_list_help_shows_filters() {
    itemreg().args(["list", "--help"]).assert().success().stdout(
        predicate::str::contains("--query")
            .and(predicate::str::contains("--type"))
            .and(predicate::str::contains("--department"))
            .and(predicate::str::contains("--min-value"))
            .and(predicate::str::contains("--max-value")),
    );
}

#[test]
fn test_export_help_shows_selection_modes() {
    itemreg().args(["export", "--help"]).assert().success().stdout(
        predicate::str::contains("--select")
            .and(predicate::str::contains("--all-filtered"))
            .and(predicate::str::contains("--title"))
            .and(predicate::str::contains("--output-dir")),
    );
}

#[test]
fn test_unknown_type_is_rejected() {
    itemreg()
        .args(["list", "--type", "furniture"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("furniture"));
}

#[test]
fn test_version() {
    itemreg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("itemreg "));
}
