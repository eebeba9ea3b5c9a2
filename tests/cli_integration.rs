use assert_cmd::Command;
use predicates::prelude::*;

// SHA-256 of "madam"; ids are content-addressed so this never changes.
const MADAM_ID: &str = "765cc52b3dbc1bb8ec279ef9c8ec3d0f251c0c92a6ecdc1870be8f7dc7538b21";

fn strprobe(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("strprobe").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn test_add_inspect_and_natural_query() {
    let temp_dir = tempfile::tempdir().unwrap();

    strprobe(temp_dir.path())
        .arg("add")
        .arg("madam")
        .assert()
        .success()
        .stdout(predicates::str::contains(MADAM_ID))
        .stdout(predicates::str::contains("palindrome: true"));

    strprobe(temp_dir.path())
        .arg("add")
        .arg("hello world")
        .assert()
        .success();

    // Inspect does not persist
    strprobe(temp_dir.path())
        .arg("inspect")
        .arg("racecar")
        .assert()
        .success()
        .stdout(predicates::str::contains("palindrome: true"));

    strprobe(temp_dir.path())
        .arg("list")
        .arg("--query")
        .arg("all palindromic strings")
        .assert()
        .success()
        .stdout(predicates::str::contains("madam"))
        .stdout(predicates::str::contains("hello world").not())
        .stdout(predicates::str::contains("racecar").not());
}

#[test]
fn test_duplicate_value_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    strprobe(temp_dir.path())
        .arg("add")
        .arg("madam")
        .assert()
        .success();

    strprobe(temp_dir.path())
        .arg("add")
        .arg("madam")
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));

    // A different value is still accepted
    strprobe(temp_dir.path())
        .arg("add")
        .arg("madame")
        .assert()
        .success();
}

#[test]
fn test_structured_filters() {
    let temp_dir = tempfile::tempdir().unwrap();

    for value in ["madam", "hi", "never odd or even"] {
        strprobe(temp_dir.path())
            .arg("add")
            .arg(value)
            .assert()
            .success();
    }

    strprobe(temp_dir.path())
        .arg("list")
        .arg("--palindrome")
        .arg("true")
        .arg("--word-count")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("madam"))
        .stdout(predicates::str::contains("never odd or even").not());

    strprobe(temp_dir.path())
        .arg("list")
        .arg("--min-length")
        .arg("not-a-number")
        .assert()
        .failure()
        .stderr(predicates::str::contains("min_length"));
}

#[test]
fn test_query_error_kinds_are_distinct() {
    let temp_dir = tempfile::tempdir().unwrap();

    strprobe(temp_dir.path())
        .arg("list")
        .arg("--query")
        .arg("qwerty gibberish")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Could not interpret query"));

    strprobe(temp_dir.path())
        .arg("list")
        .arg("--query")
        .arg("strings longer than 10 and shorter than 5")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Conflicting filters"));
}

#[test]
fn test_get_and_delete_by_content_id() {
    let temp_dir = tempfile::tempdir().unwrap();

    strprobe(temp_dir.path())
        .arg("add")
        .arg("madam")
        .assert()
        .success();

    strprobe(temp_dir.path())
        .arg("get")
        .arg(MADAM_ID)
        .assert()
        .success()
        .stdout(predicates::str::contains("madam"));

    strprobe(temp_dir.path())
        .arg("delete")
        .arg(MADAM_ID)
        .assert()
        .success();

    strprobe(temp_dir.path())
        .arg("get")
        .arg(MADAM_ID)
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn test_empty_match_set_is_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    strprobe(temp_dir.path())
        .arg("list")
        .arg("--palindrome")
        .arg("true")
        .assert()
        .success()
        .stdout(predicates::str::contains("No entries found."));
}
