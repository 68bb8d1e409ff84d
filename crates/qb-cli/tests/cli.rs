//! CLI command integration tests.
//! Each test runs in a temp working directory with QB_* variables cleared.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn qb_cmd(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("qb").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("QB_DATA")
        .env_remove("QB_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn daily_shows_quote_of_the_day() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .arg("daily")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quote of the day ("))
        .stdout(predicate::str::contains(
            "\"Imagination is more important than knowledge.\" - Albert Einstein",
        ));
}

#[test]
fn featured_respects_limit() {
    let dir = TempDir::new().unwrap();
    let output = qb_cmd(&dir)
        .args(["featured", "--limit", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("(quote_1)"));
    assert!(lines[1].contains("(quote_2)"));
}

#[test]
fn search_orders_by_relevance_by_default() {
    let dir = TempDir::new().unwrap();
    let output = qb_cmd(&dir).args(["search", "you"]).output().unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "5 results for \"you\"");
    // featured text matches first, then plain text matches, store order within a score
    let ids: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.rsplit('(').next().unwrap().trim_end_matches(')'))
        .collect();
    assert_eq!(ids, ["quote_3", "quote_5", "quote_10", "quote_11", "quote_12"]);
}

#[test]
fn search_with_topic_filter_and_likes_sort() {
    let dir = TempDir::new().unwrap();
    let output = qb_cmd(&dir)
        .args([
            "search",
            "",
            "--category",
            "cat_success",
            "--sort",
            "likes",
            "--order",
            "desc",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "3 of 12 results for \"\"");
    assert!(lines[1].contains("(quote_6)"));
    assert!(lines[3].contains("(quote_10)"));
}

#[test]
fn search_topic_all_means_no_filter() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["search", "", "--category", "all", "--author", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 results for \"\""));
}

#[test]
fn search_without_matches() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["search", "xylophone"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No quotes found for \"xylophone\""));
}

#[test]
fn search_rejects_unknown_sort_key() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["search", "you", "--sort", "height"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown quote sort key 'height'"));
}

#[test]
fn authors_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    let output = qb_cmd(&dir).arg("authors").output().unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "Showing 10 of 10 authors");
    assert!(lines[1].starts_with("Abraham Lincoln"));
    assert!(lines[10].starts_with("Winston Churchill"));
}

#[test]
fn authors_filtered_by_nationality() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["authors", "--filter", "british"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 10 authors"))
        .stdout(predicate::str::contains("Winston Churchill"));
}

#[test]
fn author_details_and_quotes() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["author", "auth_einstein"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Albert Einstein [auth_einstein]"))
        .stdout(predicate::str::contains("Born 1879-03-14"))
        .stdout(predicate::str::contains("2 quotes:"))
        .stdout(predicate::str::contains("(quote_11)"));
}

#[test]
fn unknown_author_fails() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["author", "auth_nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("author not found: auth_nobody"));
}

#[test]
fn topics_by_quote_count_default_descending() {
    let dir = TempDir::new().unwrap();
    let output = qb_cmd(&dir)
        .args(["topics", "--sort", "quotes"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines[1].starts_with("Motivational:"));
    assert!(lines[2].starts_with("Success:"));
}

#[test]
fn topic_shows_its_quotes() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["topic", "cat_motivational"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 quotes:"))
        .stdout(predicate::str::contains("(quote_9)"));
}

#[test]
fn birthdays_on_pi_day() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["birthdays", "--date", "03-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Albert Einstein (b. 1879)"))
        .stdout(predicate::str::contains("Steve Jobs").not());

    qb_cmd(&dir)
        .args(["birthdays", "--date", "01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no birthdays on 01-01)"));
}

#[test]
fn birthdays_rejects_bad_date() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .args(["birthdays", "--date", "13-01"])
        .assert()
        .failure();
}

#[test]
fn stats_on_builtin_dataset() {
    let dir = TempDir::new().unwrap();
    qb_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("quotes:     12"))
        .stdout(predicate::str::contains("authors:    10"))
        .stdout(predicate::str::contains("max/topic:  3"))
        .stdout(predicate::str::contains("avg/topic:  1"))
        .stdout(predicate::str::contains("popular:    Motivational (3)"))
        .stdout(predicate::str::contains(
            "top topics: Motivational (3), Success (3), Wisdom (2)",
        ));
}

#[test]
fn export_then_load_with_data_flag() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("quotes.json");

    qb_cmd(&dir)
        .arg("export")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("exported to"));
    assert!(path.exists(), "export file should exist");

    qb_cmd(&dir)
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("quotes:     12"));
}

#[test]
fn data_env_var_selects_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.json");
    std::fs::write(
        &path,
        r#"{
            "authors": [{"id": "a", "name": "Ada Lovelace", "bio": "", "birthDate": "1815-12-10",
                         "profession": "Mathematician", "nationality": "British"}],
            "categories": [{"id": "c", "name": "Science", "description": ""}],
            "quotes": [{"id": "q", "text": "That brain of mine is something more than merely mortal.",
                        "authorId": "a", "categoryId": "c", "isDailyQuote": true}]
        }"#,
    )
    .unwrap();

    qb_cmd(&dir)
        .env("QB_DATA", &path)
        .arg("daily")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Ada Lovelace"));
}

#[test]
fn invalid_dataset_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(
        &path,
        r#"{"quotes": [{"id": "q", "text": "t", "authorId": "ghost", "categoryId": "c"}]}"#,
    )
    .unwrap();

    qb_cmd(&dir)
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load dataset"));
}

#[test]
fn config_file_in_working_directory_sets_featured_limit() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("quotebook.toml"),
        "[display]\nfeatured_limit = 3\n",
    )
    .unwrap();

    let output = qb_cmd(&dir).arg("featured").output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output).len(), 3);
}

#[test]
fn bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "colour = \"blue\"\n").unwrap();

    qb_cmd(&dir)
        .arg("--config")
        .arg(&path)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}
