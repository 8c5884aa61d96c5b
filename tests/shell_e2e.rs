use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const HEADER: &str = "Title,Author,Year,Genre,Rating\r\n";

fn bookshelf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("config"))
        .arg("--store")
        .arg(dir.join("library.csv"));
    cmd
}

fn seed(dir: &Path, rows: &[&str]) {
    let mut content = HEADER.to_string();
    for row in rows {
        content.push_str(row);
        content.push_str("\r\n");
    }
    fs::write(dir.join("library.csv"), content).unwrap();
}

fn store(dir: &Path) -> String {
    fs::read_to_string(dir.join("library.csv")).unwrap()
}

#[test]
fn empty_store_list_creates_header_only_file() {
    let temp = TempDir::new().unwrap();

    bookshelf(temp.path())
        .write_stdin("2\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your library is empty."))
        .stdout(predicate::str::contains("Goodbye!"));

    assert_eq!(store(temp.path()), HEADER);
}

#[test]
fn add_then_list_shows_one_line() {
    let temp = TempDir::new().unwrap();

    bookshelf(temp.path())
        .write_stdin("1\nDune\nHerbert\n1965\nSci-Fi\n4.8\n2\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book 'Dune' added successfully!"))
        .stdout(predicate::str::contains(
            "1. Dune by Herbert (1965) - Genre: Sci-Fi, Rating: 4.8\n",
        ))
        .stdout(predicate::str::contains("Total books: 1"));

    assert_eq!(
        store(temp.path()),
        format!("{}Dune,Herbert,1965,Sci-Fi,4.8\r\n", HEADER)
    );
}

#[test]
fn list_and_search_leave_store_untouched() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        &["Dune,Herbert,1965,Sci-Fi,4.8", "\"Guns, Germs\",Diamond,1997,,"],
    );
    let before = fs::read(temp.path().join("library.csv")).unwrap();

    bookshelf(temp.path())
        .write_stdin("2\n3\ngerms\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 matching books:"))
        .stdout(predicate::str::contains(
            "1. Guns, Germs by Diamond (1997) - Genre: , Rating: ",
        ));

    let after = fs::read(temp.path().join("library.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn search_matches_author_but_delete_does_not() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["Dune,Herbert,1965,Sci-Fi,4.8"]);

    bookshelf(temp.path())
        .write_stdin("3\nherbert\n4\nherbert\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 matching books:"))
        .stdout(predicate::str::contains("No books found with that title."));
}

#[test]
fn delete_all_removes_matches_and_persists_rest() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        &[
            "Dune,Herbert,1965,Sci-Fi,4.8",
            "Emma,Austen,1815,Classic,4.0",
            "Dune Messiah,Herbert,1969,Sci-Fi,",
        ],
    );

    bookshelf(temp.path())
        .write_stdin("4\ndune\nall\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 2 books."));

    assert_eq!(
        store(temp.path()),
        format!("{}Emma,Austen,1815,Classic,4.0\r\n", HEADER)
    );
}

#[test]
fn delete_cancel_leaves_store_unchanged() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        &["Dune,Herbert,1965,Sci-Fi,4.8", "Dune Messiah,Herbert,1969,Sci-Fi,"],
    );
    let before = store(temp.path());

    bookshelf(temp.path())
        .write_stdin("4\ndune\ncancel\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    assert_eq!(store(temp.path()), before);
}

#[test]
fn delete_one_of_two_identical_records() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["Twin,Same,2000,,", "Twin,Same,2000,,"]);

    bookshelf(temp.path())
        .write_stdin("4\ntwin\n2\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 books."));

    assert_eq!(store(temp.path()), format!("{}Twin,Same,2000,,\r\n", HEADER));
}

#[test]
fn report_average_and_tied_oldest() {
    let temp = TempDir::new().unwrap();
    seed(
        temp.path(),
        &[
            "A,X,1950,,4.5",
            "B,X,1950,Poetry,",
            "C,X,2001,Poetry,bad",
            "D,X,,,3.0",
        ],
    );

    bookshelf(temp.path())
        .write_stdin("5\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Uncategorized: 2 book(s)"))
        .stdout(predicate::str::contains("Poetry: 2 book(s)"))
        .stdout(predicate::str::contains("3.75 (from 2 rated books)"))
        .stdout(predicate::str::contains(
            "--- Oldest Book(s) ---\nA by X (1950)\nB by X (1950)\n",
        ))
        .stdout(predicate::str::contains("--- Newest Book(s) ---\nC by X (2001)\n"));
}

#[test]
fn json_round_trip_into_empty_store() {
    let source = TempDir::new().unwrap();
    seed(
        source.path(),
        &["Dune,Herbert,1965,Sci-Fi,4.8", "Emma,Austen,,,"],
    );
    let export_path = source.path().join("books.json");

    bookshelf(source.path())
        .write_stdin(format!("6\njson\n{}\n8\n", export_path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Library exported to"));

    let exported = fs::read_to_string(&export_path).unwrap();
    assert!(exported.starts_with("[\n    {\n        \"Title\": \"Dune\","));

    let target = TempDir::new().unwrap();
    bookshelf(target.path())
        .write_stdin(format!("7\nJSON\n{}\n8\n", export_path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 books successfully."));

    assert_eq!(store(target.path()), store(source.path()));
}

#[test]
fn import_errors_are_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let bad = temp.path().join("bad.json");
    fs::write(&bad, "{ nope").unwrap();

    bookshelf(temp.path())
        .write_stdin(format!("7\njson\n{}\n2\n8\n", bad.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Error importing: "))
        .stdout(predicate::str::contains("Your library is empty."));
}

#[test]
fn end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    bookshelf(temp.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn corrupt_store_terminates_with_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("library.csv"), "Author\nHerbert\n").unwrap();

    bookshelf(temp.path())
        .write_stdin("2\n8\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: CSV error"));
}

#[test]
fn config_file_sets_store_location() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{"store_file": "from-config.csv"}"#,
    )
    .unwrap();

    Command::cargo_bin("bookshelf")
        .unwrap()
        .current_dir(temp.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(&config_dir)
        .write_stdin("2\n8\n")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("from-config.csv")).unwrap(),
        HEADER
    );
}

#[test]
fn version_flag() {
    Command::cargo_bin("bookshelf")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bookshelf "));
}
