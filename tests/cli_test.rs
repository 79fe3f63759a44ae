use assert_cmd::Command;
use predicates::prelude::*;
use rowdb::row::{EMAIL_SIZE, USERNAME_SIZE};
use rowdb::TABLE_MAX_ROWS;

fn run_commands<T: AsRef<str>>(commands: &[T]) -> Command {
    let mut cmd = Command::cargo_bin("rowdb").expect("Failed to run command");

    let input = commands
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("\n");
    cmd.write_stdin(input);
    cmd
}

#[test]
fn it_inserts_and_retrieves_rows() {
    let mut cmd = run_commands(&[
        "insert 1 alice alice@example.com",
        "insert 2 bob bob@example.com",
        "select",
        ".exit",
    ]);

    let expected = [
        "db > Executed.",
        "db > Executed.",
        "db > [ 1, alice, alice@example.com ]",
        "[ 2, bob, bob@example.com ]",
        "Executed.",
        "db > ",
    ]
    .join("\n");

    cmd.assert().success().stdout(expected);
}

#[test]
fn it_prints_error_message_when_table_is_full() {
    let mut commands = Vec::new();
    for i in 0..TABLE_MAX_ROWS + 1 {
        commands.push(format!("insert {i} user{i} person{i}@example.com"));
    }
    commands.push(String::from(".exit"));

    let mut cmd = run_commands(&commands);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("db > Error: Table full."));
}

#[test]
fn it_allows_inserting_strings_that_are_the_maximum_length() {
    let long_username = "a".repeat(USERNAME_SIZE);
    let long_email = "a".repeat(EMAIL_SIZE);

    let mut cmd = run_commands(&[
        format!("insert 1 {long_username} {long_email}"),
        String::from("select"),
        String::from(".exit"),
    ]);

    let expected = [
        String::from("db > Executed."),
        format!("db > [ 1, {long_username}, {long_email} ]"),
        String::from("Executed."),
        String::from("db > "),
    ]
    .join("\n");

    cmd.assert().success().stdout(expected);
}

#[test]
fn it_prints_error_message_if_strings_are_too_long() {
    let long_username = "a".repeat(USERNAME_SIZE + 1);

    let mut cmd = run_commands(&[
        format!("insert 1 {long_username} person@example.com"),
        String::from("select"),
        String::from(".exit"),
    ]);

    let expected = ["db > String is too long.", "db > Executed.", "db > "].join("\n");

    cmd.assert().success().stdout(expected);
}

#[test]
fn it_prints_error_message_if_id_is_negative() {
    let mut cmd = run_commands(&["insert -1 alice alice@example.com", "select", ".exit"]);

    let expected = ["db > ID must be positive.", "db > Executed.", "db > "].join("\n");

    cmd.assert().success().stdout(expected);
}

#[test]
fn it_rejects_insert_with_missing_arguments() {
    let mut cmd = run_commands(&[
        "insert 1 alice alice@example.com",
        "insert 2 bob",
        "select",
        ".exit",
    ]);

    let expected = [
        "db > Executed.",
        "db > Syntax error. Could not parse statement.",
        "db > [ 1, alice, alice@example.com ]",
        "Executed.",
        "db > ",
    ]
    .join("\n");

    cmd.assert().success().stdout(expected);
}

#[test]
fn it_reports_unrecognized_statements() {
    let mut cmd = run_commands(&["foobar", ".exit"]);

    let expected = ["db > Unrecognized keyword at start of 'foobar'.", "db > "].join("\n");

    cmd.assert().success().stdout(expected);
}

#[test]
fn it_reports_unrecognized_meta_commands() {
    let mut cmd = run_commands(&[".tables", ".exit"]);

    let expected = ["db > Unrecognized command '.tables'.", "db > "].join("\n");

    cmd.assert().success().stdout(expected);
}
