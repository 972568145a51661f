use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_seeded, list_output, pos, rsch};

#[test]
fn test_init_lists_seeded_week() {
    let db_path = init_seeded("init_lists_seeded_week");
    let out = list_output(&db_path, None);

    assert!(pos(&out, "Dushanba") < pos(&out, "Seshanba"));
    assert!(pos(&out, "Seshanba") < pos(&out, "Shanba"));
    assert!(pos(&out, "Matematika") < pos(&out, "Ona tili"));
    assert!(out.contains("Ingliz tili"));
    assert!(out.contains("Azizova N."));
    assert!(out.contains("No classes"));
    assert!(out.contains("Total classes: 3"));
}

#[test]
fn test_list_single_day_by_key_or_name() {
    let db_path = init_seeded("list_single_day");

    let by_key = list_output(&db_path, Some("tuesday"));
    assert!(by_key.contains("Ingliz tili"));
    assert!(!by_key.contains("Matematika"));

    let by_name = list_output(&db_path, Some("seshanba"));
    assert_eq!(by_key, by_name);
}

#[test]
fn test_list_unknown_day_fails() {
    let db_path = init_seeded("list_unknown_day");

    rsch()
        .args(["--db", &db_path, "list", "--day", "sunday"])
        .assert()
        .failure()
        .stderr(contains("Unknown day: sunday"));
}

#[test]
fn test_add_keeps_day_sorted() {
    let db_path = init_seeded("add_keeps_day_sorted");

    rsch()
        .args([
            "--db", &db_path, "add", "monday", "--subject", "Fizika", "--start", "08:30", "--end",
            "09:15", "--room", "12",
        ])
        .assert()
        .success()
        .stdout(contains("Class 'Fizika' added to Dushanba"));

    let out = list_output(&db_path, Some("monday"));
    assert!(pos(&out, "Matematika") < pos(&out, "Fizika"));
    assert!(pos(&out, "Fizika") < pos(&out, "Ona tili"));
    assert!(out.contains("08:30-09:15"));
}

#[test]
fn test_add_uses_configured_defaults() {
    let db_path = init_seeded("add_uses_defaults");

    rsch()
        .args(["--db", &db_path, "add", "Chorshanba", "--subject", "Tarix"])
        .assert()
        .success();

    let out = list_output(&db_path, Some("wednesday"));
    assert!(out.contains("Tarix"));
    assert!(out.contains("08:00-08:45"));
    assert!(out.contains("Moviy"));
}

#[test]
fn test_add_rejects_blank_subject_and_bad_times() {
    let db_path = init_seeded("add_rejects_invalid");

    rsch()
        .args(["--db", &db_path, "add", "monday", "--subject", "   "])
        .assert()
        .failure()
        .stderr(contains("subject is required"));

    rsch()
        .args([
            "--db", &db_path, "add", "monday", "--subject", "Fizika", "--start", "8:30", "--end",
            "25:00",
        ])
        .assert()
        .failure()
        .stderr(
            contains("start time '8:30' is not a valid HH:MM time")
                .and(contains("end time '25:00' is not a valid HH:MM time")),
        );

    let out = list_output(&db_path, Some("monday"));
    assert!(!out.contains("Fizika"));
}

#[test]
fn test_add_with_custom_color_warns() {
    let db_path = init_seeded("add_custom_color");

    rsch()
        .args([
            "--db", &db_path, "add", "friday", "--subject", "Musiqa", "--color", "neon",
        ])
        .assert()
        .success()
        .stdout(contains("'neon' is not a palette color"));

    let out = list_output(&db_path, Some("friday"));
    assert!(out.contains("Musiqa"));
    assert!(out.contains("custom"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let db_path = init_seeded("edit_given_fields");

    rsch()
        .args(["--db", &db_path, "edit", "1", "--start", "10:00", "--end", "10:45"])
        .assert()
        .success()
        .stdout(contains("Class 1 updated on Dushanba"));

    let out = list_output(&db_path, Some("monday"));
    assert!(pos(&out, "Ona tili") < pos(&out, "Matematika"));
    assert!(out.contains("10:00-10:45"));
    assert!(out.contains("Azizova N."));
}

#[test]
fn test_edit_clears_teacher_and_rejects_bad_time() {
    let db_path = init_seeded("edit_clears_teacher");

    rsch()
        .args(["--db", &db_path, "edit", "3", "--teacher", ""])
        .assert()
        .success();
    let out = list_output(&db_path, Some("tuesday"));
    assert!(!out.contains("Smith J."));

    rsch()
        .args(["--db", &db_path, "edit", "3", "--end", "9"])
        .assert()
        .failure()
        .stderr(contains("end time '9' is not a valid HH:MM time"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = init_seeded("edit_unknown_id");

    rsch()
        .args(["--db", &db_path, "edit", "42", "--room", "1"])
        .assert()
        .failure()
        .stderr(contains("Class not found: 42"));
}

#[test]
fn test_del_with_yes_removes_class() {
    let db_path = init_seeded("del_with_yes");

    rsch()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Class 1 removed from Dushanba"));

    let out = list_output(&db_path, None);
    assert!(!out.contains("Matematika"));
    assert!(out.contains("Ona tili"));
    assert!(out.contains("Total classes: 2"));
}

#[test]
fn test_del_declined_keeps_class() {
    let db_path = init_seeded("del_declined");

    rsch()
        .args(["--db", &db_path, "del", "3"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Delete 'Ingliz tili' (08:00-08:45) from Seshanba?").and(contains("Operation cancelled.")));

    let out = list_output(&db_path, Some("tuesday"));
    assert!(out.contains("Ingliz tili"));
}

#[test]
fn test_del_confirmed_on_stdin() {
    let db_path = init_seeded("del_confirmed");

    rsch()
        .args(["--db", &db_path, "del", "2"])
        .write_stdin("yes\n")
        .assert()
        .success();

    let out = list_output(&db_path, Some("monday"));
    assert!(!out.contains("Ona tili"));
}

#[test]
fn test_added_class_can_be_deleted_by_prefix() {
    let db_path = init_seeded("del_by_prefix");

    rsch()
        .args(["--db", &db_path, "add", "saturday", "--subject", "Sport"])
        .assert()
        .success();

    let out = list_output(&db_path, Some("saturday"));
    let row = out
        .lines()
        .find(|l| l.contains("Sport"))
        .expect("row for Sport");
    let short = row.split_whitespace().next().expect("id column");
    assert_eq!(short.len(), 8);

    rsch()
        .args(["--db", &db_path, "del", short, "--yes"])
        .assert()
        .success();

    let out = list_output(&db_path, Some("saturday"));
    assert!(out.contains("No classes"));
}
