use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_seeded, list_output, rsch, temp_out};

#[test]
fn test_theme_toggle_persists() {
    let db_path = init_seeded("theme_toggle_persists");

    rsch()
        .args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("Current theme: light"));

    rsch()
        .args(["--db", &db_path, "theme", "toggle"])
        .assert()
        .success()
        .stdout(contains("Theme set to dark"));

    rsch()
        .args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("Current theme: dark"));

    rsch()
        .args(["--db", &db_path, "theme", "light"])
        .assert()
        .success();

    rsch()
        .args(["--db", &db_path, "theme"])
        .assert()
        .success()
        .stdout(contains("Current theme: light"));

    // theme changes never touch the week
    let out = list_output(&db_path, None);
    assert!(out.contains("Total classes: 3"));
}

#[test]
fn test_colors_lists_palette() {
    let db_path = init_seeded("colors_lists_palette");

    rsch()
        .args(["--db", &db_path, "colors"])
        .assert()
        .success()
        .stdout(
            contains("\x1b[34mMoviy")
                .and(contains("To'q sariq"))
                .and(contains("bg-red-100")),
        );
}

#[test]
fn test_colors_follow_stored_theme() {
    let db_path = init_seeded("colors_follow_theme");

    rsch()
        .args(["--db", &db_path, "theme", "dark"])
        .assert()
        .success();

    rsch()
        .args(["--db", &db_path, "colors"])
        .assert()
        .success()
        .stdout(contains("\x1b[94mMoviy").and(contains("\x1b[34mMoviy").not()));
}

#[test]
fn test_export_json_and_force() {
    let db_path = init_seeded("export_json");
    let out = temp_out("export_json", "json");

    rsch()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Schedule exported to"));

    let doc: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let days = doc.as_array().unwrap();
    assert_eq!(days.len(), 6);
    assert_eq!(days[0]["dayId"], "monday");
    assert_eq!(days[0]["dayName"], "Dushanba");
    assert_eq!(days[0]["classes"][0]["subject"], "Matematika");
    assert_eq!(days[0]["classes"][0]["startTime"], "08:00");
    assert_eq!(days[5]["dayId"], "saturday");

    rsch()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    rsch()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn test_malformed_stored_week_falls_back_to_seed() {
    let db_path = init_seeded("malformed_stored_week");

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "UPDATE kv_store SET value = ?1 WHERE key = 'schoolSchedule'",
            ["[{\"dayId\":\"monday\""],
        )
        .unwrap();
    }

    let out = list_output(&db_path, None);
    assert!(out.contains("Matematika"));
    assert!(out.contains("Total classes: 3"));
}

#[test]
fn test_stored_week_is_normalized_on_load() {
    let db_path = init_seeded("normalized_stored_week");

    // days out of order, classes unsorted, stale display name
    let mut days: Vec<serde_json::Value> = ["saturday", "friday", "thursday", "wednesday", "tuesday"]
        .iter()
        .map(|d| serde_json::json!({"dayId": d, "dayName": d, "classes": []}))
        .collect();
    days.push(serde_json::json!({
        "dayId": "monday",
        "dayName": "Monday",
        "classes": [
            {"id": "b", "subject": "Late", "startTime": "12:00", "endTime": "12:45", "color": "x"},
            {"id": "a", "subject": "Early", "startTime": "07:30", "endTime": "08:15", "color": "x"}
        ]
    }));

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "UPDATE kv_store SET value = ?1 WHERE key = 'schoolSchedule'",
            [serde_json::Value::Array(days).to_string()],
        )
        .unwrap();
    }

    let out = list_output(&db_path, None);
    assert!(out.find("Dushanba").unwrap() < out.find("Shanba").unwrap());
    assert!(out.find("Early").unwrap() < out.find("Late").unwrap());
    assert!(out.contains("Total classes: 2"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = init_seeded("log_records_mutations");

    rsch()
        .args(["--db", &db_path, "add", "monday", "--subject", "Fizika"])
        .assert()
        .success();
    rsch()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    rsch()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(
            contains("migration_applied")
                .and(contains("init"))
                .and(contains("Added 'Fizika'"))
                .and(contains("Deleted 'Matematika' (1)")),
        );
}

#[test]
fn test_backup_creates_copy() {
    let db_path = init_seeded("backup_creates_copy");
    let out = temp_out("backup_creates_copy", "sqlite");

    rsch()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&out).unwrap().len() > 0);
}
