mod common;

use common::{init_db_with_festival, sbd, setup_test_db};
use predicates::prelude::*;
use rusqlite::Connection;

#[test]
fn test_init_creates_schema_and_logs() {
    let db_path = setup_test_db("cli_init");

    sbd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    let conn = Connection::open(&db_path).unwrap();
    let applied: i64 = conn
        .query_row("SELECT COUNT(*) FROM migrations", [], |r| r.get(0))
        .unwrap();
    assert_eq!(applied, 3);

    sbd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));
}

#[test]
fn test_init_twice_is_harmless() {
    let db_path = setup_test_db("cli_init_twice");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    sbd()
        .args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 applied"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shifts"))
        .stdout(predicate::str::contains("Integrity check passed"))
        .stdout(predicate::str::contains("Schema is up to date"));
}

#[test]
fn test_db_check_reports_pending_migrations() {
    let db_path = setup_test_db("cli_db_pending");
    init_db_with_festival(&db_path);

    let conn = Connection::open(&db_path).unwrap();
    conn.execute(
        "DELETE FROM migrations WHERE migration LIKE '%create_log_entries'",
        [],
    )
    .unwrap();

    sbd()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 pending migration(s)"));
}

#[test]
fn test_log_limit() {
    let db_path = setup_test_db("cli_log_limit");
    init_db_with_festival(&db_path);

    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "INSERT INTO log_entries (level, message, created_at) VALUES
            ('warning', 'first change', '2099-07-18T10:00:00+00:00'),
            ('error', 'second change', '2099-07-18T11:00:00+00:00');",
    )
    .unwrap();

    sbd()
        .args(["--db", &db_path, "log", "--print", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("second change"))
        .stdout(predicate::str::contains("first change").not());
}

#[test]
fn test_config_print_shows_override() {
    let db_path = setup_test_db("cli_config_print");

    sbd()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("event_utc_offset"))
        .stdout(predicate::str::contains(db_path.as_str()));
}

#[test]
fn test_env_var_selects_database() {
    let db_path = setup_test_db("cli_env_db");
    init_db_with_festival(&db_path);

    sbd()
        .env("SHIFTBOARD_DB", &db_path)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"shift_count\": 3"));
}

#[test]
fn test_watch_renders_once_and_stops() {
    let db_path = setup_test_db("cli_watch");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "watch", "--iterations", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By Angel Type"))
        .stdout(predicate::str::contains("Watching for updates"));
}

#[test]
fn test_watch_quiet_without_changes() {
    let db_path = setup_test_db("cli_watch_quiet");
    init_db_with_festival(&db_path);

    let output = sbd()
        .args(["--db", &db_path, "watch", "--iterations", "1", "--interval", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("By Angel Type").count(), 1);
}
