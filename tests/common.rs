#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sbd() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("shiftboard_test_home");

    let mut cmd = cargo_bin_cmd!("shiftboard");
    cmd.env("HOME", home)
        .env_remove("SHIFTBOARD_DB")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A small festival:
///
/// | shift | type     | span                   | needs       | entries                      |
/// |-------|----------|------------------------|-------------|------------------------------|
/// | 1     | Bar      | 2020-07-18 10:00-12:00 | Heaven × 3  | Heaven: alice, bob           |
/// | 2     | Bar      | 2099-07-18 18:00-19:30 | Heaven × 2  | Heaven: all five users       |
/// | 3     | Build-up | 2099-07-19 08:00-11:00 | Runner × 1  | Runner: carol, Heaven: dave  |
pub const FESTIVAL_SQL: &str = r#"
    INSERT INTO shift_types (id, name, description) VALUES (1, 'Bar', ''), (2, 'Build-up', '');
    INSERT INTO locations (id, name) VALUES (1, 'Main Stage');
    INSERT INTO angel_types (id, name) VALUES (1, 'Heaven'), (2, 'Runner');
    INSERT INTO users (id, name) VALUES
        (1, 'alice'), (2, 'bob'), (3, 'carol'), (4, 'dave'), (5, 'erin');

    INSERT INTO shifts (id, title, description, start, "end", shift_type_id, location_id) VALUES
        (1, 'Bar early',   '', '2020-07-18 10:00:00', '2020-07-18 12:00:00', 1, 1),
        (2, 'Bar late',    '', '2099-07-18 18:00:00', '2099-07-18 19:30:00', 1, 1),
        (3, 'Stage build', '', '2099-07-19 08:00:00', '2099-07-19 11:00:00', 2, 1);

    INSERT INTO needed_angel_types (shift_id, angel_type_id, count) VALUES
        (1, 1, 3), (2, 1, 2), (3, 2, 1);

    INSERT INTO shift_entries (shift_id, angel_type_id, user_id) VALUES
        (1, 1, 1), (1, 1, 2),
        (2, 1, 1), (2, 1, 2), (2, 1, 3), (2, 1, 4), (2, 1, 5),
        (3, 2, 3), (3, 1, 4);
"#;

pub fn seed_conn(conn: &Connection) {
    conn.execute_batch(FESTIVAL_SQL).expect("seed festival");
}

/// Initialize the schema through the CLI and load the festival data set.
pub fn init_db_with_festival(db_path: &str) {
    sbd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let conn = Connection::open(db_path).expect("open db");
    seed_conn(&conn);
}
