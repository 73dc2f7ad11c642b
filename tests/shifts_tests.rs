mod common;

use common::{init_db_with_festival, sbd, setup_test_db};
use predicates::prelude::*;
use shiftboard::utils::colors::{GREEN, YELLOW};

#[test]
fn test_shifts_lists_occupancy() {
    let db_path = setup_test_db("shifts_all");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "shifts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Bar] Bar early"))
        .stdout(predicate::str::contains(format!("Heaven: {YELLOW}2/3")))
        .stdout(predicate::str::contains("alice, bob"))
        .stdout(predicate::str::contains(format!("Heaven: {GREEN}5/2")))
        .stdout(predicate::str::contains(format!("Runner: {GREEN}1/1")))
        // assigned without a requirement
        .stdout(predicate::str::contains(format!("Heaven: {GREEN}1/0")));
}

#[test]
fn test_shifts_ongoing_hides_finished() {
    let db_path = setup_test_db("shifts_ongoing");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "shifts", "--ongoing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bar late"))
        .stdout(predicate::str::contains("Stage build"))
        .stdout(predicate::str::contains("Bar early").not());
}

#[test]
fn test_shifts_filter_by_shift_type() {
    let db_path = setup_test_db("shifts_type");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "shifts", "--shift-type", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage build"))
        .stdout(predicate::str::contains("Bar late").not());
}

#[test]
fn test_shifts_filter_by_date() {
    let db_path = setup_test_db("shifts_date");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "shifts", "--date", "2099-07-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bar late"))
        .stdout(predicate::str::contains("Stage build").not());
}

#[test]
fn test_shifts_invalid_date() {
    let db_path = setup_test_db("shifts_bad_date");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "shifts", "--date", "18/07/2099"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_shifts_none_match() {
    let db_path = setup_test_db("shifts_none");
    init_db_with_festival(&db_path);

    sbd()
        .args(["--db", &db_path, "shifts", "--date", "2001-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No shifts."));
}
