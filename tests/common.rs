#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vh() -> Command {
    cargo_bin_cmd!("volhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_volhours.sqlite", name));
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

/// Initialize the DB schema and enroll one volunteer (id 1).
pub fn init_db_with_volunteer(db_path: &str) {
    // init DB (creates tables), --test skips the config file write
    vh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    vh().args(["--db", db_path, "enroll", "Maria", "Rossi"])
        .assert()
        .success();
}

/// Log one entry via the CLI.
pub fn log_hours(db_path: &str, volunteer_id: &str, date: &str, hours: &str) {
    vh().args([
        "--db",
        db_path,
        "log",
        volunteer_id,
        "--date",
        date,
        "--hours",
        hours,
    ])
    .assert()
    .success();
}

/// Open the test DB directly and initialize the schema via the library API.
pub fn open_initialized(db_path: &str) -> rusqlite::Connection {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    volhours::db::initialize::init_db(&conn).expect("init db");
    conn
}
