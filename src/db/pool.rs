//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! One `DbPool` is opened per repository call and dropped at the end of
//! it, so the connection is released on every exit path.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
