use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use log::debug;
use rusqlite::Connection;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".school-registry";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "school.sqlite";

/// Open the registry database at its fixed location, creating the data
/// directory on first use. All schema setup happens in [`open_at`] so tests
/// can point at a throwaway file and get identical behavior.
pub fn open_default() -> Result<Connection> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    open_at(&db_path)
}

/// Open the database file at an explicit path and idempotently ensure the
/// three tables exist. Foreign key enforcement is off by default in SQLite,
/// so the pragma is issued on every connection to keep the join table's
/// references meaningful.
pub fn open_at(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path).context("failed to open SQLite database")?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            age INT
        )",
        [],
    )
    .context("failed to create students table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT
        )",
        [],
    )
    .context("failed to create courses table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS student_courses (
            student_id INTEGER NOT NULL,
            course_id INTEGER NOT NULL,
            PRIMARY KEY (student_id, course_id),
            FOREIGN KEY(student_id) REFERENCES students(id) ON DELETE CASCADE,
            FOREIGN KEY(course_id) REFERENCES courses(id) ON DELETE CASCADE
        )",
        [],
    )
    .context("failed to create student_courses table")?;

    debug!("tables ensured to exist");
    Ok(conn)
}

/// Resolve the absolute path to the SQLite database inside the user's home.
fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
