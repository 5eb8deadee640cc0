use anyhow::{Context, Result};
use log::debug;
use rusqlite::{params, Connection};

use crate::models::Student;

/// Wipe the students table and reinsert the fixed default roster. The delete
/// plus sequence reset runs on every startup, so ids 1 through 5 always name
/// the same five defaults regardless of what a previous session stored.
pub fn seed_default_students(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM students", [])
        .context("failed to clear students table")?;

    // sqlite_sequence exists as soon as the AUTOINCREMENT table is created,
    // so this delete is safe even on a brand new database file.
    conn.execute("DELETE FROM sqlite_sequence WHERE name = 'students'", [])
        .context("failed to reset student id sequence")?;

    conn.execute(
        "INSERT INTO students (name, age) VALUES
            ('Alice Johansson', 19),
            ('Bob Karlsson', 20),
            ('Charlie Svensson', 18),
            ('Diana Lind', 22),
            ('Erik Bergström', 21)",
        [],
    )
    .context("failed to insert default students")?;

    debug!("default students seeded");
    Ok(())
}

/// Insert a new student row, returning the hydrated struct so the caller can
/// echo the assigned id without re-querying.
pub fn add_student(conn: &Connection, name: &str, age: i64) -> Result<Student> {
    conn.execute(
        "INSERT INTO students (name, age) VALUES (?1, ?2)",
        params![name, age],
    )
    .context("failed to insert student")?;

    let id = conn.last_insert_rowid();
    Ok(Student {
        id,
        name: name.to_string(),
        age,
    })
}

/// Retrieve every student in the table's natural order.
pub fn fetch_students(conn: &Connection) -> Result<Vec<Student>> {
    let mut stmt = conn
        .prepare("SELECT id, name, age FROM students")
        .context("failed to prepare student query")?;

    let students = stmt
        .query_map([], |row| {
            Ok(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                age: row.get(2)?,
            })
        })
        .context("failed to load students")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect students")?;

    Ok(students)
}

/// Update name and age for an existing student. The returned flag reports
/// whether any row matched, so callers can tell a real update from a silent
/// no-op on a missing id.
pub fn update_student(conn: &Connection, id: i64, name: &str, age: i64) -> Result<bool> {
    let updated = conn
        .execute(
            "UPDATE students SET name = ?1, age = ?2 WHERE id = ?3",
            params![name, age, id],
        )
        .context("failed to update student")?;

    Ok(updated > 0)
}

/// Remove a student row. Enrollments cascade with the row, and deleting a
/// missing id is a no-op reported through the returned flag.
pub fn delete_student(conn: &Connection, id: i64) -> Result<bool> {
    let deleted = conn
        .execute("DELETE FROM students WHERE id = ?1", params![id])
        .context("failed to delete student")?;

    Ok(deleted > 0)
}
