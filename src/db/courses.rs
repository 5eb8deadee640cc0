use anyhow::{Context, Result};
use log::debug;
use rusqlite::{params, Connection};

use crate::models::Course;

/// Insert the fixed course catalogue with explicit ids. `INSERT OR IGNORE`
/// keeps the call idempotent across restarts, unlike the student reseed which
/// wipes and reinserts.
pub fn seed_default_courses(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO courses (id, name) VALUES
            (1, 'Matte'),
            (2, 'Engelska'),
            (3, 'Svenska'),
            (4, 'Programmering')",
        [],
    )
    .context("failed to insert default courses")?;

    debug!("default courses seeded");
    Ok(())
}

/// Retrieve the course catalogue ordered by id, used to render the id hint in
/// the assignment prompt.
pub fn fetch_courses(conn: &Connection) -> Result<Vec<Course>> {
    let mut stmt = conn
        .prepare("SELECT id, name FROM courses ORDER BY id")
        .context("failed to prepare course query")?;

    let courses = stmt
        .query_map([], |row| {
            Ok(Course {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .context("failed to load courses")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect courses")?;

    Ok(courses)
}

/// Link a student to a course. `INSERT OR IGNORE` makes repeated assignments
/// idempotent, leaving exactly one association row per pair.
pub fn assign_course(conn: &Connection, student_id: i64, course_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO student_courses (student_id, course_id) VALUES (?1, ?2)",
        params![student_id, course_id],
    )
    .context("failed to assign course to student")?;
    Ok(())
}

/// Names of the courses a student is enrolled in, resolved through the join
/// table. A student with no enrollments yields an empty list rather than an
/// error.
pub fn fetch_student_courses(conn: &Connection, student_id: i64) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT c.name FROM courses c
             INNER JOIN student_courses sc ON c.id = sc.course_id
             WHERE sc.student_id = ?1",
        )
        .context("failed to prepare student courses query")?;

    let mut rows = stmt
        .query(params![student_id])
        .context("failed to execute student courses query")?;

    let mut names = Vec::new();
    while let Some(row) = rows.next().context("failed to fetch course row")? {
        let name: String = row.get(0).context("failed to read course name")?;
        names.push(name);
    }

    Ok(names)
}
