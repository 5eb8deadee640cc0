//! Integration coverage for the persistence layer. Every test runs against
//! its own throwaway database file so the startup reseeding behavior can be
//! exercised without touching the real data directory.

use rusqlite::{params, Connection};
use tempfile::TempDir;

use school_registry::db::{
    add_student, assign_course, delete_student, fetch_courses, fetch_student_courses,
    fetch_students, open_at, seed_default_courses, seed_default_students, update_student,
};

const DEFAULT_ROSTER: [(&str, i64); 5] = [
    ("Alice Johansson", 19),
    ("Bob Karlsson", 20),
    ("Charlie Svensson", 18),
    ("Diana Lind", 22),
    ("Erik Bergström", 21),
];

fn fresh_registry() -> (TempDir, Connection) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let conn = open_at(&dir.path().join("school.sqlite")).expect("failed to open database");
    seed_default_courses(&conn).expect("failed to seed courses");
    seed_default_students(&conn).expect("failed to seed students");
    (dir, conn)
}

fn association_count(conn: &Connection, student_id: i64, course_id: i64) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM student_courses WHERE student_id = ?1 AND course_id = ?2",
        params![student_id, course_id],
        |row| row.get(0),
    )
    .expect("failed to count associations")
}

#[test]
fn seeding_yields_exactly_the_default_roster() {
    let (_dir, conn) = fresh_registry();

    let students = fetch_students(&conn).expect("failed to fetch students");
    assert_eq!(students.len(), 5);
    for (student, (name, age)) in students.iter().zip(DEFAULT_ROSTER) {
        assert_eq!(student.name, name);
        assert_eq!(student.age, age);
    }
    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn reseeding_discards_prior_student_state() {
    let (_dir, conn) = fresh_registry();

    add_student(&conn, "Extra Student", 33).expect("failed to add student");
    assert!(update_student(&conn, 1, "Renamed", 99).expect("failed to update student"));

    // A second startup against the same file wipes the roster and resets ids.
    seed_default_courses(&conn).expect("failed to reseed courses");
    seed_default_students(&conn).expect("failed to reseed students");

    let students = fetch_students(&conn).expect("failed to fetch students");
    assert_eq!(students.len(), 5);
    assert_eq!(students[0].id, 1);
    assert_eq!(students[0].name, "Alice Johansson");
    assert!(!students.iter().any(|s| s.name == "Extra Student"));
}

#[test]
fn course_catalogue_is_fixed_and_reseed_safe() {
    let (_dir, conn) = fresh_registry();

    seed_default_courses(&conn).expect("failed to reseed courses");

    let courses = fetch_courses(&conn).expect("failed to fetch courses");
    let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Matte", "Engelska", "Svenska", "Programmering"]);
    assert_eq!(courses.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn added_student_appears_with_a_fresh_id() {
    let (_dir, conn) = fresh_registry();

    let student = add_student(&conn, "Test Person", 30).expect("failed to add student");
    assert_eq!(student.id, 6);

    let students = fetch_students(&conn).expect("failed to fetch students");
    assert!(students
        .iter()
        .any(|s| s.id == 6 && s.name == "Test Person" && s.age == 30));
}

#[test]
fn update_changes_matching_row_and_reports_match() {
    let (_dir, conn) = fresh_registry();

    assert!(update_student(&conn, 2, "Bob Nilsson", 25).expect("failed to update student"));

    let students = fetch_students(&conn).expect("failed to fetch students");
    let bob = students.iter().find(|s| s.id == 2).expect("row 2 missing");
    assert_eq!(bob.name, "Bob Nilsson");
    assert_eq!(bob.age, 25);
}

#[test]
fn update_of_missing_id_is_a_reported_noop() {
    let (_dir, conn) = fresh_registry();

    let before = fetch_students(&conn).expect("failed to fetch students");
    assert!(!update_student(&conn, 999, "X", 1).expect("update errored"));
    let after = fetch_students(&conn).expect("failed to fetch students");

    assert_eq!(before, after);
}

#[test]
fn delete_is_idempotent() {
    let (_dir, conn) = fresh_registry();

    assert!(delete_student(&conn, 3).expect("failed to delete student"));
    assert!(!delete_student(&conn, 3).expect("second delete errored"));

    let students = fetch_students(&conn).expect("failed to fetch students");
    assert!(!students.iter().any(|s| s.id == 3));
    assert_eq!(students.len(), 4);
}

#[test]
fn deleting_a_student_removes_their_enrollments() {
    let (_dir, conn) = fresh_registry();

    assign_course(&conn, 4, 2).expect("failed to assign course");
    assert!(delete_student(&conn, 4).expect("failed to delete student"));

    assert_eq!(association_count(&conn, 4, 2), 0);
}

#[test]
fn duplicate_assignment_leaves_one_association_row() {
    let (_dir, conn) = fresh_registry();

    assign_course(&conn, 1, 2).expect("first assignment failed");
    assign_course(&conn, 1, 2).expect("repeat assignment failed");

    assert_eq!(association_count(&conn, 1, 2), 1);
}

#[test]
fn course_listing_is_a_set_independent_of_insertion_order() {
    let (_dir, conn) = fresh_registry();

    assign_course(&conn, 1, 3).expect("failed to assign course");
    assign_course(&conn, 1, 1).expect("failed to assign course");

    let mut names = fetch_student_courses(&conn, 1).expect("failed to fetch courses");
    names.sort();
    assert_eq!(names, vec!["Matte".to_string(), "Svenska".to_string()]);
}

#[test]
fn student_without_enrollments_lists_nothing() {
    let (_dir, conn) = fresh_registry();

    let names = fetch_student_courses(&conn, 2).expect("failed to fetch courses");
    assert!(names.is_empty());
}

#[test]
fn new_student_enrolled_in_programmering_end_to_end() {
    let (_dir, conn) = fresh_registry();

    let student = add_student(&conn, "Test", 30).expect("failed to add student");
    assign_course(&conn, student.id, 4).expect("failed to assign course");

    let names = fetch_student_courses(&conn, student.id).expect("failed to fetch courses");
    assert_eq!(names, vec!["Programmering".to_string()]);
}

#[test]
fn schema_setup_is_idempotent_across_reopens() {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("school.sqlite");

    let conn = open_at(&path).expect("failed to open database");
    seed_default_courses(&conn).expect("failed to seed courses");
    seed_default_students(&conn).expect("failed to seed students");
    assign_course(&conn, 5, 1).expect("failed to assign course");
    drop(conn);

    let reopened = open_at(&path).expect("failed to reopen database");
    assert_eq!(association_count(&reopened, 5, 1), 1);
    assert_eq!(
        fetch_students(&reopened).expect("failed to fetch students").len(),
        5
    );
}
