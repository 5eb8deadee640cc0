//! Line-based console menu. Each iteration renders the option list, reads one
//! line, and dispatches on an exact string match. Parse failures on prompted
//! values abort the current operation with a message and fall back to the
//! menu; database errors bubble out and terminate the program.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rusqlite::Connection;
use thiserror::Error;

use crate::db::{
    add_student, assign_course, delete_student, fetch_courses, fetch_student_courses,
    fetch_students, update_student,
};

/// Closed set of menu commands. Mapping input text onto a variant up front
/// means every dispatch arm is checked by the compiler instead of hiding in a
/// default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ViewAllStudents,
    UpdateStudent,
    DeleteStudent,
    AssignCourse,
    ShowStudentCourses,
    Exit,
}

impl MenuChoice {
    /// Map one input line onto a command by exact string match. Anything else
    /// is reported as an invalid choice by the loop.
    pub fn parse(line: &str) -> Option<Self> {
        match line {
            "1" => Some(Self::AddStudent),
            "2" => Some(Self::ViewAllStudents),
            "3" => Some(Self::UpdateStudent),
            "4" => Some(Self::DeleteStudent),
            "5" => Some(Self::AssignCourse),
            "6" => Some(Self::ShowStudentCourses),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parse failures for prompted values. Each variant carries the exact message
/// shown to the user before the operation is abandoned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid age. Try again.")]
    InvalidAge,
    #[error("Invalid ID. Try again.")]
    InvalidId,
    #[error("Invalid student ID. Try again.")]
    InvalidStudentId,
    #[error("Invalid course ID. Try again.")]
    InvalidCourseId,
}

/// Drive the menu until the user picks exit. The loop is generic over the
/// reader and writer so tests can script a whole session against an in-memory
/// buffer; `main.rs` passes locked stdin and stdout.
pub fn run_menu<R: BufRead, W: Write>(
    conn: &Connection,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        render_menu(output)?;

        // End of input behaves like picking exit, so piped sessions finish
        // cleanly instead of spinning on an empty reader.
        let Some(line) = read_line(input)? else {
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::AddStudent) => add_flow(conn, input, output)?,
            Some(MenuChoice::ViewAllStudents) => view_flow(conn, output)?,
            Some(MenuChoice::UpdateStudent) => update_flow(conn, input, output)?,
            Some(MenuChoice::DeleteStudent) => delete_flow(conn, input, output)?,
            Some(MenuChoice::AssignCourse) => assign_flow(conn, input, output)?,
            Some(MenuChoice::ShowStudentCourses) => courses_flow(conn, input, output)?,
            Some(MenuChoice::Exit) => return Ok(()),
            None => writeln!(output, "Invalid choice. Try again.")?,
        }
    }
}

/// Print the option list followed by the selection prompt.
fn render_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "\n--- Menu ---")?;
    writeln!(output, "1. Add a student")?;
    writeln!(output, "2. View all students")?;
    writeln!(output, "3. Update a student")?;
    writeln!(output, "4. Delete a student")?;
    writeln!(output, "5. Assign a course to a student")?;
    writeln!(output, "6. View student courses")?;
    writeln!(output, "0. Exit")?;
    write!(output, "Select an option: ")?;
    output.flush().context("failed to flush menu output")?;
    Ok(())
}

fn add_flow<R: BufRead, W: Write>(conn: &Connection, input: &mut R, output: &mut W) -> Result<()> {
    let name = prompt(input, output, "Enter name: ")?;
    let Some(age) = prompt_i64(input, output, "Enter age: ")? else {
        return abort(output, InputError::InvalidAge);
    };

    let student = add_student(conn, &name, age)?;
    writeln!(output, "Student '{}' added.\n", student.name)?;
    Ok(())
}

fn view_flow<W: Write>(conn: &Connection, output: &mut W) -> Result<()> {
    writeln!(output, "All students:")?;
    for student in fetch_students(conn)? {
        writeln!(output, "{student}")?;
    }
    writeln!(output)?;
    Ok(())
}

fn update_flow<R: BufRead, W: Write>(
    conn: &Connection,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt_i64(input, output, "Enter student ID to update: ")? else {
        return abort(output, InputError::InvalidId);
    };
    let name = prompt(input, output, "Enter new name: ")?;
    let Some(age) = prompt_i64(input, output, "Enter new age: ")? else {
        return abort(output, InputError::InvalidAge);
    };

    // Success is reported even when the id matched nothing; the matched flag
    // exists for callers that care, not for this screen.
    update_student(conn, id, &name, age)?;
    writeln!(output, "Student ID {id} updated.\n")?;
    Ok(())
}

fn delete_flow<R: BufRead, W: Write>(
    conn: &Connection,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt_i64(input, output, "Enter student ID to delete: ")? else {
        return abort(output, InputError::InvalidId);
    };

    delete_student(conn, id)?;
    writeln!(output, "Student ID {id} deleted.\n")?;
    Ok(())
}

fn assign_flow<R: BufRead, W: Write>(
    conn: &Connection,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(student_id) = prompt_i64(input, output, "Enter student ID: ")? else {
        return abort(output, InputError::InvalidStudentId);
    };

    let hint = fetch_courses(conn)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let label = format!("Enter course ID ({hint}): ");
    let Some(course_id) = prompt_i64(input, output, &label)? else {
        return abort(output, InputError::InvalidCourseId);
    };

    assign_course(conn, student_id, course_id)?;
    writeln!(
        output,
        "Assigned course ID {course_id} to student ID {student_id}.\n"
    )?;
    Ok(())
}

fn courses_flow<R: BufRead, W: Write>(
    conn: &Connection,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(student_id) = prompt_i64(input, output, "Enter student ID: ")? else {
        return abort(output, InputError::InvalidStudentId);
    };

    writeln!(output, "Courses for student ID {student_id}:")?;
    for name in fetch_student_courses(conn, student_id)? {
        writeln!(output, "- {name}")?;
    }
    writeln!(output)?;
    Ok(())
}

/// Print the parse failure message and return to the menu. Kept as a helper
/// so every flow abandons an operation the same way.
fn abort<W: Write>(output: &mut W, err: InputError) -> Result<()> {
    writeln!(output, "{err}")?;
    Ok(())
}

/// Show a prompt label and read the reply. End of input yields an empty
/// string, which downstream parsing then rejects.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush().context("failed to flush prompt")?;
    Ok(read_line(input)?.unwrap_or_default())
}

/// Prompt for an integer. `None` signals that the reply did not parse; which
/// message that turns into depends on the field being asked for.
fn prompt_i64<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<i64>> {
    Ok(prompt(input, output, label)?.parse().ok())
}

/// Read one line, stripping the trailing newline. Returns `None` once the
/// reader is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
