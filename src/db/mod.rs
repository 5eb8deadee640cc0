//! Persistence module split across logical submodules. Every function takes
//! the connection as an explicit argument instead of reaching for shared
//! state, and every user-supplied value flows through bound parameters rather
//! than being spliced into SQL text.

mod connection;
mod courses;
mod students;

pub use connection::{open_at, open_default};
pub use courses::{assign_course, fetch_courses, fetch_student_courses, seed_default_courses};
pub use students::{
    add_student, delete_student, fetch_students, seed_default_students, update_student,
};
