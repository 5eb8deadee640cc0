//! Domain models that mirror the SQLite schema. These types stay light-weight
//! data holders so the persistence layer and the menu can pass rows around
//! without extra mapping layers.

use std::fmt;

/// A student row. The `id` is assigned by the database and bubbles back
/// through update and delete flows, so we keep it on the struct even though
/// listings are the only place it is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl fmt::Display for Student {
    /// Render the listing line used by the view-all screen.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Age: {}", self.id, self.name, self.age)
    }
}

/// A course from the fixed catalogue seeded at startup. User operations never
/// create, edit, or delete courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub name: String,
}

impl fmt::Display for Course {
    /// `id: name` pairing, used when prompting for a course id.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}
