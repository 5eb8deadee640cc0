//! Binary entry point that glues the SQLite-backed registry to the console
//! menu. Startup mirrors the seeding order the data model depends on: open
//! the database, reinstate the course catalogue, wipe and reseed the student
//! roster, then hand control to the menu loop until the user exits.

use std::io;

use school_registry::{open_default, run_menu, seed_default_courses, seed_default_students};

/// Initialize persistence, reseed reference data, and run the menu loop.
///
/// Returning a `Result` bubbles fatal storage problems (a locked or corrupt
/// database file, an unwritable data directory) to the terminal with a
/// nonzero exit status instead of crashing silently.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conn = open_default()?;
    seed_default_courses(&conn)?;
    seed_default_students(&conn)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_menu(&conn, &mut stdin.lock(), &mut stdout.lock())
}
