use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Database Design Rationale
//
// Why a single flat table?
// - A place is a self-contained record: title, photo URI, address, coordinate
// - No relations to maintain, so no foreign keys and no cascade logic
// - Natural scan order of an unordered SELECT is all the ordering callers get
//
// Why the imageUri column is opaque TEXT?
// - The store never resolves, validates, or deletes the referenced file
// - Photo capture and file lifetime belong to whoever hands us the URI
//
// Why drop-and-recreate on version mismatch (not ALTER migrations)?
// - Places are cheap to re-add compared to migration machinery
// - Keeps init idempotent: same statement batch on every open

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS places (
            id INTEGER PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            imageUri TEXT NOT NULL,
            address TEXT NOT NULL,
            lat REAL NOT NULL,
            lng REAL NOT NULL
        );
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS places;
        "#,
    )?;
    Ok(())
}
