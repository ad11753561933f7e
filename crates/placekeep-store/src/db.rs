use placekeep_types::{NewPlace, Place, PlaceId};
use rusqlite::Connection;
use std::path::Path;

use crate::{Error, Result, queries, schema};

/// Handle to the place database.
///
/// Owns one long-lived connection, opened once at startup and closed on
/// drop. Every operation round-trips to SQLite; there is no in-memory
/// caching and no cross-statement transaction.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if absent) the database file and ensure the schema
    /// exists. Safe to call on an already-initialized file.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(Error::Init)?;

        let db = Self { conn };
        schema::init_schema(&db.conn).map_err(|e| match e {
            Error::Database(inner) => Error::Init(inner),
            other => other,
        })?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::Init)?;
        let db = Self { conn };
        schema::init_schema(&db.conn)?;
        Ok(db)
    }

    /// Insert a new place and return the id SQLite assigned to it.
    pub fn insert_place(&self, place: &NewPlace) -> Result<PlaceId> {
        queries::place::insert(&self.conn, place)
    }

    /// All stored places, in the engine's natural row order.
    pub fn list_places(&self) -> Result<Vec<Place>> {
        queries::place::list(&self.conn)
    }

    /// Look up a single place by id. A missing row is `Error::NotFound`,
    /// never a defaulted record.
    pub fn get_place(&self, id: PlaceId) -> Result<Place> {
        queries::place::get_by_id(&self.conn, id)?.ok_or(Error::NotFound(id))
    }
}
