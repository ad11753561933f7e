use placekeep_types::{Coordinate, NewPlace, Place, PlaceId};
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::Result;

/// Decode one row of the places table into a Place.
///
/// Column positions are fixed by the SELECT lists below; a type or shape
/// mismatch surfaces as a database error instead of a half-filled record.
fn decode_place(row: &Row<'_>) -> rusqlite::Result<Place> {
    Ok(Place {
        id: PlaceId::new(row.get(0)?),
        title: row.get(1)?,
        image_uri: row.get(2)?,
        address: row.get(3)?,
        location: Coordinate {
            lat: row.get(4)?,
            lng: row.get(5)?,
        },
    })
}

pub fn insert(conn: &Connection, place: &NewPlace) -> Result<PlaceId> {
    conn.execute(
        r#"
        INSERT INTO places (title, imageUri, address, lat, lng)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            &place.title,
            &place.image_uri,
            &place.address,
            place.location.lat,
            place.location.lng
        ],
    )?;

    Ok(PlaceId::new(conn.last_insert_rowid()))
}

pub fn list(conn: &Connection) -> Result<Vec<Place>> {
    // No ORDER BY: callers get the engine's natural scan order
    let mut stmt = conn.prepare(
        r#"
        SELECT id, title, imageUri, address, lat, lng
        FROM places
        "#,
    )?;

    let places = stmt
        .query_map([], decode_place)?
        .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

    Ok(places)
}

pub fn get_by_id(conn: &Connection, id: PlaceId) -> Result<Option<Place>> {
    let result = conn
        .query_row(
            r#"
        SELECT id, title, imageUri, address, lat, lng
        FROM places
        WHERE id = ?1
        "#,
            [id.as_i64()],
            decode_place,
        )
        .optional()?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    fn sample_place() -> NewPlace {
        NewPlace {
            title: "Central Park".to_string(),
            image_uri: "file:///a.jpg".to_string(),
            address: "New York, NY".to_string(),
            location: Coordinate::new(40.785091, -73.968285),
        }
    }

    #[test]
    fn test_insert_then_get_roundtrip() -> Result<()> {
        let db = Database::open_in_memory()?;

        let id = db.insert_place(&sample_place())?;
        let place = db.get_place(id)?;

        assert_eq!(place.id, id);
        assert_eq!(place.title, "Central Park");
        assert_eq!(place.image_uri, "file:///a.jpg");
        assert_eq!(place.address, "New York, NY");
        assert_eq!(place.location.lat, 40.785091);
        assert_eq!(place.location.lng, -73.968285);

        Ok(())
    }

    #[test]
    fn test_list_empty_store() -> Result<()> {
        let db = Database::open_in_memory()?;

        let places = db.list_places()?;
        assert!(places.is_empty());

        Ok(())
    }

    #[test]
    fn test_list_returns_every_insert_with_unique_ids() -> Result<()> {
        let db = Database::open_in_memory()?;

        for i in 1..=5 {
            let place = NewPlace {
                title: format!("Place {}", i),
                image_uri: format!("file:///photo-{}.jpg", i),
                address: format!("{} Main St", i),
                location: Coordinate::new(10.0 + i as f64, 20.0 + i as f64),
            };
            db.insert_place(&place)?;
        }

        let places = db.list_places()?;
        assert_eq!(places.len(), 5);

        let mut ids: Vec<i64> = places.iter().map(|p| p.id.as_i64()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);

        Ok(())
    }

    #[test]
    fn test_quotes_in_text_fields_survive_roundtrip() -> Result<()> {
        let db = Database::open_in_memory()?;

        let place = NewPlace {
            title: "O'Brien's Cafe".to_string(),
            image_uri: "file:///o'brien.jpg".to_string(),
            address: "12 \"Quoted\" Lane; DROP TABLE places".to_string(),
            location: Coordinate::new(53.349805, -6.26031),
        };

        let id = db.insert_place(&place)?;
        let fetched = db.get_place(id)?;

        assert_eq!(fetched.title, "O'Brien's Cafe");
        assert_eq!(fetched.image_uri, "file:///o'brien.jpg");
        assert_eq!(fetched.address, "12 \"Quoted\" Lane; DROP TABLE places");

        // The table is still there and still holds exactly one row
        assert_eq!(db.list_places()?.len(), 1);

        Ok(())
    }

    #[test]
    fn test_back_to_back_inserts_get_distinct_ids() -> Result<()> {
        let db = Database::open_in_memory()?;

        let first = db.insert_place(&sample_place())?;
        let second = db.insert_place(&sample_place())?;

        assert_ne!(first, second);

        Ok(())
    }

    #[test]
    fn test_duplicate_places_are_permitted() -> Result<()> {
        let db = Database::open_in_memory()?;

        db.insert_place(&sample_place())?;
        db.insert_place(&sample_place())?;

        assert_eq!(db.list_places()?.len(), 2);

        Ok(())
    }
}
