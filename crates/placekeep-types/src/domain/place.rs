use serde::{Deserialize, Serialize};
use std::fmt;

/// Row identifier assigned by the store on insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(i64);

impl PlaceId {
    /// Create a new PlaceId from a raw rowid
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the id as a raw i64
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for PlaceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<PlaceId> for i64 {
    fn from(id: PlaceId) -> Self {
        id.0
    }
}

/// Geographic coordinate pair. No range validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// A place as constructed by a caller, before it has been persisted.
///
/// The store assigns the id at insertion time; everything else is
/// caller-supplied. `image_uri` is opaque to the store: no file-existence
/// check, no ownership of the referenced file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlace {
    /// User-supplied display title.
    pub title: String,
    /// Filesystem or content URI of the associated photo.
    pub image_uri: String,
    /// Human-readable address, typically reverse-geocoded upstream.
    pub address: String,
    /// Picked or located coordinate.
    pub location: Coordinate,
}

/// A persisted place as reconstructed from a stored row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub title: String,
    pub image_uri: String,
    pub address: String,
    pub location: Coordinate,
}
