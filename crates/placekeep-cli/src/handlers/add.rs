use crate::types::OutputFormat;
use anyhow::{Result, bail};
use placekeep_store::Database;
use placekeep_types::{Coordinate, NewPlace};

#[allow(clippy::too_many_arguments)]
pub fn handle(
    db: &Database,
    title: String,
    image: String,
    address: String,
    lat: f64,
    lng: f64,
    format: OutputFormat,
) -> Result<()> {
    // The store accepts anything non-null; the empty-string check lives here,
    // where the values are still user input
    if title.trim().is_empty() {
        bail!("--title must not be empty");
    }
    if image.trim().is_empty() {
        bail!("--image must not be empty");
    }
    if address.trim().is_empty() {
        bail!("--address must not be empty");
    }

    let place = NewPlace {
        title,
        image_uri: image,
        address,
        location: Coordinate::new(lat, lng),
    };

    let id = db.insert_place(&place)?;

    match format {
        OutputFormat::Json => {
            let saved = db.get_place(id)?;
            println!("{}", serde_json::to_string_pretty(&saved)?);
        }
        OutputFormat::Plain => {
            println!("Saved place {} ({})", id, place.title);
        }
    }

    Ok(())
}
