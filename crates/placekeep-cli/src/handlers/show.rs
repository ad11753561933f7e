use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use placekeep_store::Database;
use placekeep_types::PlaceId;

pub fn handle(db: &Database, id: i64, format: OutputFormat) -> Result<()> {
    let place = db.get_place(PlaceId::new(id))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&place)?);
        }
        OutputFormat::Plain => {
            output::print_place_details(&place, output::use_color());
        }
    }

    Ok(())
}
