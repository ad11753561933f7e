use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use placekeep_store::Database;

pub fn handle(db: &Database, format: OutputFormat) -> Result<()> {
    let places = db.list_places()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&places)?);
        }
        OutputFormat::Plain => {
            output::print_places_table(&places, output::use_color());
        }
    }

    Ok(())
}
