use crate::config;
use crate::types::OutputFormat;
use anyhow::Result;
use owo_colors::OwoColorize;
use placekeep_store::Database;
use std::path::Path;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;

    let db_path = config::db_path(data_dir);
    let db = Database::open(&db_path)?;
    let count = db.list_places()?.len();

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "data_dir": data_dir,
                "database": db_path,
                "places": count,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            if crate::output::use_color() {
                println!("{} {}", "Database ready:".green(), db_path.display());
            } else {
                println!("Database ready: {}", db_path.display());
            }
            println!("{} place(s) saved", count);
        }
    }

    Ok(())
}
