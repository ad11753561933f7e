use super::args::{Cli, Commands, PlaceCommand};
use super::handlers;
use crate::config;
use anyhow::Result;
use placekeep_store::Database;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;

    match cli.command {
        Commands::Init => handlers::init::handle(&data_dir, cli.format),

        Commands::Place { command } => {
            std::fs::create_dir_all(&data_dir)?;
            let db = Database::open(&config::db_path(&data_dir))?;

            match command {
                PlaceCommand::Add {
                    title,
                    image,
                    address,
                    lat,
                    lng,
                } => handlers::add::handle(&db, title, image, address, lat, lng, cli.format),

                PlaceCommand::List => handlers::list::handle(&db, cli.format),

                PlaceCommand::Show { id } => handlers::show::handle(&db, id, cli.format),
            }
        }
    }
}
