//! league-server: HTTP front end for a player league.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use player_league::{http, FileSystemPlayerStore, InMemoryPlayerStore};

#[derive(Debug, Parser)]
#[command(
    name = "league-server",
    version,
    about = "Serve player wins and league standings over HTTP"
)]
struct Config {
    /// Address to listen on.
    #[arg(long, env = "LEAGUE_ADDR", default_value = "0.0.0.0:5000")]
    addr: String,

    /// League database file, created if missing.
    #[arg(long, env = "LEAGUE_DATABASE", default_value = "game.db.json")]
    database: PathBuf,

    /// Keep the league in memory only; nothing is written to disk.
    #[arg(long, env = "LEAGUE_IN_MEMORY")]
    in_memory: bool,

    /// fsync the database after every recorded win.
    #[arg(long, env = "LEAGUE_SYNC")]
    sync: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();

    let result = if config.in_memory {
        log::info!("using in-memory player store");
        http::serve(InMemoryPlayerStore::new(), &config.addr).await
    } else {
        let store = match FileSystemPlayerStore::open(&config.database) {
            Ok(store) => store.with_sync(config.sync),
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        };
        log::info!("using league database {}", config.database.display());
        http::serve(store, &config.addr).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("could not serve on {}: {}", config.addr, err);
            ExitCode::FAILURE
        }
    }
}
