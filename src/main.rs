use database::DatabaseLoader;
use env_logger::Env;
use log::info;
use nba_core::utils::TimeEstimation;
use web::{GameAppData, NbaLegendsServer, ServerConfig};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);
    let database = database?;

    info!("database loaded: {} ms, {} players", estimated, database.players.len());

    let config = ServerConfig::from_env();

    info!(
        "player generation: {}, player images: {}",
        config.generate_missing_players, config.player_images
    );

    let data = GameAppData::new(database, config);

    NbaLegendsServer::new(data).run().await?;

    Ok(())
}
