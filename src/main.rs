use rink_core::utils::TimeEstimation;
use database::DatabaseSeeder;
use env_logger::Env;
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;
use web::{AppData, LeagueServer};

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let (database, estimated) = TimeEstimation::estimate(DatabaseSeeder::seed);

    info!("database seeded: {} ms", estimated);

    let data = AppData {
        data: Arc::new(RwLock::new(database)),
    };

    LeagueServer::new(data).run().await;
}
