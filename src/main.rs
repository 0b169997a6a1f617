use esi_cache::server::{
    config::Config,
    scheduler::{config::ScheduleConfig, Scheduler},
    startup,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), esi_cache::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let esi_client = startup::build_esi_client(&config)?;
    let service = startup::build_corporation_service(&config, db, esi_client);

    let mut scheduler = Scheduler::new(service).await?;
    scheduler.start(&ScheduleConfig::from(&config)).await?;

    tracing::info!(
        refresh_cron = %config.refresh_cron,
        credential_validation_cron = %config.credential_validation_cron,
        "Scheduler started"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
    scheduler.shutdown().await?;

    Ok(())
}
