use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    esi::{EsiClient, EsiClientConfig},
    service::eve::{
        corporation::{CorporationService, CorporationServiceConfig},
        credential::DatabaseCredentialProvider,
    },
};

/// Build the ESI client from configuration
pub fn build_esi_client(config: &Config) -> Result<EsiClient, Error> {
    let esi_client = EsiClient::new(EsiClientConfig {
        base_url: config.esi_url.clone(),
        user_agent: config.user_agent.clone(),
        timeout: config.esi_timeout,
    })?;

    Ok(esi_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the corporation service backed by ESI and the database credential provider
pub fn build_corporation_service(
    config: &Config,
    db: DatabaseConnection,
    esi_client: EsiClient,
) -> CorporationService {
    let credentials = DatabaseCredentialProvider::new(db.clone());

    CorporationService::new(
        db,
        Arc::new(esi_client),
        Arc::new(credentials),
        CorporationServiceConfig::from(config),
    )
}
