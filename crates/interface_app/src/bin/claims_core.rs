//! Claims core bootstrap binary
//!
//! Opens (or creates) the database, applies the schema, seeds the demo
//! accounts into an empty store and reports readiness. Front ends link
//! against the library crate; this binary exists for first-run setup and
//! smoke checks.
//!
//! Environment variables, all optional:
//!
//! * `CLAIMS_DATABASE_PATH` - SQLite file (default: claims.db)
//! * `CLAIMS_AUDIT_LOG_PATH` - audit trail file (default: audit.log)
//! * `CLAIMS_LOG_LEVEL` - trace, debug, info, warn, error (default: info)

use anyhow::Context;

use infra_db::{create_pool, DatabaseConfig, UserRepository};
use interface_app::telemetry::init_tracing;
use interface_app::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    init_tracing(&config.log_level);

    tracing::info!(database = %config.database_path, "starting claims core");

    let pool = create_pool(DatabaseConfig::new(&config.database_path))
        .await
        .context("opening database")?;
    infra_db::ensure_schema(&pool)
        .await
        .context("applying schema")?;

    let users = UserRepository::new(pool);
    if users.seed_demo_accounts().await.context("seeding demo accounts")? {
        tracing::info!("seeded demo accounts");
    }

    let accounts = users.count().await.context("counting accounts")?;
    tracing::info!(accounts, audit_log = %config.audit_log_path, "claims core ready");
    Ok(())
}
