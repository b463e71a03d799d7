//! Seed-admin command - ensures the built-in administrator exists.

use crate::config::{Config, BYPASS_EMPLOYEE_ID, DEFAULT_USER_PASSWORD};
use crate::errors::AppResult;
use crate::services::{ServiceContainer, Services};

pub async fn execute(config: Config) -> AppResult<()> {
    let db = super::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config);

    if services.users().seed_admin().await? {
        tracing::info!(
            employee_id = BYPASS_EMPLOYEE_ID,
            "Administrator created with the default password {}",
            DEFAULT_USER_PASSWORD
        );
    } else {
        tracing::info!(employee_id = BYPASS_EMPLOYEE_ID, "Administrator already exists");
    }

    Ok(())
}
