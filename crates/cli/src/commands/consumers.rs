//! Consumer inspection commands.

use secrecy::SecretString;
use tracing::info;

use consumers_api::db::{self, ConsumerRepository, PgConsumerRepository};

/// List every consumer, oldest first.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the query fails.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CONSUMERS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "CONSUMERS_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;
    let repository = PgConsumerRepository::new(pool);

    let consumers = repository.get_all().await?;

    if consumers.is_empty() {
        info!("No consumers found");
        return Ok(());
    }

    info!("{} consumer(s)", consumers.len());
    for consumer in &consumers {
        info!(
            id = %consumer.id,
            name = %consumer.name,
            email = %consumer.email,
            document_id = %consumer.document_id,
            created_at = %consumer.created_at,
            "consumer"
        );
    }

    Ok(())
}
