//! Seed the lookup tables with reference data.
//!
//! Reads currencies, languages, time zones, and country codes from a
//! YAML file and inserts them into the lookup tables. Rows whose natural
//! key (code or name) already exists are skipped, so re-running the seed
//! is safe.

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use consumers_api::db;
use consumers_core::{CountryCode, Currency, Language, TimeZone};

// ============================================================================
// Seed File Format
// ============================================================================

/// Top-level YAML document. Every section is optional.
#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    currencies: Vec<CurrencyEntry>,
    #[serde(default)]
    languages: Vec<LanguageEntry>,
    #[serde(default)]
    time_zones: Vec<TimeZoneEntry>,
    #[serde(default)]
    country_codes: Vec<CountryCodeEntry>,
}

#[derive(Debug, Deserialize)]
struct CurrencyEntry {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct TimeZoneEntry {
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct CountryCodeEntry {
    code: String,
    country_name: String,
}

// ============================================================================
// Seeding
// ============================================================================

#[derive(Default)]
struct SeedCounts {
    inserted: usize,
    skipped: usize,
}

impl SeedCounts {
    fn record(&mut self, inserted: bool) {
        if inserted {
            self.inserted += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Insert one lookup row. Returns false when the natural key already
/// exists and the row was skipped.
async fn insert_lookup(
    pool: &PgPool,
    sql: &str,
    id: Uuid,
    first: &str,
    second: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(sql)
        .bind(id)
        .bind(first)
        .bind(second)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Seed lookup tables from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML seed file
///
/// # Errors
///
/// Returns an error if environment variables are missing, the file
/// cannot be read or parsed, or database operations fail.
pub async fn lookups(file_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("CONSUMERS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "CONSUMERS_DATABASE_URL not set")?;

    // Verify file exists
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("File not found: {file_path}").into());
    }

    info!(path = %file_path, "Loading lookup data from file");

    // Read and parse YAML before connecting to the database
    let content = tokio::fs::read_to_string(path).await?;
    let seed: SeedFile = serde_yaml::from_str(&content)?;

    info!(
        currencies = seed.currencies.len(),
        languages = seed.languages.len(),
        time_zones = seed.time_zones.len(),
        country_codes = seed.country_codes.len(),
        "Parsed seed file"
    );

    // Connect to database
    let pool = db::create_pool(&database_url).await?;
    info!("Connected to database");

    let mut currencies = SeedCounts::default();
    for entry in &seed.currencies {
        let currency = Currency::new(&entry.code, &entry.description);
        let inserted = insert_lookup(
            &pool,
            "INSERT INTO shc_consumer.tb_currencies (id, code, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (code) DO NOTHING",
            currency.id.into(),
            &currency.code,
            &currency.description,
        )
        .await?;
        currencies.record(inserted);
    }

    let mut languages = SeedCounts::default();
    for entry in &seed.languages {
        let language = Language::new(&entry.code, &entry.description);
        let inserted = insert_lookup(
            &pool,
            "INSERT INTO shc_consumer.tb_languages (id, code, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (code) DO NOTHING",
            language.id.into(),
            &language.code,
            &language.description,
        )
        .await?;
        languages.record(inserted);
    }

    let mut time_zones = SeedCounts::default();
    for entry in &seed.time_zones {
        let time_zone = TimeZone::new(&entry.name, &entry.description);
        let inserted = insert_lookup(
            &pool,
            "INSERT INTO shc_consumer.tb_time_zones (id, name, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (name) DO NOTHING",
            time_zone.id.into(),
            &time_zone.name,
            &time_zone.description,
        )
        .await?;
        time_zones.record(inserted);
    }

    let mut country_codes = SeedCounts::default();
    for entry in &seed.country_codes {
        let country_code = CountryCode::new(&entry.code, &entry.country_name);
        let inserted = insert_lookup(
            &pool,
            "INSERT INTO shc_consumer.tb_country_codes (id, code, country_name)
             VALUES ($1, $2, $3)
             ON CONFLICT (code) DO NOTHING",
            country_code.id.into(),
            &country_code.code,
            &country_code.country_name,
        )
        .await?;
        country_codes.record(inserted);
    }

    // Summary
    info!("Seeding complete!");
    info!(
        "  Currencies: {} inserted, {} skipped",
        currencies.inserted, currencies.skipped
    );
    info!(
        "  Languages: {} inserted, {} skipped",
        languages.inserted, languages.skipped
    );
    info!(
        "  Time zones: {} inserted, {} skipped",
        time_zones.inserted, time_zones.skipped
    );
    info!(
        "  Country codes: {} inserted, {} skipped",
        country_codes.inserted, country_codes.skipped
    );

    Ok(())
}
