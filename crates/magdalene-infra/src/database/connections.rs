use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr};

/// Connection settings for the submission store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Shared connection pool to the submission store.
///
/// Opened once at startup and handed to every repository.
#[cfg(feature = "postgres")]
#[derive(Clone)]
pub struct DocumentStore {
    pub conn: DbConn,
}

#[cfg(feature = "postgres")]
impl DocumentStore {
    /// Open the pool and make sure the server answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to submission store...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let conn = Database::connect(opts).await?;
        conn.execute_unprepared("SELECT 1").await?;

        tracing::info!(
            pool = config.max_connections,
            "Submission store connected"
        );

        Ok(Self { conn })
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await
    }
}
