//! Application state - shared across all handlers.

use std::sync::Arc;

use magdalene_core::ports::{AuthError, PasswordService};
use magdalene_core::{SubmissionService, SubmissionStores};
use magdalene_infra::{Argon2PasswordService, InMemoryStores};

#[cfg(feature = "postgres")]
use magdalene_infra::{DocumentStore, UnavailableStore, postgres_stores};

use crate::config::AppConfig;

/// Which backend the submission stores were wired to at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Postgres,
    Memory,
    Unavailable,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::Memory => "memory",
            StoreKind::Unavailable => "unavailable",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub submissions: Arc<SubmissionService>,
    pub store: StoreKind,
    #[cfg(feature = "postgres")]
    pub db: Option<DocumentStore>,
}

impl AppState {
    /// Build the state from configuration.
    ///
    /// A database that cannot be reached does not stop startup: the server
    /// keeps serving pages and every submission fails until restart.
    pub async fn new(config: &AppConfig) -> Result<Self, AuthError> {
        let passwords: Arc<dyn PasswordService> =
            Arc::new(Argon2PasswordService::new(config.password)?);

        #[cfg(feature = "postgres")]
        {
            if let Some(db_config) = &config.database {
                let state = match DocumentStore::connect(db_config).await {
                    Ok(db) => {
                        tracing::info!("Using PostgreSQL submission store");
                        let stores = postgres_stores(&db.conn);
                        let mut state = Self::with_stores(stores, passwords, StoreKind::Postgres);
                        state.db = Some(db);
                        state
                    }
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            "Failed to connect to submission store. Submissions will fail."
                        );
                        Self::with_stores(
                            UnavailableStore::stores(e.to_string()),
                            passwords,
                            StoreKind::Unavailable,
                        )
                    }
                };
                return Ok(state);
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
        }

        tracing::warn!("No database configured. Submissions are kept in memory.");
        Ok(Self::in_memory(&InMemoryStores::new(), passwords))
    }

    /// State backed by the given in-memory collections.
    pub fn in_memory(memory: &InMemoryStores, passwords: Arc<dyn PasswordService>) -> Self {
        Self::with_stores(memory.stores(), passwords, StoreKind::Memory)
    }

    pub fn with_stores(
        stores: SubmissionStores,
        passwords: Arc<dyn PasswordService>,
        store: StoreKind,
    ) -> Self {
        tracing::info!(store = store.as_str(), "Application state initialized");

        Self {
            submissions: Arc::new(SubmissionService::new(stores, passwords)),
            store,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }
}
