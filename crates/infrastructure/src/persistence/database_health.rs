//! PostGIS database health adapter
//!
//! Implements the `DatabaseHealthPort` by running `PostGIS_Version()` on a
//! pooled connection.

use application::error::ApplicationError;
use application::ports::{DatabaseHealth, DatabaseHealthPort};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use super::error::map_sqlx_error;

/// PostGIS database health adapter
#[derive(Debug, Clone)]
pub struct PostgisDatabaseHealth {
    pool: PgPool,
}

impl PostgisDatabaseHealth {
    /// Create a new database health adapter with the given connection pool
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DatabaseHealthPort for PostgisDatabaseHealth {
    #[instrument(skip(self))]
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
        let start = std::time::Instant::now();

        let result = async {
            let mut conn = self.pool.acquire().await?;
            sqlx::query_scalar::<_, String>("SELECT PostGIS_Version()")
                .fetch_one(&mut *conn)
                .await
        }
        .await;

        match result {
            Ok(version) => {
                // Health checks are bounded by the acquire timeout, so milliseconds fit in u64
                #[allow(clippy::cast_possible_truncation)]
                let response_time_ms = start.elapsed().as_millis() as u64;
                let idle = u32::try_from(self.pool.num_idle()).unwrap_or(u32::MAX);

                debug!(
                    version = %version,
                    pool_size = self.pool.size(),
                    response_time_ms = response_time_ms,
                    "Database health check passed"
                );

                Ok(DatabaseHealth::reachable(format!("PostGIS {version}"))
                    .with_pool(self.pool.size(), idle)
                    .with_response_time(response_time_ms))
            },
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                Err(map_sqlx_error(e))
            },
        }
    }
}
