use std::time::Duration;

use sqlx::PgPool;

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Per-repository settings fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryConfig {
    /// Upper bound on a single storage round-trip, regardless of the caller's deadline.
    pub query_timeout: Duration,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

#[derive(Clone)]
pub struct SqlxExperienceRepo {
    pub pool: PgPool,
    pub config: RepositoryConfig,
}
