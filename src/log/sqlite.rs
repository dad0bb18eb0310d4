use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::domain::SmsLogEntry;
use crate::log::{BoxError, BoxFuture, SmsLogStore};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS sms_logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    phone TEXT NOT NULL,
    message TEXT NOT NULL,
    response_code TEXT NULL,
    response_text TEXT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

/// [`SmsLogStore`] writing to an `sms_logs` table through a sqlx SQLite pool.
///
/// ```rust,no_run
/// # async fn run() -> Result<(), sqlx::Error> {
/// let log = msmaz::SqliteSmsLog::connect("sqlite://sms.db?mode=rwc").await?;
/// log.migrate().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SqliteSmsLog {
    pool: SqlitePool,
}

impl SqliteSmsLog {
    /// Open a pool for `url`.
    ///
    /// `sqlite::memory:` gets a single connection so every query sees the same database.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let mut options = SqlitePoolOptions::new();
        if url.contains(":memory:") {
            options = options.max_connections(1).min_connections(1);
        }
        let pool = options.connect(url).await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool; the caller owns its configuration.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `sms_logs` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn insert(&self, entry: &SmsLogEntry) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sms_logs (phone, message, response_code, response_text) VALUES (?, ?, ?, ?)",
        )
        .bind(&entry.phone)
        .bind(&entry.message)
        .bind(entry.response_code.as_deref())
        .bind(entry.response_text.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All rows in insertion order.
    pub async fn entries(&self) -> Result<Vec<SmsLogEntry>, sqlx::Error> {
        let rows: Vec<(String, String, Option<String>, Option<String>)> = sqlx::query_as(
            "SELECT phone, message, response_code, response_text FROM sms_logs ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(phone, message, response_code, response_text)| SmsLogEntry {
                    phone,
                    message,
                    response_code,
                    response_text,
                },
            )
            .collect())
    }
}

impl SmsLogStore for SqliteSmsLog {
    fn record<'a>(&'a self, entry: SmsLogEntry) -> BoxFuture<'a, Result<(), BoxError>> {
        Box::pin(async move {
            let id = self.insert(&entry).await?;
            tracing::debug!(id, phone = %entry.phone, "sms log row written");
            Ok(())
        })
    }
}
