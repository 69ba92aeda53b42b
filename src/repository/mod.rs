//! Link store: persistent code → URL mappings with click metadata.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::errors::Result;

mod sea_orm;

pub use sea_orm::SeaOrmRepository;

/// One code → URL mapping with its click metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Persistence operations over the `links` table.
///
/// `record_click` is the only mutation of an existing row and must be a
/// single atomic statement; it is the sole concurrency-control mechanism
/// for click counting.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Inserts a new row with zeroed counters. `DuplicateCode` when the
    /// code already exists, detected from the unique-constraint violation
    /// rather than a pre-check.
    async fn create(&self, code: &str, target_url: &str) -> Result<Link>;

    /// Full row, or `NotFound`.
    async fn get(&self, code: &str) -> Result<Link>;

    /// All rows, newest first. The filter is a case-insensitive substring
    /// match against code or target URL.
    async fn list(&self, filter: Option<&str>) -> Result<Vec<Link>>;

    /// Atomically increments `total_clicks` and sets `last_clicked` in one
    /// UPDATE. `NotFound` when no row was affected.
    async fn record_click(&self, code: &str) -> Result<()>;

    /// Removes the row. `NotFound` when no row was affected.
    async fn delete(&self, code: &str) -> Result<()>;
}
