use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One logged chat exchange. Rows are appended once and never touched again.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VisitorInteraction {
    pub id: i32,
    pub visitor_id: String,
    pub query: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}
