use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One employment record, seeded at setup time and read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeEntry {
    pub id: i32,
    pub job_title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub bullets: Vec<String>,
    pub created_at: DateTime<Utc>,
}
