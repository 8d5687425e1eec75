use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One portfolio project, rendered on the home page and fed into the chat context.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectEntry {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
    pub created_at: DateTime<Utc>,
}
