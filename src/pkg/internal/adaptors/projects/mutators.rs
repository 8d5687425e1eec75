use sqlx::PgConnection;

use crate::pkg::internal::adaptors::projects::spec::ProjectEntry;
use crate::prelude::Result;

#[derive(Debug, Clone)]
pub struct CreateProjectEntry {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: Option<String>,
    pub live_link: Option<String>,
}

pub struct ProjectMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ProjectMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ProjectMutator { pool }
    }

    pub async fn create(&mut self, entry: CreateProjectEntry) -> Result<ProjectEntry> {
        let row = sqlx::query_as::<_, ProjectEntry>(
            r#"
            INSERT INTO project_entries (title, description, technologies, github_link, live_link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, technologies, github_link, live_link, created_at
            "#,
        )
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.technologies)
        .bind(&entry.github_link)
        .bind(&entry.live_link)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
