use sqlx::PgConnection;

use crate::pkg::internal::adaptors::projects::spec::ProjectEntry;
use crate::prelude::Result;

pub struct ProjectSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ProjectSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ProjectSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<ProjectEntry>> {
        let rows = sqlx::query_as::<_, ProjectEntry>(
            "SELECT id, title, description, technologies, github_link, live_link, created_at
             FROM project_entries ORDER BY created_at DESC",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
