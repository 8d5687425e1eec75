use sqlx::PgConnection;

use crate::pkg::internal::adaptors::resume::spec::ResumeEntry;
use crate::prelude::Result;

pub struct ResumeSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResumeSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResumeSelector { pool }
    }

    pub async fn get_all(&mut self) -> Result<Vec<ResumeEntry>> {
        let rows = sqlx::query_as::<_, ResumeEntry>(
            "SELECT id, job_title, company, start_date, end_date, bullets, created_at
             FROM resume_entries ORDER BY start_date DESC",
        )
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}
