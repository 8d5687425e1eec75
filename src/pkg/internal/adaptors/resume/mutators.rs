use chrono::NaiveDate;
use sqlx::PgConnection;

use crate::pkg::internal::adaptors::resume::spec::ResumeEntry;
use crate::prelude::Result;

#[derive(Debug, Clone)]
pub struct CreateResumeEntry {
    pub job_title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub bullets: Vec<String>,
}

pub struct ResumeMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ResumeMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ResumeMutator { pool }
    }

    pub async fn create(&mut self, entry: CreateResumeEntry) -> Result<ResumeEntry> {
        let row = sqlx::query_as::<_, ResumeEntry>(
            r#"
            INSERT INTO resume_entries (job_title, company, start_date, end_date, bullets)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, job_title, company, start_date, end_date, bullets, created_at
            "#,
        )
        .bind(&entry.job_title)
        .bind(&entry.company)
        .bind(entry.start_date)
        .bind(entry.end_date)
        .bind(&entry.bullets)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
