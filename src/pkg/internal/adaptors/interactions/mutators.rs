use sqlx::PgConnection;

use crate::pkg::internal::adaptors::interactions::spec::VisitorInteraction;
use crate::prelude::Result;

pub struct InteractionMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> InteractionMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        InteractionMutator { pool }
    }

    pub async fn create(
        &mut self,
        visitor_id: &str,
        query: &str,
        response: &str,
    ) -> Result<VisitorInteraction> {
        let row = sqlx::query_as::<_, VisitorInteraction>(
            r#"
            INSERT INTO visitor_interactions (visitor_id, query, response)
            VALUES ($1, $2, $3)
            RETURNING id, visitor_id, query, response, created_at
            "#,
        )
        .bind(visitor_id)
        .bind(query)
        .bind(response)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
