use sqlx::PgConnection;

use crate::pkg::internal::adaptors::interactions::spec::VisitorInteraction;
use crate::prelude::Result;

pub struct InteractionSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> InteractionSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        InteractionSelector { pool }
    }

    pub async fn get_by_visitor(&mut self, visitor_id: &str) -> Result<Vec<VisitorInteraction>> {
        let rows = sqlx::query_as::<_, VisitorInteraction>(
            "SELECT id, visitor_id, query, response, created_at
             FROM visitor_interactions WHERE visitor_id = $1 ORDER BY created_at",
        )
        .bind(visitor_id)
        .fetch_all(&mut *self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::adaptors::interactions::mutators::InteractionMutator;
    use crate::pkg::server::state::{db_pool, GetTxn};
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    #[ignore = "requires a configured postgres instance"]
    async fn test_interaction_logged_and_listed() -> Result<()> {
        let pool = db_pool()?;
        let mut tx = pool.begin_txn().await?;
        let created = InteractionMutator::new(&mut tx)
            .create("visitor-test", "what have you built?", "a chatbot platform")
            .await?;
        let listed = InteractionSelector::new(&mut tx)
            .get_by_visitor("visitor-test")
            .await?;
        assert!(listed.iter().any(|i| i.id == created.id));
        assert_eq!(created.query, "what have you built?");
        tx.rollback().await?;
        Ok(())
    }
}
