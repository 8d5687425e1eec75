use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    pkg::{
        internal::{
            adaptors::{
                interactions::mutators::InteractionMutator,
                projects::selectors::ProjectSelector, resume::selectors::ResumeSelector,
            },
            ai::{context::build_context, generate::GenerateOps},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::{Error, Result},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatInput {
    pub message: String,
    #[serde(default)]
    pub visitor_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    pub visitor_id: String,
}

// Rejected before spending a completion call.
fn reject_blank(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(Error::EmptyMessage);
    }
    Ok(())
}

pub async fn converse(
    State(state): State<AppState>,
    Json(input): Json<ChatInput>,
) -> Result<Json<ChatReply>> {
    reject_blank(&input.message)?;

    let mut tx = state.db_pool.begin_txn().await?;
    let resume = ResumeSelector::new(&mut tx).get_all().await?;
    let projects = ProjectSelector::new(&mut tx).get_all().await?;
    let context = build_context(&resume, &projects);
    tracing::debug!("assembled chat context of {} chars", context.len());

    let response = state
        .ai_client
        .answer_visitor(&context, &input.message)
        .await?;

    let visitor_id = input
        .visitor_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    InteractionMutator::new(&mut tx)
        .create(&visitor_id, &input.message, &response)
        .await?;
    tx.commit().await?;

    Ok(Json(ChatReply {
        response,
        visitor_id,
    }))
}
