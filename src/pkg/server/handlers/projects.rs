use axum::{extract::State, Json};

use crate::{
    pkg::{
        internal::adaptors::projects::{selectors::ProjectSelector, spec::ProjectEntry},
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProjectEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let projects = ProjectSelector::new(&mut tx).get_all().await?;
    Ok(Json(projects))
}
