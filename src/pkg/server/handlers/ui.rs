use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    pkg::{
        internal::adaptors::projects::selectors::ProjectSelector,
        server::{
            state::{AppState, GetTxn},
            uispec::{skill_categories, skill_chart, Home},
        },
    },
    prelude::Result,
};

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let projects = ProjectSelector::new(&mut tx).get_all().await?;
    tracing::debug!("rendering home with {} projects", projects.len());

    let skills = skill_chart();
    let template = Home {
        categories: skill_categories(&skills),
        skills,
        projects,
    };

    Ok(Html(template.render()?))
}
