use askama::Template;
use axum::extract::State;
use axum::response::{Html, Redirect};

use crate::error::Result;
use crate::models::OpportunityType;
use crate::web::state::AppState;
use crate::web::templates::{Guides, InternshipMap, Landing};

pub async fn root() -> Redirect {
    Redirect::to("/landing")
}

pub async fn landing() -> Result<Html<String>> {
    let template = Landing {
        types: OpportunityType::ALL,
    };
    Ok(Html(template.render()?))
}

pub async fn guides() -> Result<Html<String>> {
    Ok(Html(Guides {}.render()?))
}

pub async fn internship_map(State(state): State<AppState>) -> Result<Html<String>> {
    let internships = state
        .source
        .fetch(Some(OpportunityType::Internship))
        .await?;
    tracing::debug!("map: {} internships", internships.len());

    let template = InternshipMap {
        internships: &internships,
    };
    Ok(Html(template.render()?))
}
