use askama::Template;
use axum::extract::{Path, State};
use axum::response::Html;

use crate::error::Result;
use crate::filter::parse_type;
use crate::models::{Opportunity, OpportunityType};
use crate::web::state::AppState;
use crate::web::templates::Listing;

pub async fn list(State(state): State<AppState>) -> Result<Html<String>> {
    let opportunities = state.source.fetch(None).await?;
    tracing::debug!("/opportunities: {} records", opportunities.len());
    render(&opportunities, None)
}

pub async fn by_type(
    State(state): State<AppState>,
    Path(opp_type): Path<String>,
) -> Result<Html<String>> {
    let opp_type = parse_type(&opp_type)?;
    let opportunities = state.source.fetch(Some(opp_type)).await?;
    tracing::debug!(
        "/opportunities/{}: {} records",
        opp_type.as_str(),
        opportunities.len()
    );
    render(&opportunities, Some(opp_type))
}

fn render(opportunities: &[Opportunity], opp_type: Option<OpportunityType>) -> Result<Html<String>> {
    let template = Listing {
        opportunities,
        opp_type,
        types: OpportunityType::ALL,
    };
    Ok(Html(template.render()?))
}
