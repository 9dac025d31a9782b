use axum::{routing::get, Router};

use super::handlers::opportunities;
use super::handlers::pages::{guides, internship_map, landing, root};
use super::handlers::probes::livez;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/landing", get(landing))
        .route("/opportunities", get(opportunities::list))
        .route("/opportunities/{opp_type}", get(opportunities::by_type))
        .route("/internships/map", get(internship_map))
        .route("/guides", get(guides))
        .route("/livez", get(livez))
        .with_state(state)
}
