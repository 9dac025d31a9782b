pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

use crate::error::Result;
use router::build_routes;
use state::AppState;

pub async fn listen(listen_addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!("Listening at http://{}", listener.local_addr()?);
    tokio::select! {
        r = axum::serve(listener, build_routes(state)) => {
            tracing::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
