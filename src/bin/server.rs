//! Server entry point: settings, pool, migrations, routes.

use akdemia_api::{api_routes, apply_migrations, common_routes, AppState, Settings};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("akdemia_api=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;

    apply_migrations(&pool).await?;
    let state = AppState::new(pool);

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
