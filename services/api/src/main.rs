use sea_orm::Database;
use tracing::info;

use mindora_api::config::ApiConfig;
use mindora_api::infra::media::LocalMediaStore;
use mindora_api::router::build_router;
use mindora_api::state::AppState;

#[tokio::main]
async fn main() {
    mindora_core::tracing::init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        media: LocalMediaStore::new(&config.media_root, config.media_base_url.clone()),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
