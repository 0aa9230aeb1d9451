use sea_orm::Database;
use tracing::info;

use campus_tickets::config::TicketsConfig;
use campus_tickets::infra::identity::HttpIdentityProvider;
use campus_tickets::router::build_router;
use campus_tickets::state::AppState;

#[tokio::main]
async fn main() {
    campus_core::tracing::init_tracing();

    let config = TicketsConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        identity_provider: HttpIdentityProvider::new(&config.identity_provider_url),
        jwt_secret: config.jwt_secret,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.tickets_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("tickets service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
