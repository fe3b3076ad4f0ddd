use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use glorieta_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let public_api = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/auth/logout", post(routes::auth::logout))
        .route(
            "/api/candidates",
            post(routes::candidate_routes::create_candidate),
        )
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::RpsLimiter::new(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route(
            "/api/candidates",
            get(routes::candidate_routes::list_candidates),
        )
        .route(
            "/api/candidates/export",
            get(routes::export::export_candidates),
        )
        .route(
            "/api/candidates/:id",
            get(routes::candidate_routes::get_candidate)
                .patch(routes::candidate_routes::update_candidate),
        )
        .route(
            "/api/interviews",
            get(routes::interview_routes::list_interviews)
                .post(routes::interview_routes::create_interview),
        )
        .route(
            "/api/incidents",
            get(routes::incident_routes::list_incidents)
                .post(routes::incident_routes::create_incident),
        )
        .layer(axum::middleware::from_fn_with_state(
            app_state.session_service.clone(),
            middleware::auth::require_admin_session,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::RpsLimiter::new(config.admin_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let app = public_api
        .merge(admin_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
