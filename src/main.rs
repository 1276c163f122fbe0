// src/main.rs

use std::env;

use axum::{
    routing::{get, patch, post},
    Router,
};
use sqlx::{Pool, Postgres};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

mod db;
mod models;
mod routes;
mod schedule;

#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campline_api=info,tower_http=info".into()),
        )
        .init();

    // Initialize DB pool
    let pool = db::connect().await?;
    let state = AppState { pool };

    // Very permissive CORS for local dev (tighten for prod)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Root API router
    let api = Router::new()
        // health
        .route("/health", get(routes::health::health))
        // campsites
        .route(
            "/api/campsites",
            get(routes::campsites::list_campsites).post(routes::campsites::create_campsite),
        )
        .route(
            "/api/campsites/:id",
            patch(routes::campsites::patch_campsite).delete(routes::campsites::delete_campsite),
        )
        .route(
            "/api/campsites/:id/preferences",
            get(routes::preferences::list_preferences_for_campsite),
        )
        // activities
        .route(
            "/api/activities",
            get(routes::activities::list_activities).post(routes::activities::create_activity),
        )
        .route(
            "/api/activities/:id",
            patch(routes::activities::patch_activity).delete(routes::activities::delete_activity),
        )
        // staff
        .route(
            "/api/staff",
            get(routes::staff::list_staff).post(routes::staff::create_staff),
        )
        .route(
            "/api/staff/:id",
            patch(routes::staff::patch_staff).delete(routes::staff::delete_staff),
        )
        // preferences
        .route(
            "/api/preferences/bulk",
            post(routes::preferences::bulk_upsert_preferences),
        )
        // scheduling
        .route(
            "/api/schedule",
            post(routes::schedule::create_schedule).get(routes::schedule::list_schedule),
        )
        // reports
        .route("/api/reports/area", get(routes::reports::area_report))
        .route("/api/reports/staff", get(routes::reports::staff_report))
        .route("/api/reports/campsite", get(routes::reports::campsite_report))
        // state & middleware
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Port (axum 0.7 style)
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000); // default 5000

    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let api_base = format!("http://127.0.0.1:{port}");
    println!("✅ PORT={}, using {}", port, addr);
    println!("🚀 API listening on {api_base}");

    axum::serve(listener, api.into_make_service()).await?;
    Ok(())
}
