use axum::http::StatusCode;

pub mod activities;
pub mod campsites;
pub mod health;
pub mod preferences;
pub mod reports;
pub mod schedule;
pub mod staff;

// Common error mapper
pub fn internal_error<E: std::fmt::Display>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("internal error: {e}"))
}
