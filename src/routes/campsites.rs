// src/routes/campsites.rs

use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use sqlx::{query, query_as};
use crate::{AppState, models::Campsite};
use super::internal_error;

pub async fn list_campsites(
    State(state): State<AppState>,
) -> Result<Json<Vec<Campsite>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, Campsite>(
        r#"SELECT id, name, total_count, created_at FROM public.campsites ORDER BY id"#,
    )
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct CreateCampsiteBody {
    pub name: String,
    pub total_count: i32,
}

pub async fn create_campsite(
    State(state): State<AppState>,
    Json(b): Json<CreateCampsiteBody>,
) -> Result<Json<Campsite>, (axum::http::StatusCode, String)> {
    let row = query_as::<_, Campsite>(
        r#"
        INSERT INTO public.campsites(name, total_count)
        VALUES ($1,$2)
        RETURNING id, name, total_count, created_at
        "#,
    )
    .bind(&b.name)
    .bind(b.total_count)
    .fetch_one(&state.pool).await.map_err(internal_error)?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct PatchCampsiteBody {
    pub name: Option<String>,
    pub total_count: Option<i32>,
}

pub async fn patch_campsite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(b): Json<PatchCampsiteBody>,
) -> Result<Json<Campsite>, (axum::http::StatusCode, String)> {
    let row = query_as::<_, Campsite>(
        r#"
        UPDATE public.campsites SET
          name = COALESCE($2, name),
          total_count = COALESCE($3, total_count)
        WHERE id = $1
        RETURNING id, name, total_count, created_at
        "#,
    )
    .bind(id).bind(b.name).bind(b.total_count)
    .fetch_one(&state.pool).await.map_err(internal_error)?;
    Ok(Json(row))
}

pub async fn delete_campsite(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    let res = query(r#"DELETE FROM public.campsites WHERE id = $1"#)
        .bind(id)
        .execute(&state.pool).await.map_err(internal_error)?;
    Ok(Json(serde_json::json!({ "deleted": res.rows_affected() > 0 })))
}
