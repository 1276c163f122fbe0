// src/routes/activities.rs

use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use sqlx::{query, query_as};
use crate::{AppState, models::Activity};
use super::internal_error;

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<Activity>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, Activity>(
        r#"SELECT id, name, area_id, capacity, created_at FROM public.activities ORDER BY id"#,
    )
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct CreateActivityBody {
    pub name: String,
    pub area_id: i64,
    pub capacity: i32,
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(b): Json<CreateActivityBody>,
) -> Result<Json<Activity>, (axum::http::StatusCode, String)> {
    let row = query_as::<_, Activity>(
        r#"
        INSERT INTO public.activities(name, area_id, capacity)
        VALUES ($1,$2,$3)
        RETURNING id, name, area_id, capacity, created_at
        "#,
    )
    .bind(&b.name)
    .bind(b.area_id)
    .bind(b.capacity)
    .fetch_one(&state.pool).await.map_err(internal_error)?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct PatchActivityBody {
    pub name: Option<String>,
    pub area_id: Option<i64>,
    pub capacity: Option<i32>,
}

pub async fn patch_activity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(b): Json<PatchActivityBody>,
) -> Result<Json<Activity>, (axum::http::StatusCode, String)> {
    let row = query_as::<_, Activity>(
        r#"
        UPDATE public.activities SET
          name = COALESCE($2, name),
          area_id = COALESCE($3, area_id),
          capacity = COALESCE($4, capacity)
        WHERE id = $1
        RETURNING id, name, area_id, capacity, created_at
        "#,
    )
    .bind(id).bind(b.name).bind(b.area_id).bind(b.capacity)
    .fetch_one(&state.pool).await.map_err(internal_error)?;
    Ok(Json(row))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    let res = query(r#"DELETE FROM public.activities WHERE id = $1"#)
        .bind(id)
        .execute(&state.pool).await.map_err(internal_error)?;
    Ok(Json(serde_json::json!({ "deleted": res.rows_affected() > 0 })))
}
