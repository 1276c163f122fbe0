// src/routes/staff.rs

use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use sqlx::{query, query_as};
use crate::{AppState, models::Staff};
use super::internal_error;

pub async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<Staff>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, Staff>(
        r#"SELECT id, name, assigned_area_id, created_at FROM public.staff ORDER BY id"#,
    )
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct CreateStaffBody {
    pub name: String,
    pub assigned_area_id: Option<i64>,
}

pub async fn create_staff(
    State(state): State<AppState>,
    Json(b): Json<CreateStaffBody>,
) -> Result<Json<Staff>, (axum::http::StatusCode, String)> {
    let row = query_as::<_, Staff>(
        r#"
        INSERT INTO public.staff(name, assigned_area_id)
        VALUES ($1,$2)
        RETURNING id, name, assigned_area_id, created_at
        "#,
    )
    .bind(&b.name)
    .bind(b.assigned_area_id)
    .fetch_one(&state.pool).await.map_err(internal_error)?;
    Ok(Json(row))
}

#[derive(Deserialize)]
pub struct PatchStaffBody {
    pub name: Option<String>,
    pub assigned_area_id: Option<i64>,
}

pub async fn patch_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(b): Json<PatchStaffBody>,
) -> Result<Json<Staff>, (axum::http::StatusCode, String)> {
    let row = query_as::<_, Staff>(
        r#"
        UPDATE public.staff SET
          name = COALESCE($2, name),
          assigned_area_id = COALESCE($3, assigned_area_id)
        WHERE id = $1
        RETURNING id, name, assigned_area_id, created_at
        "#,
    )
    .bind(id).bind(b.name).bind(b.assigned_area_id)
    .fetch_one(&state.pool).await.map_err(internal_error)?;
    Ok(Json(row))
}

pub async fn delete_staff(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    let res = query(r#"DELETE FROM public.staff WHERE id = $1"#)
        .bind(id)
        .execute(&state.pool).await.map_err(internal_error)?;
    Ok(Json(serde_json::json!({ "deleted": res.rows_affected() > 0 })))
}
