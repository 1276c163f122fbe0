// src/routes/preferences.rs

use axum::{extract::{Path, State}, Json};
use serde::Deserialize;
use sqlx::{query, query_as};
use crate::{AppState, models::Preference};
use super::internal_error;

pub async fn list_preferences_for_campsite(
    State(state): State<AppState>,
    Path(campsite_id): Path<i64>,
) -> Result<Json<Vec<Preference>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, Preference>(
        r#"
        SELECT id, campsite_id, activity_id, rank
        FROM public.preferences
        WHERE campsite_id = $1
        ORDER BY rank, id
        "#,
    )
    .bind(campsite_id)
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
pub struct PreferenceUpsertItem {
    pub campsite_id: i64,
    pub activity_id: i64,
    pub rank: i32, // lower = higher priority
}

pub async fn bulk_upsert_preferences(
    State(state): State<AppState>,
    Json(items): Json<Vec<PreferenceUpsertItem>>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    let mut tx = state.pool.begin().await.map_err(internal_error)?;

    for it in &items {
        query(
            r#"
            INSERT INTO public.preferences(campsite_id, activity_id, rank)
            VALUES ($1,$2,$3)
            ON CONFLICT (campsite_id, activity_id)
            DO UPDATE SET rank = EXCLUDED.rank
            "#
        )
        .bind(it.campsite_id)
        .bind(it.activity_id)
        .bind(it.rank)
        .execute(&mut *tx).await.map_err(internal_error)?;
    }

    tx.commit().await.map_err(internal_error)?;
    Ok(Json(serde_json::json!({"upserted": true, "count": items.len()})))
}
