// src/routes/schedule.rs

use axum::{extract::{Query, State}, Json};
use axum::http::StatusCode;
use serde::Deserialize;
use sqlx::{query, query_as};

use crate::models::{Activity, Campsite, Preference, ScheduleEntry};
use crate::{schedule, AppState};
use super::internal_error;

#[derive(Deserialize)]
pub struct CreateScheduleBody {
    pub week_id: i64,
}

/// POST /api/schedule
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(b): Json<CreateScheduleBody>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    // Fetch the three inputs concurrently; generation itself is sequential.
    let campsites = query_as::<_, Campsite>(
        r#"SELECT id, name, total_count, created_at FROM public.campsites ORDER BY id"#,
    )
    .fetch_all(&state.pool);
    let activities = query_as::<_, Activity>(
        r#"SELECT id, name, area_id, capacity, created_at FROM public.activities ORDER BY id"#,
    )
    .fetch_all(&state.pool);
    let prefs = query_as::<_, Preference>(
        r#"SELECT id, campsite_id, activity_id, rank FROM public.preferences ORDER BY id"#,
    )
    .fetch_all(&state.pool);

    let (campsites, activities, prefs) =
        tokio::try_join!(campsites, activities, prefs).map_err(internal_error)?;

    let entries = schedule::generate_week(b.week_id, &campsites, &activities, &prefs);

    // Row-by-row inserts with no enclosing transaction; a failure part
    // way through leaves the earlier rows committed.
    for e in &entries {
        query(
            r#"
            INSERT INTO public.schedules
                (campsite_id, activity_id, area_id, staff_id, day_of_week,
                 time_slot, week_id, split_group, overridden)
            VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)
            "#
        )
        .bind(e.campsite_id)
        .bind(e.activity_id)
        .bind(e.area_id)
        .bind(e.staff_id)
        .bind(e.day_of_week)
        .bind(e.time_slot)
        .bind(e.week_id)
        .bind(e.split_group)
        .bind(e.overridden)
        .execute(&state.pool).await.map_err(internal_error)?;
    }

    tracing::info!(week_id = b.week_id, count = entries.len(), "week scheduled");
    Ok(Json(serde_json::json!({ "status": "scheduled", "count": entries.len() })))
}

#[derive(Deserialize)]
pub struct ListQ {
    pub week_id: i64,
}

/// GET /api/schedule?week_id=
pub async fn list_schedule(
    State(state): State<AppState>,
    Query(q): Query<ListQ>,
) -> Result<Json<Vec<ScheduleEntry>>, (StatusCode, String)> {
    let rows = query_as::<_, ScheduleEntry>(
        r#"
        SELECT id, campsite_id, activity_id, area_id, staff_id, day_of_week,
               time_slot, week_id, split_group, overridden
        FROM public.schedules
        WHERE week_id = $1
        ORDER BY id
        "#,
    )
    .bind(q.week_id)
    .fetch_all(&state.pool)
    .await
    .map_err(internal_error)?;
    Ok(Json(rows))
}
