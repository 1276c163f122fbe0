// src/routes/reports.rs

use axum::{extract::State, Json};
use serde::Serialize;
use sqlx::{query_as, FromRow};
use crate::AppState;
use super::internal_error;

#[derive(Serialize, FromRow)]
pub struct AreaReportRow {
    pub area_id: i64,
    pub day_of_week: String,
    pub time_slot: String,
    pub activities: Option<String>,
    pub staff: Option<String>,
}

/// GET /api/reports/area — what runs where, and who covers the area.
pub async fn area_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<AreaReportRow>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, AreaReportRow>(
        r#"
        SELECT schedules.area_id, day_of_week, time_slot,
               string_agg(DISTINCT a.name, ', ') AS activities,
               string_agg(DISTINCT s.name, ', ') AS staff
        FROM public.schedules
        LEFT JOIN public.activities a ON a.id = schedules.activity_id
        LEFT JOIN public.staff s ON s.assigned_area_id = schedules.area_id
        GROUP BY schedules.area_id, day_of_week, time_slot
        ORDER BY day_of_week, time_slot
        "#,
    )
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}

#[derive(Serialize, FromRow)]
pub struct StaffReportRow {
    pub staff_name: Option<String>,
    pub day_of_week: String,
    pub time_slot: String,
    pub activities: Option<String>,
}

/// GET /api/reports/staff — only entries with an explicit staff assignment.
pub async fn staff_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaffReportRow>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, StaffReportRow>(
        r#"
        SELECT s.name AS staff_name, day_of_week, time_slot,
               string_agg(a.name, ', ') AS activities
        FROM public.schedules
        LEFT JOIN public.staff s ON s.id = schedules.staff_id
        LEFT JOIN public.activities a ON a.id = schedules.activity_id
        WHERE schedules.staff_id IS NOT NULL
        GROUP BY s.name, day_of_week, time_slot
        ORDER BY s.name, day_of_week, time_slot
        "#,
    )
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}

#[derive(Serialize, FromRow)]
pub struct CampsiteReportRow {
    pub campsite_name: String,
    pub day_of_week: String,
    pub time_slot: String,
    pub activity: String,
}

/// GET /api/reports/campsite — one row per persisted schedule entry.
pub async fn campsite_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampsiteReportRow>>, (axum::http::StatusCode, String)> {
    let rows = query_as::<_, CampsiteReportRow>(
        r#"
        SELECT c.name AS campsite_name, day_of_week, time_slot, a.name AS activity
        FROM public.schedules
        JOIN public.campsites c ON c.id = schedules.campsite_id
        JOIN public.activities a ON a.id = schedules.activity_id
        ORDER BY c.name, day_of_week, time_slot
        "#,
    )
    .fetch_all(&state.pool).await.map_err(internal_error)?;
    Ok(Json(rows))
}
