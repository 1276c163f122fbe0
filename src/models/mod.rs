// src/models/mod.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// Reference data: campsites, activities, staff
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Campsite {
    pub id: i64,
    pub name: String,
    pub total_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub area_id: i64,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub assigned_area_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// ───────────────────────────────────────
// Planning inputs
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct Preference {
    pub id: i64,
    pub campsite_id: i64,
    pub activity_id: i64,
    pub rank: i32, // lower = higher priority
}

// ───────────────────────────────────────
// Outputs
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct ScheduleEntry {
    pub id: i64,
    pub campsite_id: i64,
    pub activity_id: i64,
    pub area_id: i64,
    pub staff_id: Option<i64>, // never set by the generator
    pub day_of_week: String,
    pub time_slot: String,
    pub week_id: i64,
    pub split_group: bool,
    pub overridden: bool,
}
