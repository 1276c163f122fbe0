// src/schedule/mod.rs
//
// The week-grid generator: greedily assigns each campsite its
// top-ranked surviving activity preference for every weekday, cycling
// time slots round-robin across the whole run.

use serde::Serialize;

use crate::models::{Activity, Campsite, Preference};

pub const DAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];
pub const TIME_SLOTS: [&str; 5] = ["1pm", "2pm", "3pm", "4pm", "5pm"];

/// A generated row, not yet persisted (no id).
#[derive(Debug, Clone, Serialize)]
pub struct NewScheduleEntry {
    pub campsite_id: i64,
    pub activity_id: i64,
    pub area_id: i64,
    pub staff_id: Option<i64>,
    pub day_of_week: &'static str,
    pub time_slot: &'static str,
    pub week_id: i64,
    pub split_group: bool,
    pub overridden: bool,
}

/// Produce the full week of entries for every campsite, in emission
/// order (campsite-major, day-minor).
///
/// The slot counter rotates across the entire run; it is never reset at
/// campsite or day boundaries, so slot assignment depends only on how
/// many entries were emitted before. A campsite whose preferences all
/// point at deleted activities gets no entries and does not advance the
/// counter.
///
/// Note: the top surviving preference is re-resolved per day but never
/// consumed, so each campsite repeats the same activity Monday through
/// Friday. Known quirk of the legacy scheduler, kept on purpose until
/// product says otherwise.
pub fn generate_week(
    week_id: i64,
    campsites: &[Campsite],
    activities: &[Activity],
    preferences: &[Preference],
) -> Vec<NewScheduleEntry> {
    let mut entries = Vec::new();
    let mut time_index: usize = 0;

    for site in campsites {
        let mut site_prefs: Vec<&Preference> = preferences
            .iter()
            .filter(|p| p.campsite_id == site.id)
            .collect();
        // Stable sort: equal ranks keep their input order.
        site_prefs.sort_by_key(|p| p.rank);

        for day in DAYS {
            // First preference whose activity still exists wins.
            let Some(activity) = site_prefs
                .iter()
                .find_map(|p| activities.iter().find(|a| a.id == p.activity_id))
            else {
                continue;
            };

            entries.push(NewScheduleEntry {
                campsite_id: site.id,
                activity_id: activity.id,
                area_id: activity.area_id,
                staff_id: None,
                day_of_week: day,
                time_slot: TIME_SLOTS[time_index % TIME_SLOTS.len()],
                week_id,
                split_group: site.total_count > activity.capacity,
                overridden: false,
            });
            time_index += 1;
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn campsite(id: i64, total_count: i32) -> Campsite {
        Campsite {
            id,
            name: format!("Campsite {id}"),
            total_count,
            created_at: Utc::now(),
        }
    }

    fn activity(id: i64, area_id: i64, capacity: i32) -> Activity {
        Activity {
            id,
            name: format!("Activity {id}"),
            area_id,
            capacity,
            created_at: Utc::now(),
        }
    }

    fn pref(id: i64, campsite_id: i64, activity_id: i64, rank: i32) -> Preference {
        Preference {
            id,
            campsite_id,
            activity_id,
            rank,
        }
    }

    #[test]
    fn campsite_without_preferences_emits_nothing() {
        let campsites = vec![campsite(1, 10)];
        let activities = vec![activity(100, 1, 8)];

        let entries = generate_week(7, &campsites, &activities, &[]);
        assert!(entries.is_empty());
    }

    #[test]
    fn campsite_with_a_valid_preference_fills_all_five_days() {
        let campsites = vec![campsite(1, 10)];
        let activities = vec![activity(100, 1, 20)];
        let prefs = vec![pref(1, 1, 100, 1)];

        let entries = generate_week(7, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 5);

        let days: Vec<&str> = entries.iter().map(|e| e.day_of_week).collect();
        assert_eq!(days, DAYS.to_vec());

        for e in &entries {
            assert_eq!(e.campsite_id, 1);
            assert_eq!(e.activity_id, 100);
            assert_eq!(e.area_id, 1);
            assert_eq!(e.staff_id, None);
            assert_eq!(e.week_id, 7);
            assert!(!e.overridden);
        }
    }

    #[test]
    fn top_ranked_preference_is_reused_every_day() {
        let campsites = vec![campsite(1, 4)];
        let activities = vec![activity(100, 1, 20), activity(200, 2, 20)];
        // Rank 1 beats rank 2; rank 2 should never be scheduled.
        let prefs = vec![pref(1, 1, 200, 2), pref(2, 1, 100, 1)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.activity_id == 100));
    }

    #[test]
    fn deleted_activity_falls_through_to_next_preference() {
        let campsites = vec![campsite(1, 4)];
        // Activity 100 no longer exists; 200 does.
        let activities = vec![activity(200, 2, 20)];
        let prefs = vec![pref(1, 1, 100, 1), pref(2, 1, 200, 2)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.activity_id == 200));
        assert!(entries.iter().all(|e| e.area_id == 2));
    }

    #[test]
    fn all_preferences_dangling_emits_nothing() {
        let campsites = vec![campsite(1, 4)];
        let prefs = vec![pref(1, 1, 100, 1), pref(2, 1, 300, 2)];

        let entries = generate_week(1, &campsites, &[], &prefs);
        assert!(entries.is_empty());
    }

    #[test]
    fn time_slots_rotate_across_campsite_boundaries() {
        let campsites = vec![campsite(1, 4), campsite(2, 4), campsite(3, 4)];
        let activities = vec![activity(100, 1, 20)];
        let prefs = vec![pref(1, 1, 100, 1), pref(2, 2, 100, 1), pref(3, 3, 100, 1)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 15);

        // One global counter: entry i always lands in slot i mod 5,
        // regardless of which campsite or day it belongs to.
        for (i, e) in entries.iter().enumerate() {
            assert_eq!(e.time_slot, TIME_SLOTS[i % TIME_SLOTS.len()], "entry {i}");
        }
    }

    #[test]
    fn skipped_campsite_does_not_advance_the_slot_counter() {
        // Campsite 2 has only a dangling preference, so campsite 3
        // resumes the rotation right where campsite 1 left off.
        let campsites = vec![campsite(1, 4), campsite(2, 4), campsite(3, 4)];
        let activities = vec![activity(100, 1, 20)];
        let prefs = vec![pref(1, 1, 100, 1), pref(2, 2, 999, 1), pref(3, 3, 100, 1)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 10);
        for (i, e) in entries.iter().enumerate() {
            assert_eq!(e.time_slot, TIME_SLOTS[i % TIME_SLOTS.len()]);
        }
    }

    #[test]
    fn split_group_set_iff_group_exceeds_capacity() {
        let campsites = vec![campsite(1, 10), campsite(2, 8), campsite(3, 3)];
        let activities = vec![activity(100, 1, 8)];
        let prefs = vec![pref(1, 1, 100, 1), pref(2, 2, 100, 1), pref(3, 3, 100, 1)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        // 10 > 8 splits, 8 > 8 does not, 3 > 8 does not.
        assert!(entries[0..5].iter().all(|e| e.split_group));
        assert!(entries[5..10].iter().all(|e| !e.split_group));
        assert!(entries[10..15].iter().all(|e| !e.split_group));
    }

    #[test]
    fn two_campsite_week_matches_expected_grid() {
        // Campsite A (10 campers) wants activity X (capacity 8, area 1);
        // campsite B (3 campers) wants activity Y (capacity 5, area 2).
        let campsites = vec![campsite(1, 10), campsite(2, 3)];
        let activities = vec![activity(10, 1, 8), activity(20, 2, 5)];
        let prefs = vec![pref(1, 1, 10, 1), pref(2, 2, 20, 1)];

        let entries = generate_week(42, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 10);

        for (i, e) in entries[0..5].iter().enumerate() {
            assert_eq!(e.campsite_id, 1);
            assert_eq!(e.activity_id, 10);
            assert_eq!(e.area_id, 1);
            assert!(e.split_group);
            assert_eq!(e.day_of_week, DAYS[i]);
            assert_eq!(e.time_slot, TIME_SLOTS[i]);
        }
        // Counter keeps running: 5 mod 5 = 0, so B starts back at 1pm.
        for (i, e) in entries[5..10].iter().enumerate() {
            assert_eq!(e.campsite_id, 2);
            assert_eq!(e.activity_id, 20);
            assert_eq!(e.area_id, 2);
            assert!(!e.split_group);
            assert_eq!(e.day_of_week, DAYS[i]);
            assert_eq!(e.time_slot, TIME_SLOTS[i]);
        }
    }

    #[test]
    fn equal_ranks_keep_input_order() {
        let campsites = vec![campsite(1, 4)];
        let activities = vec![activity(100, 1, 20), activity(200, 2, 20)];
        // Tie on rank: the earlier row wins.
        let prefs = vec![pref(1, 1, 200, 1), pref(2, 1, 100, 1)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        assert!(entries.iter().all(|e| e.activity_id == 200));
    }

    #[test]
    fn other_campsites_preferences_are_ignored() {
        let campsites = vec![campsite(1, 4)];
        let activities = vec![activity(100, 1, 20), activity(200, 2, 20)];
        // Campsite 99's rank-1 row must not leak into campsite 1.
        let prefs = vec![pref(1, 99, 200, 1), pref(2, 1, 100, 3)];

        let entries = generate_week(1, &campsites, &activities, &prefs);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.activity_id == 100));
    }
}
