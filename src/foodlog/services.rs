use time::{OffsetDateTime, UtcOffset};

use super::dto::{DayTotals, LoggedEntry};
use crate::profile::NutritionTargets;

/// Append-only (with deletion) collection of logged foods for the current
/// session. The whole collection is persisted as a unit after every mutation.
#[derive(Debug, Default)]
pub struct FoodLog {
    entries: Vec<LoggedEntry>,
}

impl FoodLog {
    pub fn from_entries(entries: Vec<LoggedEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[LoggedEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert at the end, assigning a fresh id when the given one is unset
    /// or collides. No deduplication. Returns the entry's id.
    pub fn append(&mut self, mut entry: LoggedEntry) -> i64 {
        if entry.id == 0 || self.entries.iter().any(|e| e.id == entry.id) {
            entry.id = self.next_id();
        }
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Delete by id; a missing id is a no-op, not an error.
    pub fn remove(&mut self, id: i64) -> bool {
        self.take(id).is_some()
    }

    /// Remove and hand back the entry with its position, so a failed persist
    /// can put it back where it was.
    pub(super) fn take(&mut self, id: i64) -> Option<(usize, LoggedEntry)> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some((idx, self.entries.remove(idx)))
    }

    pub(super) fn restore(&mut self, idx: usize, entry: LoggedEntry) {
        let idx = idx.min(self.entries.len());
        self.entries.insert(idx, entry);
    }

    pub fn entries_for_date(&self, date: &str) -> Vec<&LoggedEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    pub fn totals_for_date(&self, date: &str) -> DayTotals {
        self.entries_for_date(date)
            .into_iter()
            .fold(DayTotals::default(), |acc, e| DayTotals {
                calories: acc.calories + e.calories,
                protein: acc.protein + e.protein,
                fats: acc.fats + e.fats,
            })
    }

    fn next_id(&self) -> i64 {
        let now = epoch_millis();
        let last = self.entries.iter().map(|e| e.id).max().unwrap_or(0);
        now.max(last + 1)
    }
}

fn epoch_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

fn now_local() -> OffsetDateTime {
    // Local offset lookup can fail in multi-threaded processes; UTC is the
    // accepted degradation.
    UtcOffset::current_local_offset()
        .map(|off| OffsetDateTime::now_utc().to_offset(off))
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Local calendar date, `YYYY-MM-DD`.
pub fn today() -> String {
    let d = now_local().date();
    format!("{:04}-{:02}-{:02}", d.year(), u8::from(d.month()), d.day())
}

/// Display timestamp, `HH:MM`.
pub fn clock_time() -> String {
    let t = now_local().time();
    format!("{:02}:{:02}", t.hour(), t.minute())
}

/// Dashboard nudges derived from the day's totals against the targets.
pub fn notifications(totals: &DayTotals, targets: &NutritionTargets, log_empty: bool) -> Vec<String> {
    let mut notes = Vec::new();
    if totals.calories < targets.calories - 200 {
        notes.push("🔥 You are under your calorie goal".to_string());
    }
    if (totals.protein as f64) < targets.protein as f64 * 0.7 {
        notes.push("🍗 Protein intake is low today".to_string());
    }
    if log_empty {
        notes.push("⏰ No food logged today".to_string());
    }
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foodlog::dto::EntryType;

    fn entry(id: i64, date: &str, calories: i64, protein: i64, fats: i64) -> LoggedEntry {
        LoggedEntry {
            id,
            name: "Dal".into(),
            calories,
            protein,
            fats,
            fiber: 0,
            servings: 1.0,
            unit: "bowl".into(),
            time: "12:30".into(),
            date: date.into(),
            entry_type: EntryType::Scan,
            image: None,
        }
    }

    #[test]
    fn append_assigns_fresh_monotonic_ids() {
        let mut log = FoodLog::default();
        let first = log.append(entry(0, "2026-08-30", 180, 12, 4));
        let second = log.append(entry(first, "2026-08-30", 180, 12, 4));
        assert!(second > first);
        assert_eq!(log.entries().len(), 2);
    }

    #[test]
    fn append_keeps_non_colliding_ids() {
        let mut log = FoodLog::default();
        assert_eq!(log.append(entry(42, "2026-08-30", 180, 12, 4)), 42);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut log = FoodLog::from_entries(vec![entry(1, "2026-08-30", 180, 12, 4)]);
        assert!(!log.remove(999));
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].id, 1);
    }

    #[test]
    fn take_and_restore_preserve_position() {
        let mut log = FoodLog::from_entries(vec![
            entry(1, "2026-08-30", 100, 5, 2),
            entry(2, "2026-08-30", 200, 10, 4),
            entry(3, "2026-08-30", 300, 15, 6),
        ]);
        let (idx, removed) = log.take(2).expect("entry exists");
        assert_eq!(idx, 1);
        log.restore(idx, removed);
        let ids: Vec<_> = log.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn entries_and_totals_filter_by_date() {
        let mut log = FoodLog::default();
        log.append(entry(1, "2026-08-29", 400, 20, 10));
        log.append(entry(2, "2026-08-30", 180, 12, 4));
        log.append(entry(3, "2026-08-30", 220, 8, 6));

        assert_eq!(log.entries_for_date("2026-08-30").len(), 2);
        assert_eq!(
            log.totals_for_date("2026-08-30"),
            DayTotals {
                calories: 400,
                protein: 20,
                fats: 10
            }
        );
    }

    #[test]
    fn totals_for_empty_log_are_zero() {
        let log = FoodLog::default();
        assert_eq!(log.totals_for_date("2026-08-30"), DayTotals::default());
    }

    #[test]
    fn log_roundtrips_through_json() {
        let entries = vec![
            entry(1, "2026-08-30", 180, 12, 4),
            entry(2, "2026-08-30", 220, 8, 6),
        ];
        let value = serde_json::to_value(&entries).expect("serialize");
        let restored: Vec<LoggedEntry> = serde_json::from_value(value).expect("deserialize");
        assert_eq!(restored, entries);
    }

    #[test]
    fn notifications_cover_the_three_nudges() {
        let targets = NutritionTargets {
            calories: 2400,
            protein: 120,
            fats: 70,
        };

        let totals = DayTotals {
            calories: 800,
            protein: 40,
            fats: 20,
        };
        let notes = notifications(&totals, &targets, true);
        assert_eq!(notes.len(), 3);

        let on_track = DayTotals {
            calories: 2300,
            protein: 110,
            fats: 60,
        };
        assert!(notifications(&on_track, &targets, false).is_empty());
    }
}
