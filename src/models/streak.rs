//! Saving streak state
//!
//! A single record per data store tracking consecutive saving days. The
//! history is a `BTreeSet` so dates stay deduplicated and ascending; the
//! streak engine recomputes `current_streak` from it on every saving day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The user's saving streak record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStreak {
    /// Consecutive saving days ending at or adjacent to the present
    pub current_streak: u32,

    /// Best streak ever achieved; never decreases
    pub longest_streak: u32,

    /// Most recent saving day, if any
    pub last_saving_day: Option<NaiveDate>,

    /// All saving days, deduplicated and ascending
    #[serde(default)]
    pub streak_history: BTreeSet<NaiveDate>,
}

impl UserStreak {
    /// Record `day` as a saving day and refresh the derived fields
    ///
    /// `today` anchors the streak walk; a `current_streak` of 0 means the
    /// most recent saving day is more than one day old.
    pub fn mark_saving_day(&mut self, day: NaiveDate, today: NaiveDate) {
        self.streak_history.insert(day);
        self.current_streak = compute_streak(&self.streak_history, today);
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_saving_day = Some(match self.last_saving_day {
            Some(prev) => prev.max(day),
            None => day,
        });
    }
}

/// Length of the consecutive-day run ending at or adjacent to `today`
///
/// Walks the history newest-first. The run only starts if the newest entry is
/// today or yesterday; it extends while each earlier entry is exactly one day
/// before the previous one, and breaks on the first gap.
pub fn compute_streak(history: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut days = history.iter().rev();

    let newest = match days.next() {
        Some(d) => *d,
        None => return 0,
    };
    if (today - newest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    let mut expected = newest.pred_opt();
    for day in days {
        match expected {
            Some(e) if *day == e => {
                streak += 1;
                expected = day.pred_opt();
            }
            _ => break,
        }
    }
    streak
}
