//! Slot availability
//!
//! A day has a fixed roster of start times. A slot is free for a service when
//! no appointment for that service is stored at that day and time.

use crate::store::{RecordId, Store, StoreError};
use chrono::NaiveTime;
use std::collections::HashSet;

/// Start times offered every day, lunch hour excluded
pub const DAILY_ROSTER: [&str; 9] = [
    "08:00", "09:00", "10:00", "11:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Reduce a stored time to `HH:MM`
///
/// Values that are not `HH:MM[:SS]` keep only their first five characters.
pub fn normalize_time(raw: &str) -> String {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map(|time| time.format("%H:%M").to_string())
        .unwrap_or_else(|_| raw.chars().take(5).collect())
}

/// Roster entries not present in `booked`, in roster order
pub fn free_slots<I, S>(booked: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let taken: HashSet<String> = booked
        .into_iter()
        .map(|time| normalize_time(time.as_ref()))
        .collect();

    DAILY_ROSTER
        .iter()
        .filter(|slot| !taken.contains(**slot))
        .map(|slot| slot.to_string())
        .collect()
}

/// Free slots for `service_id` on `date`
///
/// An empty vector means the day is fully booked.
pub async fn available_slots(
    store: &dyn Store,
    date: &str,
    service_id: RecordId,
) -> Result<Vec<String>, StoreError> {
    let booked = store.booked_times(date, service_id).await?;
    let free = free_slots(&booked);

    tracing::debug!(
        data = %date,
        id_servico = service_id,
        booked = booked.len(),
        free = free.len(),
        "Computed available slots"
    );

    Ok(free)
}
