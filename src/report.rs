//! Reporting over the registration feed: stats, filtering, CSV export, and
//! the month overview.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::month_grid;
use crate::error::{EngineError, EngineResult};
use crate::models::StoredRegistration;

/// Headline figures for the registration feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskStats {
    /// Total registrations on record.
    pub total_registrations: usize,
    /// Distinct employees, keyed by email (case-insensitive).
    pub unique_employees: usize,
    /// Registrations dated today.
    pub today: usize,
}

impl DeskStats {
    /// Computes the stats for a feed snapshot, with `today` as the reference
    /// date.
    pub fn compute(records: &[StoredRegistration], today: NaiveDate) -> Self {
        let mut emails: Vec<String> = records
            .iter()
            .map(|r| r.registration.email.to_lowercase())
            .collect();
        emails.sort();
        emails.dedup();

        Self {
            total_registrations: records.len(),
            unique_employees: emails.len(),
            today: records
                .iter()
                .filter(|r| r.registration.date == today)
                .count(),
        }
    }
}

/// Criteria for narrowing the registration feed.
///
/// Both fields are optional; an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationFilter {
    /// Keep only registrations on this date.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring matched against name or email.
    pub employee: Option<String>,
}

impl RegistrationFilter {
    /// Whether a record satisfies the filter.
    pub fn matches(&self, record: &StoredRegistration) -> bool {
        if let Some(date) = self.date {
            if record.registration.date != date {
                return false;
            }
        }
        if let Some(needle) = &self.employee {
            let needle = needle.to_lowercase();
            let name = record.registration.employee_name.to_lowercase();
            let email = record.registration.email.to_lowercase();
            if !name.contains(&needle) && !email.contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Applies the filter to a feed snapshot, preserving order.
    pub fn apply<'a>(&self, records: &'a [StoredRegistration]) -> Vec<&'a StoredRegistration> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Renders registrations as CSV with one row per record.
///
/// Columns: date, employee, email, entry time (HH:MM), shift label, meal
/// slot label.
pub fn export_csv(records: &[StoredRegistration], catalog: &Catalog) -> EngineResult<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer
        .write_record(["date", "employee", "email", "entry_time", "shift", "meal"])
        .map_err(csv_failure)?;

    for record in records {
        let r = &record.registration;
        writer
            .write_record([
                r.date.format("%Y-%m-%d").to_string(),
                r.employee_name.clone(),
                r.email.clone(),
                r.entry_time.format("%H:%M").to_string(),
                catalog.shift(r.shift_id).label.to_string(),
                catalog.meal_slot(r.meal_slot_id).label.to_string(),
            ])
            .map_err(csv_failure)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EngineError::PersistenceFailure {
            message: format!("csv export failed: {}", e.into_error()),
        })?;
    String::from_utf8(bytes).map_err(|e| EngineError::PersistenceFailure {
        message: format!("csv output was not valid utf-8: {e}"),
    })
}

fn csv_failure(error: csv::Error) -> EngineError {
    EngineError::PersistenceFailure {
        message: format!("csv export failed: {error}"),
    }
}

/// One calendar cell of the month overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The date, or `None` for padding outside the month.
    pub date: Option<NaiveDate>,
    /// Registrations dated this day.
    pub registrations: usize,
}

/// Lays out a month as Sunday-first week rows with per-day registration
/// counts. Returns an empty overview for an invalid year/month.
pub fn month_overview(
    records: &[StoredRegistration],
    year: i32,
    month: u32,
) -> Vec<Vec<DayCell>> {
    month_grid(year, month)
        .into_iter()
        .map(|week| {
            week.into_iter()
                .map(|date| DayCell {
                    date,
                    registrations: date.map_or(0, |d| {
                        records.iter().filter(|r| r.registration.date == d).count()
                    }),
                })
                .collect()
        })
        .collect()
}
