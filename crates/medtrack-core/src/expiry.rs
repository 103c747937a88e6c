//! Expiry status classification.
//!
//! Each record with a parseable expiry date falls into exactly one bucket
//! relative to "today":
//!
//! ```text
//!   expiry <= today                      Expired
//!   today < expiry <= today + 60 days    ExpiringSoon
//!   expiry > today + 60 days             Safe
//! ```
//!
//! Records whose expiry date does not parse are skipped and logged.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::MedicineRecord;

/// Days ahead of today that count as "expiring soon".
pub const EXPIRING_SOON_DAYS: u64 = 60;

/// Expiry bucket for a record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpiryStatus {
    /// Expiry date is today or earlier
    Expired,
    /// Expires within the next [`EXPIRING_SOON_DAYS`] days
    ExpiringSoon,
    /// Expires later than that
    Safe,
}

impl ExpiryStatus {
    /// Classify an expiry date relative to `today`.
    pub fn classify(expiry: NaiveDate, today: NaiveDate) -> Self {
        if expiry <= today {
            return Self::Expired;
        }
        match today.checked_add_days(Days::new(EXPIRING_SOON_DAYS)) {
            Some(horizon) if expiry > horizon => Self::Safe,
            _ => Self::ExpiringSoon,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Expired => "Expired",
            Self::ExpiringSoon => "Expiring soon",
            Self::Safe => "Safe",
        }
    }
}

/// One classified record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryEntry {
    pub record: MedicineRecord,
    pub status: ExpiryStatus,
    /// Negative once expired.
    pub days_until_expiry: i64,
}

/// The full expiry status view for a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpiryReport {
    /// Date the report was computed against
    pub today: Option<NaiveDate>,
    /// Classified records, in input order
    pub entries: Vec<ExpiryEntry>,
    /// Codes of records whose expiry date could not be parsed
    pub skipped: Vec<String>,
}

impl ExpiryReport {
    /// Classify every record against `today`.
    pub fn build(records: &[MedicineRecord], today: NaiveDate) -> Self {
        let mut entries = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for record in records {
            let Some(expiry) = record.parsed_expiry_date() else {
                tracing::warn!(
                    "Invalid expiry date {:?} for medicine {}, skipping",
                    record.expiry_date,
                    record.code
                );
                skipped.push(record.code.clone());
                continue;
            };

            entries.push(ExpiryEntry {
                record: record.clone(),
                status: ExpiryStatus::classify(expiry, today),
                days_until_expiry: (expiry - today).num_days(),
            });
        }

        tracing::debug!(
            "Expiry report: {} classified, {} skipped",
            entries.len(),
            skipped.len()
        );

        Self {
            today: Some(today),
            entries,
            skipped,
        }
    }

    /// Entries in one bucket.
    pub fn bucket(&self, status: ExpiryStatus) -> impl Iterator<Item = &ExpiryEntry> {
        self.entries.iter().filter(move |e| e.status == status)
    }

    /// Number of entries in one bucket.
    pub fn count(&self, status: ExpiryStatus) -> usize {
        self.bucket(status).count()
    }

    /// Bucket of a record by code, `None` if absent or skipped.
    pub fn status_of(&self, code: &str) -> Option<ExpiryStatus> {
        self.entries
            .iter()
            .find(|e| e.record.code == code)
            .map(|e| e.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn in_days(days: i64) -> NaiveDate {
        today() + chrono::Duration::days(days)
    }

    #[test]
    fn test_today_is_expired() {
        assert_eq!(ExpiryStatus::classify(today(), today()), ExpiryStatus::Expired);
        assert_eq!(ExpiryStatus::classify(in_days(-1), today()), ExpiryStatus::Expired);
    }

    #[test]
    fn test_window_boundaries() {
        assert_eq!(ExpiryStatus::classify(in_days(1), today()), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::classify(in_days(59), today()), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::classify(in_days(60), today()), ExpiryStatus::ExpiringSoon);
        assert_eq!(ExpiryStatus::classify(in_days(61), today()), ExpiryStatus::Safe);
    }

    #[test]
    fn test_report_buckets_and_skips() {
        let records = vec![
            MedicineRecord::new("M1", "Old", "2020-01-01"),
            MedicineRecord::new("M2", "Far", "2099-01-01"),
            MedicineRecord::new("M3", "Soon", in_days(30).format("%Y-%m-%d").to_string()),
            MedicineRecord::new("BAD", "Broken", "not-a-date"),
        ];

        let report = ExpiryReport::build(&records, today());

        assert_eq!(report.status_of("M1"), Some(ExpiryStatus::Expired));
        assert_eq!(report.status_of("M2"), Some(ExpiryStatus::Safe));
        assert_eq!(report.status_of("M3"), Some(ExpiryStatus::ExpiringSoon));
        assert_eq!(report.status_of("BAD"), None);
        assert_eq!(report.skipped, vec!["BAD".to_string()]);
        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.count(ExpiryStatus::Expired), 1);
        assert_eq!(report.count(ExpiryStatus::ExpiringSoon), 1);
        assert_eq!(report.count(ExpiryStatus::Safe), 1);
    }

    #[test]
    fn test_days_until_expiry() {
        let records = vec![
            MedicineRecord::new("A", "A", in_days(10).format("%Y-%m-%d").to_string()),
            MedicineRecord::new("B", "B", in_days(-3).format("%Y-%m-%d").to_string()),
        ];
        let report = ExpiryReport::build(&records, today());
        assert_eq!(report.entries[0].days_until_expiry, 10);
        assert_eq!(report.entries[1].days_until_expiry, -3);
    }

    #[test]
    fn test_empty_report() {
        let report = ExpiryReport::build(&[], today());
        assert!(report.entries.is_empty());
        assert!(report.skipped.is_empty());
        assert_eq!(report.today, Some(today()));
    }
}
