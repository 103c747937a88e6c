//! Medicine inventory record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for every stored date column.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single medicine entry in the inventory.
///
/// Dates are kept as the text the user entered and are only interpreted when
/// needed (expiry classification, form warnings).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineRecord {
    /// Unique medicine code (primary key)
    pub code: String,
    /// Batch number
    pub batch: i64,
    /// Brand or common name
    pub name: String,
    /// Chemical (generic) name
    pub chemical_name: String,
    /// Manufacturer
    pub company: String,
    /// Manufacturing date, ISO `YYYY-MM-DD`
    pub manufacture_date: String,
    /// Expiry date, ISO `YYYY-MM-DD`
    pub expiry_date: String,
    /// Units in stock
    pub quantity: i64,
    /// Unit price
    pub price: i64,
    /// Dosage strength
    pub dosage: i64,
    /// Number of units per strip
    pub units_per_strip: i64,
}

impl MedicineRecord {
    /// Create a record with the given code, name and expiry date.
    ///
    /// Numeric fields start at zero and the remaining text fields empty.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        expiry_date: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            batch: 0,
            name: name.into(),
            chemical_name: String::new(),
            company: String::new(),
            manufacture_date: String::new(),
            expiry_date: expiry_date.into(),
            quantity: 0,
            price: 0,
            dosage: 0,
            units_per_strip: 0,
        }
    }

    /// Parse the expiry date, if it is a well-formed ISO date.
    pub fn parsed_expiry_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.expiry_date)
    }
}

/// Parse a `YYYY-MM-DD` date, returning `None` for anything else.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1);
        assert_eq!(parse_iso_date("2025-03-01"), expected);
        assert_eq!(parse_iso_date(" 2025-03-01 "), expected);
        assert_eq!(parse_iso_date("not-a-date"), None);
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_parsed_dates() {
        let mut record = MedicineRecord::new("M1", "Paracetamol", "2026-01-31");

        assert_eq!(record.parsed_expiry_date(), NaiveDate::from_ymd_opt(2026, 1, 31));

        record.expiry_date = "31/01/2026".into();
        assert_eq!(record.parsed_expiry_date(), None);
    }
}
