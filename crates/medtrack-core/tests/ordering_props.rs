//! Property tests for listing order and expiry buckets.

use chrono::NaiveDate;
use medtrack_core::expiry::{ExpiryReport, ExpiryStatus};
use medtrack_core::models::{sort_records, Column, MedicineRecord, SortOrder};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = MedicineRecord> {
    (
        "[A-Z]{1,3}[0-9]{1,3}",
        "[a-z]{1,8}",
        2000i32..2100,
        1u32..=12,
        1u32..=28,
        0i64..1000,
    )
        .prop_map(|(code, name, year, month, day, quantity)| {
            let expiry = format!("{:04}-{:02}-{:02}", year, month, day);
            let mut record = MedicineRecord::new(code, name, expiry);
            record.quantity = quantity;
            record
        })
}

/// Records with unique codes, as the store guarantees.
fn arb_records() -> impl Strategy<Value = Vec<MedicineRecord>> {
    prop::collection::vec(arb_record(), 0..40).prop_map(|mut records| {
        let mut seen = std::collections::HashSet::new();
        records.retain(|r| seen.insert(r.code.clone()));
        records
    })
}

fn arb_column() -> impl Strategy<Value = Column> {
    prop::sample::select(Column::all().to_vec())
}

proptest! {
    #[test]
    fn descending_is_reverse_of_ascending(records in arb_records(), column in arb_column()) {
        let mut ascending = records.clone();
        sort_records(&mut ascending, SortOrder::ascending(column));

        let mut descending = records;
        sort_records(&mut descending, SortOrder::descending(column));
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn expiry_order_is_chronological(records in arb_records()) {
        let mut sorted = records;
        sort_records(&mut sorted, SortOrder::ascending(Column::ExpiryDate));

        let dates: Vec<NaiveDate> = sorted
            .iter()
            .map(|r| r.parsed_expiry_date().unwrap())
            .collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn every_dated_record_lands_in_one_bucket(
        records in arb_records(),
        offset in -2000i64..2000,
    ) {
        let base = NaiveDate::from_ymd_opt(2050, 6, 15).unwrap();
        let today = base + chrono::Duration::days(offset);
        let report = ExpiryReport::build(&records, today);

        prop_assert!(report.skipped.is_empty());
        let total = report.count(ExpiryStatus::Expired)
            + report.count(ExpiryStatus::ExpiringSoon)
            + report.count(ExpiryStatus::Safe);
        prop_assert_eq!(total, records.len());
    }
}
