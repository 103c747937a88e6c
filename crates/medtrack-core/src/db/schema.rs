//! SQLite schema definition.

/// Medicine inventory table.
///
/// Dates are stored as `YYYY-MM-DD` text so lexical order is chronological.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS medicine (
    code TEXT NOT NULL PRIMARY KEY CHECK (code <> ''),
    batch INTEGER,
    name TEXT,
    chem_name TEXT,
    company TEXT,
    mfg_date TEXT,
    expiry_date TEXT,
    quantity INTEGER,
    price INTEGER,
    dosage INTEGER,
    nos_per_strip INTEGER
);
"#;
