//! Column whitelist and ordering for inventory listings.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::MedicineRecord;

/// A sortable inventory column.
///
/// This is the closed set of columns a listing may be ordered by; there is no
/// way to order by arbitrary text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Column {
    Code,
    Batch,
    Name,
    ChemicalName,
    Company,
    ManufactureDate,
    ExpiryDate,
    Quantity,
    Price,
    Dosage,
    UnitsPerStrip,
}

impl Column {
    /// All columns in display order.
    pub const fn all() -> &'static [Column] {
        &[
            Self::Code,
            Self::Batch,
            Self::Name,
            Self::ChemicalName,
            Self::Company,
            Self::ManufactureDate,
            Self::ExpiryDate,
            Self::Quantity,
            Self::Price,
            Self::Dosage,
            Self::UnitsPerStrip,
        ]
    }

    /// Table header text.
    pub const fn header(&self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Batch => "Batch",
            Self::Name => "Name",
            Self::ChemicalName => "Chemical Name",
            Self::Company => "Company",
            Self::ManufactureDate => "MFD Date",
            Self::ExpiryDate => "EXP Date",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
            Self::Dosage => "Dosage",
            Self::UnitsPerStrip => "Nos per Strip",
        }
    }

    /// Display value of this column for a record.
    pub fn display_value(&self, record: &MedicineRecord) -> String {
        match self {
            Self::Code => record.code.clone(),
            Self::Batch => record.batch.to_string(),
            Self::Name => record.name.clone(),
            Self::ChemicalName => record.chemical_name.clone(),
            Self::Company => record.company.clone(),
            Self::ManufactureDate => record.manufacture_date.clone(),
            Self::ExpiryDate => record.expiry_date.clone(),
            Self::Quantity => record.quantity.to_string(),
            Self::Price => record.price.to_string(),
            Self::Dosage => record.dosage.to_string(),
            Self::UnitsPerStrip => record.units_per_strip.to_string(),
        }
    }

    /// Compare two records on this column alone.
    ///
    /// ISO dates compare lexically, which matches chronological order for
    /// well-formed values.
    pub fn compare(&self, a: &MedicineRecord, b: &MedicineRecord) -> Ordering {
        match self {
            Self::Code => a.code.cmp(&b.code),
            Self::Batch => a.batch.cmp(&b.batch),
            Self::Name => a.name.cmp(&b.name),
            Self::ChemicalName => a.chemical_name.cmp(&b.chemical_name),
            Self::Company => a.company.cmp(&b.company),
            Self::ManufactureDate => a.manufacture_date.cmp(&b.manufacture_date),
            Self::ExpiryDate => a.expiry_date.cmp(&b.expiry_date),
            Self::Quantity => a.quantity.cmp(&b.quantity),
            Self::Price => a.price.cmp(&b.price),
            Self::Dosage => a.dosage.cmp(&b.dosage),
            Self::UnitsPerStrip => a.units_per_strip.cmp(&b.units_per_strip),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the sorted column header.
    pub const fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Column and direction for a listing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortOrder {
    pub column: Column,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    /// Expiry date ascending: soonest to expire first.
    fn default() -> Self {
        Self::ascending(Column::ExpiryDate)
    }
}

impl SortOrder {
    pub const fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Order produced by clicking `column`'s header while `self` is active.
    ///
    /// The same column flips direction; any other column starts ascending.
    pub fn toggled(self, column: Column) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.reversed(),
            }
        } else {
            Self::ascending(column)
        }
    }

    /// Total ordering of two records: the column first, then code.
    pub fn compare(&self, a: &MedicineRecord, b: &MedicineRecord) -> Ordering {
        let ordering = self
            .column
            .compare(a, b)
            .then_with(|| a.code.cmp(&b.code));
        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Sort records in place.
pub fn sort_records(records: &mut [MedicineRecord], order: SortOrder) {
    records.sort_by(|a, b| order.compare(a, b));
}
