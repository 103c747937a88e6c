//! Add/edit form contents and their conversion into records.
//!
//! Every field is edited as raw text. Integer fields are validated on submit;
//! dates are stored as entered and only produce warnings.

use std::fmt;

use thiserror::Error;

use super::{Column, MedicineRecord};

/// Reasons a form cannot become a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Medicine code must not be empty")]
    EmptyCode,

    #[error("{} must be a whole number (got \"{}\")", .field.header(), .value)]
    InvalidNumber { field: Column, value: String },
}

/// Non-blocking problems shown next to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormWarning {
    /// A date field is not `YYYY-MM-DD`.
    InvalidDate { field: Column, value: String },
    /// Expiry date falls before the manufacturing date.
    ExpiresBeforeManufacture,
}

impl fmt::Display for FormWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { field, value } => write!(
                f,
                "{} \"{}\" is not a YYYY-MM-DD date; it will be left out of expiry checks",
                field.header(),
                value
            ),
            Self::ExpiresBeforeManufacture => {
                write!(f, "Expiry date is before the manufacturing date")
            }
        }
    }
}

impl Column {
    /// Label shown next to the input in the add/edit forms.
    pub const fn form_label(&self) -> &'static str {
        match self {
            Self::Code => "Medicine Code",
            Self::Batch => "Batch",
            Self::Name => "Medicine Name",
            Self::ChemicalName => "Chemical Name",
            Self::Company => "Company",
            Self::ManufactureDate => "Manufacturing Date (YYYY-MM-DD)",
            Self::ExpiryDate => "Expiry Date (YYYY-MM-DD)",
            Self::Quantity => "Quantity",
            Self::Price => "Price",
            Self::Dosage => "Dosage",
            Self::UnitsPerStrip => "No. Per Strip",
        }
    }
}

/// Raw text of the add/edit form, one string per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicineForm {
    pub code: String,
    pub batch: String,
    pub name: String,
    pub chemical_name: String,
    pub company: String,
    pub manufacture_date: String,
    pub expiry_date: String,
    pub quantity: String,
    pub price: String,
    pub dosage: String,
    pub units_per_strip: String,
}

impl MedicineForm {
    /// A blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with a record's current values.
    pub fn from_record(record: &MedicineRecord) -> Self {
        Self {
            code: record.code.clone(),
            batch: record.batch.to_string(),
            name: record.name.clone(),
            chemical_name: record.chemical_name.clone(),
            company: record.company.clone(),
            manufacture_date: record.manufacture_date.clone(),
            expiry_date: record.expiry_date.clone(),
            quantity: record.quantity.to_string(),
            price: record.price.to_string(),
            dosage: record.dosage.to_string(),
            units_per_strip: record.units_per_strip.to_string(),
        }
    }

    /// Text of a single field.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Code => &self.code,
            Column::Batch => &self.batch,
            Column::Name => &self.name,
            Column::ChemicalName => &self.chemical_name,
            Column::Company => &self.company,
            Column::ManufactureDate => &self.manufacture_date,
            Column::ExpiryDate => &self.expiry_date,
            Column::Quantity => &self.quantity,
            Column::Price => &self.price,
            Column::Dosage => &self.dosage,
            Column::UnitsPerStrip => &self.units_per_strip,
        }
    }

    /// Mutable text of a single field, for binding to a text input.
    pub fn field_mut(&mut self, column: Column) -> &mut String {
        match column {
            Column::Code => &mut self.code,
            Column::Batch => &mut self.batch,
            Column::Name => &mut self.name,
            Column::ChemicalName => &mut self.chemical_name,
            Column::Company => &mut self.company,
            Column::ManufactureDate => &mut self.manufacture_date,
            Column::ExpiryDate => &mut self.expiry_date,
            Column::Quantity => &mut self.quantity,
            Column::Price => &mut self.price,
            Column::Dosage => &mut self.dosage,
            Column::UnitsPerStrip => &mut self.units_per_strip,
        }
    }

    /// Build a record, trimming whitespace and validating integer fields.
    pub fn to_record(&self) -> Result<MedicineRecord, FormError> {
        let code = self.code.trim();
        if code.is_empty() {
            return Err(FormError::EmptyCode);
        }

        Ok(MedicineRecord {
            code: code.to_string(),
            batch: self.integer(Column::Batch)?,
            name: self.name.trim().to_string(),
            chemical_name: self.chemical_name.trim().to_string(),
            company: self.company.trim().to_string(),
            manufacture_date: self.manufacture_date.trim().to_string(),
            expiry_date: self.expiry_date.trim().to_string(),
            quantity: self.integer(Column::Quantity)?,
            price: self.integer(Column::Price)?,
            dosage: self.integer(Column::Dosage)?,
            units_per_strip: self.integer(Column::UnitsPerStrip)?,
        })
    }

    /// Date problems worth pointing out without blocking submission.
    pub fn warnings(&self) -> Vec<FormWarning> {
        let mut warnings = Vec::new();

        let mut parse = |column: Column| {
            let value = self.field(column).trim();
            let date = super::parse_iso_date(value);
            if date.is_none() {
                warnings.push(FormWarning::InvalidDate {
                    field: column,
                    value: value.to_string(),
                });
            }
            date
        };
        let manufactured = parse(Column::ManufactureDate);
        let expires = parse(Column::ExpiryDate);

        if let (Some(manufactured), Some(expires)) = (manufactured, expires) {
            if expires < manufactured {
                warnings.push(FormWarning::ExpiresBeforeManufacture);
            }
        }

        warnings
    }

    fn integer(&self, column: Column) -> Result<i64, FormError> {
        let value = self.field(column).trim();
        value.parse().map_err(|_| FormError::InvalidNumber {
            field: column,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> MedicineForm {
        MedicineForm {
            code: " M1 ".into(),
            batch: "1001".into(),
            name: "Paracetamol".into(),
            chemical_name: "Acetaminophen".into(),
            company: "Acme Pharma".into(),
            manufacture_date: "2024-01-01".into(),
            expiry_date: "2026-01-01".into(),
            quantity: "50".into(),
            price: "12".into(),
            dosage: "500".into(),
            units_per_strip: "10".into(),
        }
    }

    #[test]
    fn test_to_record_trims_and_parses() {
        let record = filled_form().to_record().unwrap();
        assert_eq!(record.code, "M1");
        assert_eq!(record.batch, 1001);
        assert_eq!(record.quantity, 50);
        assert_eq!(record.dosage, 500);
        assert_eq!(record.units_per_strip, 10);
        assert_eq!(record.expiry_date, "2026-01-01");
    }

    #[test]
    fn test_empty_code_rejected() {
        let mut form = filled_form();
        form.code = "   ".into();
        assert_eq!(form.to_record(), Err(FormError::EmptyCode));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let mut form = filled_form();
        form.price = "12.50".into();
        let err = form.to_record().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: Column::Price,
                value: "12.50".into()
            }
        );
        assert_eq!(err.to_string(), "Price must be a whole number (got \"12.50\")");
    }

    #[test]
    fn test_blank_number_rejected() {
        let mut form = filled_form();
        form.quantity.clear();
        assert!(matches!(
            form.to_record(),
            Err(FormError::InvalidNumber {
                field: Column::Quantity,
                ..
            })
        ));
    }

    #[test]
    fn test_from_record_round_trip() {
        let record = filled_form().to_record().unwrap();
        let form = MedicineForm::from_record(&record);
        assert_eq!(form.code, "M1");
        assert_eq!(form.quantity, "50");
        assert_eq!(form.to_record().unwrap(), record);
    }

    #[test]
    fn test_no_warnings_for_valid_dates() {
        assert!(filled_form().warnings().is_empty());
    }

    #[test]
    fn test_invalid_date_warns() {
        let mut form = filled_form();
        form.expiry_date = "not-a-date".into();
        assert_eq!(
            form.warnings(),
            vec![FormWarning::InvalidDate {
                field: Column::ExpiryDate,
                value: "not-a-date".into()
            }]
        );
        // Still submittable
        assert!(form.to_record().is_ok());
    }

    #[test]
    fn test_expiry_before_manufacture_warns() {
        let mut form = filled_form();
        form.expiry_date = "2023-06-01".into();
        assert_eq!(form.warnings(), vec![FormWarning::ExpiresBeforeManufacture]);
        assert!(form.to_record().is_ok());
    }

    #[test]
    fn test_field_mut_binds_to_column() {
        let mut form = MedicineForm::new();
        form.field_mut(Column::ChemicalName).push_str("Ibuprofen");
        assert_eq!(form.chemical_name, "Ibuprofen");
        assert_eq!(form.field(Column::ChemicalName), "Ibuprofen");
    }
}
