//! Medicine table operations.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DbError, DbResult};
use crate::models::{sort_records, MedicineRecord, SortOrder};

const SELECT_COLUMNS: &str = r#"
    SELECT code, batch, name, chem_name, company, mfg_date,
           expiry_date, quantity, price, dosage, nos_per_strip
    FROM medicine
"#;

impl Database {
    /// Insert a new medicine.
    ///
    /// Fails with [`DbError::DuplicateKey`] if the code is already taken.
    pub fn insert_medicine(&self, record: &MedicineRecord) -> DbResult<()> {
        require_code(&record.code)?;
        let conn = self.connect()?;
        conn.execute(
            r#"
            INSERT INTO medicine (
                code, batch, name, chem_name, company, mfg_date,
                expiry_date, quantity, price, dosage, nos_per_strip
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            params![
                record.code,
                record.batch,
                record.name,
                record.chemical_name,
                record.company,
                record.manufacture_date,
                record.expiry_date,
                record.quantity,
                record.price,
                record.dosage,
                record.units_per_strip,
            ],
        )
        .map_err(|e| duplicate_key_or(e, &record.code))?;

        tracing::info!("Inserted medicine {}", record.code);
        Ok(())
    }

    /// Replace every field of the row identified by `old_code`, code included.
    ///
    /// `old_code` may equal `record.code`. Renaming onto another existing code
    /// fails with [`DbError::DuplicateKey`] and leaves both rows untouched.
    pub fn update_medicine(&self, old_code: &str, record: &MedicineRecord) -> DbResult<()> {
        require_code(&record.code)?;
        let conn = self.connect()?;
        let rows_affected = conn
            .execute(
                r#"
                UPDATE medicine SET
                    code = ?1,
                    batch = ?2,
                    name = ?3,
                    chem_name = ?4,
                    company = ?5,
                    mfg_date = ?6,
                    expiry_date = ?7,
                    quantity = ?8,
                    price = ?9,
                    dosage = ?10,
                    nos_per_strip = ?11
                WHERE code = ?12
                "#,
                params![
                    record.code,
                    record.batch,
                    record.name,
                    record.chemical_name,
                    record.company,
                    record.manufacture_date,
                    record.expiry_date,
                    record.quantity,
                    record.price,
                    record.dosage,
                    record.units_per_strip,
                    old_code,
                ],
            )
            .map_err(|e| duplicate_key_or(e, &record.code))?;

        if rows_affected == 0 {
            return Err(DbError::NotFound(old_code.to_string()));
        }

        if old_code == record.code {
            tracing::info!("Updated medicine {}", record.code);
        } else {
            tracing::info!("Updated medicine {} (now {})", old_code, record.code);
        }
        Ok(())
    }

    /// Delete a medicine.
    ///
    /// Fails with [`DbError::NotFound`] if no row has that code.
    pub fn delete_medicine(&self, code: &str) -> DbResult<()> {
        let conn = self.connect()?;
        let rows_affected = conn.execute("DELETE FROM medicine WHERE code = ?", [code])?;
        if rows_affected == 0 {
            return Err(DbError::NotFound(code.to_string()));
        }

        tracing::info!("Deleted medicine {}", code);
        Ok(())
    }

    /// Get a medicine by code.
    pub fn get_medicine(&self, code: &str) -> DbResult<Option<MedicineRecord>> {
        let conn = self.connect()?;
        let sql = format!("{SELECT_COLUMNS} WHERE code = ?");
        let record = conn.query_row(&sql, [code], medicine_from_row).optional()?;
        Ok(record)
    }

    /// All medicines in the requested order.
    pub fn list_medicines(&self, order: SortOrder) -> DbResult<Vec<MedicineRecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_COLUMNS)?;
        let rows = stmt.query_map([], medicine_from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        sort_records(&mut records, order);

        tracing::debug!(
            "Listed {} medicines by {:?} {:?}",
            records.len(),
            order.column,
            order.direction
        );
        Ok(records)
    }

    /// Medicines whose code or name contains `query`, ignoring ASCII case.
    ///
    /// `%` and `_` in the query match literally. Results use the default order.
    pub fn search_medicines(&self, query: &str) -> DbResult<Vec<MedicineRecord>> {
        let conn = self.connect()?;
        let sql = format!(
            r"{SELECT_COLUMNS} WHERE code LIKE ?1 ESCAPE '\' OR name LIKE ?1 ESCAPE '\'"
        );
        let pattern = format!("%{}%", escape_like(query));

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([pattern], medicine_from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        sort_records(&mut records, SortOrder::default());

        tracing::debug!("Search {:?} matched {} medicines", query, records.len());
        Ok(records)
    }

    /// Number of medicines in the table.
    pub fn count_medicines(&self) -> DbResult<usize> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM medicine", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn medicine_from_row(row: &Row<'_>) -> rusqlite::Result<MedicineRecord> {
    Ok(MedicineRecord {
        code: row.get(0)?,
        batch: row.get(1)?,
        name: row.get(2)?,
        chemical_name: row.get(3)?,
        company: row.get(4)?,
        manufacture_date: row.get(5)?,
        expiry_date: row.get(6)?,
        quantity: row.get(7)?,
        price: row.get(8)?,
        dosage: row.get(9)?,
        units_per_strip: row.get(10)?,
    })
}

fn require_code(code: &str) -> DbResult<()> {
    if code.trim().is_empty() {
        return Err(DbError::EmptyCode);
    }
    Ok(())
}

/// Map a primary-key violation to [`DbError::DuplicateKey`].
fn duplicate_key_or(err: rusqlite::Error, code: &str) -> DbError {
    match err {
        rusqlite::Error::SqliteFailure(ref e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
        {
            DbError::DuplicateKey(code.to_string())
        }
        other => DbError::Sqlite(other),
    }
}

/// Escape LIKE wildcards so the query is matched as a plain substring.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
