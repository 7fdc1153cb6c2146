//! CSV loading for named overtime rate tables.
//!
//! The corpus of historical screens disagrees on the canonical overtime
//! surcharges, so the surcharge set is data owned by whoever owns the
//! payroll policy: tables are loaded from CSV and pinned by name in the
//! configuration. The CSV has the columns `name,regular,night,holiday`
//! with surcharges as decimal fractions (`0.15` for 15%).

use std::collections::BTreeMap;
use std::io::Read;

use payroll_core::models::OvertimeRateTable;
use payroll_store::{save_rate_tables, SessionStore, StoreError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading rate table data.
#[derive(Debug, Error)]
pub enum RateTableLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Rate table '{0}' has a negative '{1}' surcharge")]
    NegativeSurcharge(String, &'static str),

    #[error("Duplicate rate table name: '{0}'")]
    DuplicateName(String),

    #[error("Rate table name '{0}' is reserved for a built-in table")]
    ReservedName(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl From<csv::Error> for RateTableLoaderError {
    fn from(err: csv::Error) -> Self {
        RateTableLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the rate tables CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateTableRecord {
    pub name: String,
    pub regular: Decimal,
    pub night: Decimal,
    pub holiday: Decimal,
}

impl RateTableRecord {
    fn validate(&self) -> Result<(), RateTableLoaderError> {
        for (field, value) in [
            ("regular", self.regular),
            ("night", self.night),
            ("holiday", self.holiday),
        ] {
            if value < Decimal::ZERO {
                return Err(RateTableLoaderError::NegativeSurcharge(
                    self.name.clone(),
                    field,
                ));
            }
        }
        Ok(())
    }
}

/// Loader for overtime rate tables from CSV files.
///
/// The parse/load split lets callers inspect the records before they
/// replace the stored tables, and keeps the loader usable with any
/// `SessionStore` backend.
pub struct RateTableLoader;

impl RateTableLoader {
    /// Parse rate table records from a CSV reader, validating surcharges
    /// and rejecting duplicate or built-in-shadowing names.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RateTableRecord>, RateTableLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records: Vec<RateTableRecord> = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RateTableRecord = result?;
            record.validate()?;

            if OvertimeRateTable::builtin(&record.name).is_some() {
                return Err(RateTableLoaderError::ReservedName(record.name));
            }
            if records.iter().any(|existing| existing.name == record.name) {
                return Err(RateTableLoaderError::DuplicateName(record.name));
            }

            records.push(record);
        }

        Ok(records)
    }

    /// Replaces the stored custom rate tables with the parsed records.
    /// Returns the number of tables written.
    pub async fn load(
        store: &dyn SessionStore,
        records: &[RateTableRecord],
    ) -> Result<usize, RateTableLoaderError> {
        let tables: BTreeMap<String, OvertimeRateTable> = records
            .iter()
            .map(|record| {
                (
                    record.name.clone(),
                    OvertimeRateTable {
                        name: record.name.clone(),
                        regular: record.regular,
                        night: record.night,
                        holiday: record.holiday,
                    },
                )
            })
            .collect();

        save_rate_tables(store, &tables).await?;
        Ok(tables.len())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_reads_well_formed_records() {
        let csv = "name,regular,night,holiday\n\
                   site-agreement,0.18,0.35,0.45\n\
                   union-2023,0.20,0.40,0.50\n";

        let records = RateTableLoader::parse(csv.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "site-agreement");
        assert_eq!(records[0].regular, dec!(0.18));
        assert_eq!(records[1].holiday, dec!(0.50));
    }

    #[test]
    fn parse_rejects_negative_surcharges() {
        let csv = "name,regular,night,holiday\nbroken,-0.10,0.30,0.40\n";

        let result = RateTableLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(RateTableLoaderError::NegativeSurcharge(name, "regular")) if name == "broken"
        ));
    }

    #[test]
    fn parse_rejects_duplicate_names() {
        let csv = "name,regular,night,holiday\n\
                   twice,0.15,0.30,0.40\n\
                   twice,0.20,0.40,0.50\n";

        let result = RateTableLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(RateTableLoaderError::DuplicateName(name)) if name == "twice"
        ));
    }

    #[test]
    fn parse_rejects_builtin_names() {
        let csv = "name,regular,night,holiday\nstandard,0.99,0.99,0.99\n";

        let result = RateTableLoader::parse(csv.as_bytes());

        assert!(matches!(
            result,
            Err(RateTableLoaderError::ReservedName(name)) if name == "standard"
        ));
    }

    #[test]
    fn parse_rejects_malformed_csv() {
        let csv = "name,regular,night,holiday\nonly-two-fields,0.15\n";

        let result = RateTableLoader::parse(csv.as_bytes());

        assert!(matches!(result, Err(RateTableLoaderError::CsvParse(_))));
    }
}
