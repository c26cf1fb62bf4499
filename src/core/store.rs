//! In-memory adoption record store
//!
//! An append-only list of records. Lookups scan in insertion order and
//! return the first match, so a name added twice keeps its first fee.

use crate::{
    core::record::Record,
    error::{Result, ShelterError},
};
use tracing::{debug, instrument};

/// Ordered collection of adoption records for the lifetime of a session
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Validate and append a record
    ///
    /// Fails with [`ShelterError::Validation`] when the name is blank or the
    /// fee is negative or not a finite number. A rejected record leaves the
    /// store untouched.
    #[instrument(skip(self))]
    pub fn add(&mut self, name: &str, fee: f64) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ShelterError::validation("animal name must not be blank"));
        }

        if !fee.is_finite() {
            return Err(ShelterError::validation(
                "adoption fee must be a finite number",
            ));
        }

        if fee < 0.0 {
            return Err(ShelterError::validation(
                "adoption fee must be greater than or equal to 0",
            ));
        }

        self.records.push(Record::new(name, fee));
        debug!("Stored record #{} for {}", self.records.len(), name);
        Ok(())
    }

    /// Return the fee of the earliest record whose name equals `name`
    ///
    /// Matching is exact and case-sensitive.
    #[instrument(skip(self))]
    pub fn lookup(&self, name: &str) -> Result<f64> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.fee)
            .ok_or_else(|| {
                debug!("No record matches {}", name);
                ShelterError::not_found(name)
            })
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Stored records in insertion order
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
