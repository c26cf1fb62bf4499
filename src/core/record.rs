//! A single adoption record

/// An animal name paired with its adoption fee
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Animal name, never blank
    pub name: String,
    /// Adoption fee, finite and never negative
    pub fee: f64,
}

impl Record {
    /// Create a record without validating it; `RecordStore::add` is the
    /// checked entry point.
    pub(crate) fn new(name: impl Into<String>, fee: f64) -> Self {
        Self {
            name: name.into(),
            // -0.0 + 0.0 == +0.0
            fee: fee + 0.0,
        }
    }
}
