//! Core record keeping
//!
//! Contains the record type and the store that validates and holds them.

pub mod record;
pub mod store;

pub use record::Record;
pub use store::RecordStore;
