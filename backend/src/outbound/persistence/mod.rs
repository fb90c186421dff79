//! Persistence adapters for the record-store port.

mod json_store;

pub use json_store::JsonFileStore;
