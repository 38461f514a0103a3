//! Service layer for the journal: entry domain, file-backed storage and the
//! CRUD operations the HTTP layer calls.
//! - Entries are persisted as one JSON array document.
//! - Storage sits behind the `EntryRepository` trait.
//! - Errors are classified so the HTTP layer can pick a status code.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod entries;
pub mod metrics;
#[cfg(test)]
pub mod test_support;
