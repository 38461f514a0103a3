//! Journal entries: domain types, the repository seam, its JSON file
//! implementation and the CRUD service used by the HTTP handlers.

pub mod domain;
pub mod repository;
pub mod file_store;
pub mod service;

pub use domain::{Entry, EntryInput};
pub use repository::EntryRepository;
pub use file_store::FileEntryRepository;
pub use service::EntryService;
