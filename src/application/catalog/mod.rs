mod errors;
mod library_service;

pub use errors::{CatalogError, Result};
pub use library_service::{LibraryService, ReturnOutcome};
