//! Service layer providing student CRUD and search on top of a document store.
//! - Separates business rules (update merge, search fallback) from data access.
//! - Reuses the entity definition in the `models` crate.
//! - Not-found is a return value; only store failures are errors.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod student;
