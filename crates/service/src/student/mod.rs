//! Student accessor contract, its document-store implementation and the
//! service orchestrating them.

pub mod repository;
pub mod service;

pub use repository::{DocumentStudentRepository, StudentRepository};
pub use service::{StudentService, StudentStats};
