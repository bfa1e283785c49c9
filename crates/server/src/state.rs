use std::sync::Arc;

use service::student::{DocumentStudentRepository, StudentService};

pub type Students = StudentService<DocumentStudentRepository>;

/// Shared handler state.
#[derive(Clone)]
pub struct ServerState {
    pub students: Arc<Students>,
}

impl ServerState {
    pub fn new(repo: DocumentStudentRepository) -> Self {
        Self { students: Arc::new(StudentService::new(Arc::new(repo))) }
    }

    /// State over an empty in-memory collection.
    pub fn in_memory() -> Self {
        Self::new(DocumentStudentRepository::in_memory())
    }
}
