#![cfg(test)]
use std::path::PathBuf;
use std::sync::Arc;

use models::Student;

use crate::student::{DocumentStudentRepository, StudentService};

/// Unique JSON file path under the system temp dir.
pub fn temp_data_file() -> PathBuf {
    std::env::temp_dir()
        .join("students-tests")
        .join(format!("{}.json", uuid::Uuid::new_v4()))
}

/// Sorted names, for order-independent assertions.
pub fn names(students: Vec<Student>) -> Vec<String> {
    let mut out: Vec<String> = students.into_iter().map(|s| s.name).collect();
    out.sort();
    out
}

pub fn memory_service() -> StudentService<DocumentStudentRepository> {
    StudentService::new(Arc::new(DocumentStudentRepository::in_memory()))
}
