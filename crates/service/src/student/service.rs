use std::collections::HashSet;
use std::sync::Arc;

use models::Student;
use serde::Serialize;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::student::repository::StudentRepository;

/// Dashboard figures over the whole collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StudentStats {
    pub total: usize,
    pub courses: usize,
    pub average_age: i64,
}

/// Application service encapsulating the student business rules.
pub struct StudentService<R: StudentRepository> {
    repo: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all_students(&self) -> Result<Vec<Student>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Persist as-is; no validation happens at this layer.
    #[instrument(skip_all, fields(name = %student.name))]
    pub async fn create_student(&self, student: Student) -> Result<Student, ServiceError> {
        let saved = self.repo.save(student).await?;
        info!(id = ?saved.id, "student_created");
        Ok(saved)
    }

    /// Overwrite name, email, course and age of the stored record.
    /// `None` when `id` is unknown; `details.id` is ignored.
    #[instrument(skip(self, details))]
    pub async fn update_student(&self, id: &str, details: Student) -> Result<Option<Student>, ServiceError> {
        let Some(mut existing) = self.repo.find_by_id(id).await? else {
            info!("student_update_missing");
            return Ok(None);
        };
        existing.apply(&details);
        let saved = self.repo.save(existing).await?;
        info!("student_updated");
        Ok(Some(saved))
    }

    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: &str) -> Result<bool, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            info!("student_delete_missing");
            return Ok(false);
        }
        self.repo.delete_by_id(id).await?;
        info!("student_deleted");
        Ok(true)
    }

    /// Name search; a missing or blank term returns every student.
    pub async fn search_students(&self, term: Option<&str>) -> Result<Vec<Student>, ServiceError> {
        match non_blank(term) {
            Some(term) => self.repo.find_by_name_containing_ignore_case(term).await,
            None => self.get_all_students().await,
        }
    }

    /// Course search with the same blank-term fallback as [`Self::search_students`].
    pub async fn search_students_by_course(&self, term: Option<&str>) -> Result<Vec<Student>, ServiceError> {
        match non_blank(term) {
            Some(term) => self.repo.find_by_course_containing_ignore_case(term).await,
            None => self.get_all_students().await,
        }
    }

    pub async fn student_stats(&self) -> Result<StudentStats, ServiceError> {
        let all = self.repo.find_all().await?;
        Ok(stats_of(&all))
    }
}

fn non_blank(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.trim().is_empty())
}

fn stats_of(students: &[Student]) -> StudentStats {
    let total = students.len();
    let courses = students.iter().map(|s| s.course.as_str()).collect::<HashSet<_>>().len();
    let average_age = if total == 0 {
        0
    } else {
        let sum: i64 = students.iter().map(|s| i64::from(s.age)).sum();
        (sum as f64 / total as f64).round() as i64
    };
    StudentStats { total, courses, average_age }
}
