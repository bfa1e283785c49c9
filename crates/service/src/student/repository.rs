use std::sync::Arc;

use async_trait::async_trait;
use models::Student;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Data access for the student collection.
///
/// Absence is never an error here: lookups return `None`/`false` and
/// `delete_by_id` on an unknown id does nothing.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, ServiceError>;
    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError>;
    /// Upsert keyed by `id`; assigns a fresh id when it is missing or empty.
    async fn save(&self, student: Student) -> Result<Student, ServiceError>;
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
    async fn find_by_name_containing_ignore_case(&self, term: &str) -> Result<Vec<Student>, ServiceError>;
    async fn find_by_course_containing_ignore_case(&self, term: &str) -> Result<Vec<Student>, ServiceError>;
}

/// Repository over a [`JsonMapStore`] keyed by student id.
#[derive(Clone)]
pub struct DocumentStudentRepository {
    store: Arc<JsonMapStore<String, Student>>,
}

impl DocumentStudentRepository {
    pub fn new(store: Arc<JsonMapStore<String, Student>>) -> Self { Self { store } }

    /// Open (or create) the JSON document file at `path`.
    pub async fn open<P: Into<std::path::PathBuf>>(path: P) -> Result<Self, ServiceError> {
        Ok(Self::new(JsonMapStore::new(path).await?))
    }

    pub fn in_memory() -> Self { Self::new(JsonMapStore::in_memory()) }
}

#[async_trait]
impl StudentRepository for DocumentStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(self.store.values().await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, ServiceError> {
        Ok(self.store.get(&id.to_string()).await)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.contains_key(&id.to_string()).await)
    }

    async fn save(&self, mut student: Student) -> Result<Student, ServiceError> {
        let id = match student.key() {
            Some(id) => id.to_string(),
            None => Uuid::new_v4().to_string(),
        };
        student.id = Some(id.clone());
        self.store.insert(id.clone(), student.clone()).await?;
        debug!(%id, "student document saved");
        Ok(student)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let existed = self.store.remove(&id.to_string()).await?;
        debug!(%id, existed, "student document delete");
        Ok(())
    }

    async fn find_by_name_containing_ignore_case(&self, term: &str) -> Result<Vec<Student>, ServiceError> {
        Ok(self.store.filter(|s| s.name_contains_ignore_case(term)).await)
    }

    async fn find_by_course_containing_ignore_case(&self, term: &str) -> Result<Vec<Student>, ServiceError> {
        Ok(self.store.filter(|s| s.course_contains_ignore_case(term)).await)
    }
}
