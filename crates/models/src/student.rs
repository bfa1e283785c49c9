use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const MIN_NAME_CHARS: usize = 2;
pub const MIN_AGE: i32 = 16;
pub const MAX_AGE: i32 = 100;

/// A stored student document.
///
/// `id` is assigned by the store on first save and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub course: String,
    pub age: i32,
}

impl Student {
    pub fn new(name: impl Into<String>, email: impl Into<String>, course: impl Into<String>, age: i32) -> Self {
        Self { id: None, name: name.into(), email: email.into(), course: course.into(), age }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The identifier when it is present and non-empty.
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// Overwrite every mutable field from `details`; `id` is left alone.
    pub fn apply(&mut self, details: &Student) {
        self.name = details.name.clone();
        self.email = details.email.clone();
        self.course = details.course.clone();
        self.age = details.age;
    }

    pub fn name_contains_ignore_case(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term)
    }

    pub fn course_contains_ignore_case(&self, term: &str) -> bool {
        contains_ignore_case(&self.course, term)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Request body for create and update: every field except `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub course: String,
    pub age: i32,
}

impl StudentInput {
    /// Field checks applied at the HTTP boundary.
    pub fn validate(&self) -> Result<(), ModelError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_course(&self.course)?;
        validate_age(self.age)?;
        Ok(())
    }
}

impl From<StudentInput> for Student {
    fn from(input: StudentInput) -> Self {
        Student::new(input.name, input.email, input.course, input.age)
    }
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ModelError::Validation(format!("name must be at least {MIN_NAME_CHARS} characters")));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("email must be a valid address".into());
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn validate_course(course: &str) -> Result<(), ModelError> {
    if course.trim().is_empty() {
        return Err(ModelError::Validation("course is required".into()));
    }
    Ok(())
}

pub fn validate_age(age: i32) -> Result<(), ModelError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ModelError::Validation(format!("age must be between {MIN_AGE} and {MAX_AGE}")));
    }
    Ok(())
}
