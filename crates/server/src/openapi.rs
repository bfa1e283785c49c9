use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StudentDoc {
    pub id: String,
    pub name: String,
    pub email: String,
    pub course: String,
    pub age: i32,
}

#[derive(ToSchema)]
pub struct StudentInputDoc {
    pub name: String,
    pub email: String,
    pub course: String,
    pub age: i32,
}

#[derive(ToSchema)]
pub struct StudentStatsDoc {
    pub total: u64,
    pub courses: u64,
    pub average_age: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::get,
        crate::routes::students::create,
        crate::routes::students::update,
        crate::routes::students::delete,
        crate::routes::students::search,
        crate::routes::students::search_by_course,
        crate::routes::students::stats,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            StudentInputDoc,
            StudentStatsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_student_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for expected in ["/health", "/api/students", "/api/students/{id}", "/api/students/search"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }
}
