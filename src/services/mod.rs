pub mod admin_service;
pub mod auth_service;
pub mod chapter_service;
pub mod question_service;
pub mod quiz_service;
pub mod student_service;
pub mod subject_service;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use chapter_service::ChapterService;
pub use question_service::QuestionService;
pub use quiz_service::QuizService;
pub use student_service::StudentService;
pub use subject_service::SubjectService;

use serde_json::{json, Value};

/// Some delete endpoints answer with an empty body; report a standard success
/// object for those.
pub(crate) fn success_or(body: Value, message: &str) -> Value {
    if body.is_null() {
        json!({ "success": true, "message": message })
    } else {
        body
    }
}
