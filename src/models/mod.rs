pub mod dto;

pub use dto::request::{
    AdminCredentials, ChapterForm, Complaint, Credentials, ImageUpload, PersonalDetailsUpdate,
    QuestionForm, QuizForm, QuizSubmission, SubjectForm,
};
pub use dto::response::{AdminLoginResponse, LoginResponse, ProfileUpdateResponse};
