use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::http::FormPayload;

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Admin login uses its own field names on the wire.
#[derive(Clone, Serialize)]
pub struct AdminCredentials {
    #[serde(rename = "ausername")]
    pub username: String,
    #[serde(rename = "apassword")]
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectForm {
    pub subject_name: String,
    pub description: String,
}

impl SubjectForm {
    pub fn to_form(&self) -> FormPayload {
        FormPayload::new()
            .text("subject", &self.subject_name)
            .text("description", &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterForm {
    #[serde(rename = "chapter")]
    pub chapter_name: String,
    #[serde(rename = "sub_id")]
    pub subject_id: String,
    pub description: String,
}

impl ChapterForm {
    pub fn to_form(&self) -> FormPayload {
        FormPayload::new()
            .text("chapter", &self.chapter_name)
            .text("sub_id", &self.subject_id)
            .text("description", &self.description)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizForm {
    pub date: String,
    pub chapter_id: String,
    /// Duration as entered, e.g. `"00:30"`.
    pub duration: String,
}

impl QuizForm {
    pub fn to_form(&self) -> FormPayload {
        FormPayload::new()
            .text("date", &self.date)
            .text("chapter_id", &self.chapter_id)
            .text("duration", &self.duration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionForm {
    pub question_text: String,
    pub chapter_id: String,
    pub options: [String; 4],
    /// Number of the correct option, `"1"` to `"4"`.
    pub correct_option: String,
}

impl QuestionForm {
    pub fn to_form(&self) -> FormPayload {
        let form = FormPayload::new()
            .text("question_text", &self.question_text)
            .text("chapter_id", &self.chapter_id);

        self.options
            .iter()
            .enumerate()
            .fold(form, |form, (i, option)| {
                form.text(format!("option{}", i + 1), option)
            })
            .text("correct_option", &self.correct_option)
    }
}

/// Answers for one attempt, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSubmission {
    pub answers: BTreeMap<String, String>,
    pub time_taken: String,
}

impl QuizSubmission {
    pub fn answer(mut self, question_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        self.answers.insert(question_id.into(), option_id.into());
        self
    }

    pub fn to_form(&self) -> FormPayload {
        self.answers
            .iter()
            .fold(FormPayload::new(), |form, (question_id, option_id)| {
                form.text(format!("question_{}", question_id), option_id)
            })
            .text("time_taken", &self.time_taken)
    }
}

/// Profile edit. Only the fields that are set are sent; `current_password`
/// is always required by the backend.
#[derive(Clone, Default, Serialize)]
pub struct PersonalDetailsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(rename = "name", skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(rename = "password1", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(rename = "password")]
    pub current_password: String,
}

impl fmt::Debug for PersonalDetailsUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonalDetailsUpdate")
            .field("username", &self.username)
            .field("dob", &self.dob)
            .field("qualification", &self.qualification)
            .field("fullname", &self.fullname)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Complaint {
    pub name: String,
    pub issue: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn to_form(&self) -> FormPayload {
        FormPayload::new().file(
            "image",
            &self.file_name,
            &self.content_type,
            self.bytes.clone(),
        )
    }
}
