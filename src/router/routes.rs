use std::collections::HashMap;

use crate::auth::Audience;

/// Path of the login page every refused navigation lands on.
pub const ENTRY_PATH: &str = "/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Requires(Audience),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    /// Slash-separated pattern; `:name` segments capture a parameter.
    pub path: &'static str,
    pub access: Access,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: &'static str,
    pub path: String,
    pub access: Access,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
    redirects: Vec<Redirect>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, name: &'static str, path: &'static str, access: Access) -> Self {
        self.routes.push(Route { name, path, access });
        self
    }

    pub fn redirect(mut self, from: &'static str, to: &'static str) -> Self {
        self.redirects.push(Redirect { from, to });
        self
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The quiz platform's screens and who may open them.
    pub fn quiz_platform() -> Self {
        use Access::{Public, Requires};
        const STUDENT: Access = Requires(Audience::Student);
        const ADMIN: Access = Requires(Audience::Admin);

        Self::new()
            .route("Login", ENTRY_PATH, Public)
            .route("Dashboard", "/dashboard", STUDENT)
            .route("AdminDashboard", "/admindashboard", ADMIN)
            .route("AdminSubjects", "/adminsubjects", ADMIN)
            .route("AdminChapters", "/adminchapters", ADMIN)
            .route("AdminQuestions", "/adminquestions", ADMIN)
            .route("LiveQuiz", "/livequiz", STUDENT)
            // Instructions are readable before logging in.
            .route("QuizInstructions", "/quizinstructions/:quiz_id", Public)
            .route("StartQuiz", "/startquiz/:quiz_id", STUDENT)
            .route("Scores", "/scores/:quiz_id/:uid/:time_taken", STUDENT)
            .route("Transcript", "/transcript/:quiz_id/:uid", STUDENT)
            .route("Contact", "/contact", STUDENT)
            .route("AddQuiz", "/admin/quizzes/add", ADMIN)
            .route("EditQuiz", "/admin/quizzes/edit/:id", ADMIN)
            .route("AddSubject", "/admin/subjects/add", ADMIN)
            .route("AdminTranscript", "/admin/transcript/:quiz_id/:uid", ADMIN)
            .route("EditSubject", "/admin/subjects/edit/:id", ADMIN)
            .route("AddChapter", "/admin/chapters/add", ADMIN)
            .route("EditChapter", "/admin/chapters/edit/:id", ADMIN)
            .route("AddQuestion", "/admin/questions/add", ADMIN)
            .route("EditQuestion", "/admin/questions/edit/:id", ADMIN)
            .route("PersonalDetails", "/personal_details", STUDENT)
            .route("AdminStudentPersonal", "/admin/student/personal", ADMIN)
            .route("AcademicDetails", "/academic_details", STUDENT)
            .route("AdminStudentAcademic", "/admin/student/academic", ADMIN)
            .route("EditField", "/edit/:field", STUDENT)
            .redirect("/editcomplete", "/personal_details")
    }

    /// Target of a static redirect declared for `path`, if any.
    pub fn redirect_for(&self, path: &str) -> Option<&'static str> {
        let path = normalize(path);
        self.redirects
            .iter()
            .find(|r| normalize(r.from) == path)
            .map(|r| r.to)
    }

    /// First declared route whose pattern matches `path`. Query strings,
    /// fragments and trailing slashes are ignored.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = normalize(path);
        let segments = split(path);

        self.routes.iter().find_map(|route| {
            let pattern = split(route.path);
            if pattern.len() != segments.len() {
                return None;
            }

            let mut params = HashMap::new();
            for (expected, actual) in pattern.iter().zip(&segments) {
                match expected.strip_prefix(':') {
                    Some(name) => {
                        params.insert(name.to_string(), actual.to_string());
                    }
                    None if expected == actual => {}
                    None => return None,
                }
            }

            Some(RouteMatch {
                name: route.name,
                path: path.to_string(),
                access: route.access,
                params,
            })
        })
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ENTRY_PATH
    } else {
        trimmed
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
