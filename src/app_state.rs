use std::sync::Arc;

use crate::{
    config::Config,
    errors::ApiResult,
    http::{ApiClient, ReqwestTransport, Transport},
    router::{NavigationGuard, RouteTable},
    services::{
        AdminService, AuthService, ChapterService, QuestionService, QuizService, StudentService,
        SubjectService,
    },
    session::SessionStore,
};

/// Everything a front end needs, wired to one shared session.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: SessionStore,
    pub guard: NavigationGuard,
    pub auth: Arc<AuthService>,
    pub student: Arc<StudentService>,
    pub admin: Arc<AdminService>,
    pub quizzes: Arc<QuizService>,
    pub subjects: Arc<SubjectService>,
    pub chapters: Arc<ChapterService>,
    pub questions: Arc<QuestionService>,
}

impl AppState {
    pub fn new(config: Config) -> ApiResult<Self> {
        let transport = Arc::new(ReqwestTransport::from_config(&config)?);
        let session = SessionStore::from_config(&config);

        log::info!("Quiz API client targeting {}", config.api_base_url);
        Ok(Self::with_transport(config, transport, session))
    }

    pub fn with_transport(
        config: Config,
        transport: Arc<dyn Transport>,
        session: SessionStore,
    ) -> Self {
        let api = ApiClient::new(transport, session.clone());

        Self {
            config: Arc::new(config),
            guard: NavigationGuard::new(RouteTable::quiz_platform(), session.clone()),
            session,
            auth: Arc::new(AuthService::new(api.clone())),
            student: Arc::new(StudentService::new(api.clone())),
            admin: Arc::new(AdminService::new(api.clone())),
            quizzes: Arc::new(QuizService::new(api.clone())),
            subjects: Arc::new(SubjectService::new(api.clone())),
            chapters: Arc::new(ChapterService::new(api.clone())),
            questions: Arc::new(QuestionService::new(api)),
        }
    }
}
