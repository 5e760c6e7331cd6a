use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};

use quizmaster_client::{
    auth::{authorize, select_bearer, Audience},
    errors::StorageError,
    http::{ApiRequest, RequestBody},
    router::{Access, Navigation, NavigationGuard, RouteTable, ENTRY_PATH},
    session::{SessionStore, TokenStorage, USER_ID_KEY},
};

/// Storage that records every key it is asked about, standing in for a
/// browser's local storage.
#[derive(Default)]
struct RecordingStorage {
    entries: Mutex<HashMap<String, String>>,
    reads: Mutex<Vec<String>>,
}

impl RecordingStorage {
    fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl TokenStorage for RecordingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.reads.lock().unwrap().push(key.to_string());
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

fn session(admin: Option<&str>, student: Option<&str>) -> SessionStore {
    let session = SessionStore::new(Arc::new(RecordingStorage::default()));
    if let Some(token) = admin {
        session.set_token(Audience::Admin, &secret(token)).unwrap();
    }
    if let Some(token) = student {
        session.set_token(Audience::Student, &secret(token)).unwrap();
    }
    session
}

/// A concrete path for every route pattern in the table.
fn sample_paths(access: Access) -> Vec<String> {
    RouteTable::quiz_platform()
        .routes()
        .iter()
        .filter(|route| route.access == access)
        .map(|route| {
            route
                .path
                .split('/')
                .map(|segment| if segment.starts_with(':') { "1" } else { segment })
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

#[test]
fn test_tokens_live_under_fixed_keys() {
    let storage = Arc::new(RecordingStorage::default());
    let session = SessionStore::new(storage.clone());

    session.set_token(Audience::Student, &secret("s")).unwrap();
    session.set_token(Audience::Admin, &secret("a")).unwrap();
    session.set_user_id("7").unwrap();

    assert_eq!(storage.get("token").as_deref(), Some("s"));
    assert_eq!(storage.get("adminToken").as_deref(), Some("a"));
    assert_eq!(storage.get(USER_ID_KEY).as_deref(), Some("7"));
}

#[test]
fn test_round_trip_per_audience() {
    for audience in [Audience::Student, Audience::Admin] {
        let session = session(None, None);
        session.set_token(audience, &secret("value-1")).unwrap();
        assert_eq!(session.token(audience).unwrap().expose_secret(), "value-1");

        session.clear_token(audience).unwrap();
        assert!(session.token(audience).is_none());
    }
}

#[test]
fn test_precedence_law() {
    let cases = [
        (Some("a"), Some("s"), Some("a")),
        (Some("a"), None, Some("a")),
        (None, Some("s"), Some("s")),
        (None, None, None),
    ];

    for (admin, student, expected) in cases {
        let session = session(admin, student);
        let request = authorize(
            ApiRequest::new(Method::GET, "/api/livequiz", RequestBody::Empty),
            &session,
        );
        assert_eq!(request.bearer_token(), expected);
        assert_eq!(
            select_bearer(&session).map(|(_, token)| token.expose_secret().to_string()),
            expected.map(str::to_string)
        );
    }
}

#[test]
fn test_authorizer_checks_admin_first() {
    let storage = Arc::new(RecordingStorage::default());
    let session = SessionStore::new(storage.clone());
    session.set_token(Audience::Admin, &secret("a")).unwrap();

    select_bearer(&session);

    // With an admin token present the student key is never consulted.
    assert_eq!(storage.reads(), vec!["adminToken".to_string()]);
}

#[test]
fn test_guard_over_every_route() {
    let admin_paths = sample_paths(Access::Requires(Audience::Admin));
    let student_paths = sample_paths(Access::Requires(Audience::Student));
    let public_paths = sample_paths(Access::Public);

    for (admin, student) in [
        (None, None),
        (Some("a"), None),
        (None, Some("s")),
        (Some("a"), Some("s")),
    ] {
        let guard = NavigationGuard::new(RouteTable::quiz_platform(), session(admin, student));

        for path in &admin_paths {
            check(&guard, path, admin.is_some());
        }
        for path in &student_paths {
            check(&guard, path, student.is_some());
        }
        for path in &public_paths {
            check(&guard, path, true);
        }
    }
}

fn check(guard: &NavigationGuard, path: &str, allowed: bool) {
    match guard.navigate(path) {
        Navigation::Proceed(matched) => {
            assert!(allowed, "{} should have been refused", path);
            assert_eq!(matched.path, path);
        }
        Navigation::Redirect { to, from } => {
            assert!(!allowed, "{} should have proceeded", path);
            assert_eq!(to, ENTRY_PATH);
            assert_eq!(from, path);
        }
        Navigation::NotFound(p) => panic!("{} did not match any route", p),
    }
}
