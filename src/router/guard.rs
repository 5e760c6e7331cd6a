use std::sync::Arc;

use crate::{
    router::routes::{Access, RouteMatch, RouteTable, ENTRY_PATH},
    session::SessionStore,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed(RouteMatch),
    /// The required session is missing; go to the login page instead.
    Redirect { to: String, from: String },
    NotFound(String),
}

impl Navigation {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Proceed(_))
    }
}

/// Gates route changes on session presence.
///
/// Only checks that a token exists for the route's audience; it never calls
/// the backend, which still authorizes every request itself.
#[derive(Clone)]
pub struct NavigationGuard {
    routes: Arc<RouteTable>,
    session: SessionStore,
}

impl NavigationGuard {
    pub fn new(routes: RouteTable, session: SessionStore) -> Self {
        Self {
            routes: Arc::new(routes),
            session,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        let target = self.routes.redirect_for(path).unwrap_or(path);

        let Some(matched) = self.routes.resolve(target) else {
            return Navigation::NotFound(path.to_string());
        };

        match matched.access {
            Access::Public => Navigation::Proceed(matched),
            Access::Requires(audience) if self.session.has_token(audience) => {
                Navigation::Proceed(matched)
            }
            Access::Requires(audience) => {
                log::info!(
                    "No {} session for {}, redirecting to {}",
                    audience,
                    matched.path,
                    ENTRY_PATH
                );
                Navigation::Redirect {
                    to: ENTRY_PATH.to_string(),
                    from: matched.path,
                }
            }
        }
    }
}
