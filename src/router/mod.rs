pub mod guard;
pub mod routes;

pub use guard::{Navigation, NavigationGuard};
pub use routes::{Access, Redirect, Route, RouteMatch, RouteTable, ENTRY_PATH};
