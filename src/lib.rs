pub mod app_state;
pub mod auth;
pub mod config;
pub mod errors;
pub mod http;
pub mod models;
pub mod router;
pub mod services;
pub mod session;

#[cfg(test)]
pub mod test_utils;
