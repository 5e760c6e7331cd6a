pub mod client;
pub mod form;
pub mod transport;

pub use client::{require_id, ApiClient};
pub use form::{FormField, FormPayload};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, RequestBody, Transport};
