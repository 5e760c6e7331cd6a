pub mod audience;
pub mod authorizer;

pub use audience::Audience;
pub use authorizer::{authorize, select_bearer};
