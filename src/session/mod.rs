pub mod storage;
pub mod store;

pub use storage::{FileStorage, MemoryStorage, TokenStorage};
pub use store::{SessionStore, USER_ID_KEY};
