pub mod backend;
pub mod codec;
pub mod user_store;

pub use backend::{FileBackend, MemoryBackend, UserBackend};
pub use user_store::{UserStore, DEFAULT_REGISTRATION_FEE};
