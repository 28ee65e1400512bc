pub mod title;
pub mod user;

pub use title::Title;
pub use user::User;
