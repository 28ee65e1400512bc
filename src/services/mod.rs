pub mod recommendations;
pub mod title_search;

pub use recommendations::recommend;
pub use title_search::{search, SearchQuery};
