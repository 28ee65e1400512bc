//! Afterflix: a small media catalogue with genre-matched recommendations.
//!
//! - [`db`] loads and persists user records in a line-oriented flat file.
//! - [`services`] matches users and search queries against the catalogue.
//! - [`shell`] is the interactive menu built on top of both.

pub mod catalogue;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod text;

pub use error::{AppError, AppResult};
