use crate::db::backend::UserBackend;
use crate::db::codec::{self, LineWarning};
use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::text::{split_csv, trim};

/// Membership fee charged once when an account is created
pub const DEFAULT_REGISTRATION_FEE: f64 = 9.99;

/// In-memory collection of every known user, mirrored to a backend
///
/// Users are kept in insertion order, which is also the order they are
/// written back in. The backend is read once in [`UserStore::load`] and
/// rewritten in full after each mutation.
pub struct UserStore<B> {
    backend: B,
    users: Vec<User>,
    registration_fee: f64,
    load_warnings: Vec<LineWarning>,
}

impl<B: UserBackend> UserStore<B> {
    /// Loads all users from the backend
    ///
    /// A backend with nothing stored yields an empty store. Records with an
    /// unparseable fee are kept with a zero fee and reported through
    /// [`UserStore::load_warnings`].
    pub fn load(backend: B, registration_fee: f64) -> AppResult<Self> {
        let report = match backend.read()? {
            Some(contents) => codec::decode_all(&contents),
            None => codec::LoadReport::default(),
        };

        tracing::info!(
            users = report.users.len(),
            warnings = report.warnings.len(),
            "User store loaded"
        );

        Ok(Self {
            backend,
            users: report.users,
            registration_fee,
            load_warnings: report.warnings,
        })
    }

    /// Rewrites the backend with one line per user, in store order
    pub fn save(&mut self) -> AppResult<()> {
        let contents = codec::encode_all(&self.users);
        self.backend.write(&contents)?;
        tracing::debug!(users = self.users.len(), "User store saved");
        Ok(())
    }

    /// Exact, case-sensitive username lookup
    pub fn exists(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Creates a new account with the store's registration fee and saves
    ///
    /// Username and password are trimmed first, matching how they are read
    /// back from storage.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        genres_raw: &str,
    ) -> AppResult<&User> {
        let username = trim(username);
        let password = trim(password);

        if username.is_empty() {
            return Err(AppError::InvalidInput("username must not be empty".to_string()));
        }
        validate_field("username", username)?;
        validate_field("password", password)?;
        validate_field("genres", genres_raw)?;

        if self.exists(username) {
            tracing::info!(username = %username, "Registration rejected, username taken");
            return Err(AppError::AlreadyExists(username.to_string()));
        }

        self.users.push(User::new(
            username,
            password,
            split_csv(genres_raw),
            self.registration_fee,
        ));
        if let Err(e) = self.save() {
            self.users.pop();
            return Err(e);
        }

        tracing::info!(username = %username, "User registered");
        self.users
            .last()
            .ok_or_else(|| AppError::NotFound(format!("user {}", username)))
    }

    /// Returns the first user whose username and password both match exactly
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }

    /// Like [`UserStore::authenticate`], but a miss is [`AppError::AuthFailed`]
    pub fn login(&self, username: &str, password: &str) -> AppResult<&User> {
        self.authenticate(username, password).ok_or_else(|| {
            tracing::info!(username = %username, "Login failed");
            AppError::AuthFailed
        })
    }

    /// Replaces a user's genre preferences and saves the whole store
    ///
    /// If the store cannot be saved the previous genres are kept.
    pub fn update_genres(&mut self, username: &str, genres_raw: &str) -> AppResult<&User> {
        validate_field("genres", genres_raw)?;

        let index = self
            .users
            .iter()
            .position(|u| u.username == username)
            .ok_or_else(|| AppError::NotFound(format!("user {}", username)))?;

        let previous = std::mem::replace(&mut self.users[index].genres, split_csv(genres_raw));
        if let Err(e) = self.save() {
            self.users[index].genres = previous;
            return Err(e);
        }

        tracing::info!(
            username = %username,
            genres = self.users[index].genres.len(),
            "Genre preferences updated"
        );
        Ok(&self.users[index])
    }

    /// All users in store order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn registration_fee(&self) -> f64 {
        self.registration_fee
    }

    /// Records that were recovered with a default fee during load
    pub fn load_warnings(&self) -> &[LineWarning] {
        &self.load_warnings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Rejects values the line format cannot carry
fn validate_field(name: &str, value: &str) -> AppResult<()> {
    if value.contains(|c: char| c == codec::FIELD_SEPARATOR || c == '\r' || c == '\n') {
        return Err(AppError::InvalidInput(format!(
            "{} must not contain '{}' or line breaks",
            name,
            codec::FIELD_SEPARATOR
        )));
    }
    Ok(())
}
