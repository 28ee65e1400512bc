//! Text-menu front end.
//!
//! The shell only reads lines, calls into the store and the matching
//! services, and renders what they return. Session state is the username
//! of the logged-in user, held for the duration of [`Shell::user_menu`].

use std::io::{BufRead, Write};

use crate::{
    db::{UserBackend, UserStore},
    error::{AppError, AppResult},
    models::Title,
    services::{recommend, search, SearchQuery},
    text::{join_csv, trim},
};

pub struct Shell<B, R, W> {
    store: UserStore<B>,
    catalogue: Vec<Title>,
    input: R,
    output: W,
}

impl<B, R, W> Shell<B, R, W>
where
    B: UserBackend,
    R: BufRead,
    W: Write,
{
    pub fn new(store: UserStore<B>, catalogue: Vec<Title>, input: R, output: W) -> Self {
        Self {
            store,
            catalogue,
            input,
            output,
        }
    }

    pub fn store(&self) -> &UserStore<B> {
        &self.store
    }

    /// Consumes the shell, returning the store and the output sink
    pub fn into_parts(self) -> (UserStore<B>, W) {
        (self.store, self.output)
    }

    /// Runs the main menu until the user exits or input ends
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "Welcome to Afterflix!")?;

        loop {
            write!(self.output, "\nMain menu:\n1) Register\n2) Login\n3) Exit\n")?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.register()?,
                "2" => self.login()?,
                "3" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }

        Ok(())
    }

    fn register(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Register ---")?;
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(());
        };
        if self.store.exists(trim(&username)) {
            writeln!(self.output, "Username already taken.")?;
            return Ok(());
        }
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(());
        };
        let Some(genres) = self.prompt(
            "Enter preferred genres (comma-separated, e.g., Action, Drama, Sci-Fi): ",
        )?
        else {
            return Ok(());
        };

        let message = match self.store.register(&username, &password, &genres) {
            Ok(user) => format!(
                "Membership fee is ${} per month (charged once at registration).\nRegistration successful! Welcome, {}.",
                user.membership_fee, user.username
            ),
            Err(AppError::AlreadyExists(_)) => "Username already taken.".to_string(),
            Err(e @ AppError::InvalidInput(_)) => e.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Registration failed");
                format!("Registration failed: {}", e)
            }
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn login(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Login ---")?;
        let Some(username) = self.prompt("Username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Password: ")? else {
            return Ok(());
        };

        let session = self
            .store
            .login(&username, &password)
            .map(|user| user.username.clone());

        match session {
            Ok(username) => {
                writeln!(self.output, "Login successful.")?;
                self.user_menu(&username)
            }
            Err(_) => {
                writeln!(self.output, "Invalid login.")?;
                Ok(())
            }
        }
    }

    fn user_menu(&mut self, username: &str) -> AppResult<()> {
        loop {
            write!(
                self.output,
                "\nWelcome {}!\n1) See recommendations\n2) Change preferences\n3) Search/Filter catalogue\n4) Logout\n",
                username
            )?;
            let Some(choice) = self.prompt("Choice: ")? else {
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.show_recommendations(username)?,
                "2" => self.change_preferences(username)?,
                "3" => self.search_catalogue()?,
                "4" => {
                    writeln!(self.output, "Logging out...")?;
                    return Ok(());
                }
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter 1, 2, 3, or 4."
                )?,
            }
        }
    }

    fn show_recommendations(&mut self, username: &str) -> AppResult<()> {
        writeln!(self.output, "\n--- Recommendations for {} ---", username)?;

        let titles = match self.store.get(username) {
            Some(user) => recommend(user, &self.catalogue),
            None => Vec::new(),
        };

        if titles.is_empty() {
            writeln!(
                self.output,
                "No current recommendations match your preferences. Try updating your genres!"
            )?;
        }
        for title in &titles {
            writeln!(self.output, "{}", recommendation_line(title))?;
        }
        Ok(())
    }

    fn change_preferences(&mut self, username: &str) -> AppResult<()> {
        writeln!(self.output, "\n--- Change Preferences ---")?;
        let current = self
            .store
            .get(username)
            .map(|u| join_csv(&u.genres))
            .unwrap_or_default();
        writeln!(self.output, "Current genres: {}", current)?;

        let Some(genres) = self.prompt("Enter new genres (comma-separated): ")? else {
            return Ok(());
        };

        match self.store.update_genres(username, &genres) {
            Ok(_) => writeln!(self.output, "Preferences updated successfully.")?,
            Err(e) => {
                tracing::error!(error = %e, username = %username, "Preference update failed");
                writeln!(self.output, "Could not update preferences: {}", e)?;
            }
        }
        Ok(())
    }

    fn search_catalogue(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- Search & Filter Catalogue ---")?;
        let Some(name) =
            self.prompt("Enter title search term (e.g., 'Runner', leave blank to skip): ")?
        else {
            return Ok(());
        };
        let Some(genre) =
            self.prompt("Enter genre to filter by (e.g., 'Action', leave blank to skip): ")?
        else {
            return Ok(());
        };

        let results = search(&self.catalogue, &SearchQuery::new(name, genre));

        if results.is_empty() {
            writeln!(self.output, "\nNo titles found matching your criteria.")?;
            return Ok(());
        }

        writeln!(
            self.output,
            "\n--- Search Results ({} found) ---",
            results.len()
        )?;
        for title in &results {
            writeln!(self.output, "{}", search_line(title))?;
        }
        Ok(())
    }

    /// Writes a prompt and reads one line; `None` once input is exhausted
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

fn recommendation_line(title: &Title) -> String {
    format!(
        "- {} (Genres: {}, Lang: {}, Rating: {})",
        title.name,
        join_csv(&title.genres),
        title.language,
        title.rating
    )
}

fn search_line(title: &Title) -> String {
    format!(
        "- {} | Genres: {} | Lang: {} | Rating: {}",
        title.name,
        join_csv(&title.genres),
        title.language,
        title.rating
    )
}
