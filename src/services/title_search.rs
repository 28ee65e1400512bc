use crate::{models::Title, text::contains_ignore_case};

/// Filters for a catalogue search; an empty field matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Substring to look for in the title name
    pub name: String,
    /// Substring to look for in any of the title's genres
    pub genre: String,
}

impl SearchQuery {
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
        }
    }

    fn matches(&self, title: &Title) -> bool {
        let name_ok = self.name.is_empty() || contains_ignore_case(&title.name, &self.name);
        let genre_ok = self.genre.is_empty()
            || title
                .genres
                .iter()
                .any(|g| contains_ignore_case(g, &self.genre));
        name_ok && genre_ok
    }
}

/// Searches the catalogue by name and genre
///
/// Unlike recommendations, both filters are ASCII case-insensitive substring
/// matches. Results are ordered by rating, highest first; equal ratings keep
/// their catalogue order.
pub fn search(catalogue: &[Title], query: &SearchQuery) -> Vec<Title> {
    let mut results: Vec<Title> = catalogue
        .iter()
        .filter(|title| query.matches(title))
        .cloned()
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    tracing::debug!(
        name = %query.name,
        genre = %query.genre,
        results = results.len(),
        "Catalogue searched"
    );

    results
}
