use serde::{Deserialize, Serialize};

/// Represents a movie or TV show in the catalogue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    /// Display name of the title
    pub name: String,
    /// Genre tags, as written in the catalogue
    pub genres: Vec<String>,
    /// Spoken language
    pub language: String,
    /// Average rating out of 10
    pub rating: f64,
}

impl Title {
    /// Creates a new title
    pub fn new(name: &str, genres: &[&str], language: &str, rating: f64) -> Self {
        Self {
            name: name.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            language: language.to_string(),
            rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_title() {
        let title = Title::new("Galaxy Guard", &["Sci-Fi", "Action"], "English", 8.7);
        assert_eq!(title.name, "Galaxy Guard");
        assert_eq!(title.genres, vec!["Sci-Fi", "Action"]);
        assert_eq!(title.language, "English");
        assert_eq!(title.rating, 8.7);
    }

    #[test]
    fn test_title_serde() {
        let title = Title::new("Love in Kyoto", &["Romance", "Drama"], "Japanese", 7.4);
        let json = serde_json::to_string(&title).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Love in Kyoto","genres":["Romance","Drama"],"language":"Japanese","rating":7.4}"#
        );

        let deserialized: Title = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, title);
    }
}
