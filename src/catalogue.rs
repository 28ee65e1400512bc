use crate::models::Title;

/// Returns the built-in catalogue
///
/// Every call yields the same titles in the same order; nothing here reads
/// from disk or mutates between calls.
pub fn seed() -> Vec<Title> {
    vec![
        Title::new("Midnight Runner", &["Action", "Thriller", "Crime"], "English", 8.1),
        Title::new("Love in Kyoto", &["Romance", "Drama"], "Japanese", 7.4),
        Title::new("Galaxy Guard", &["Sci-Fi", "Action", "Adventure"], "English", 8.7),
        Title::new("Culinary Quest", &["Documentary", "Food"], "Korean", 7.9),
        Title::new("Haunted Apartment", &["Horror", "Thriller"], "Malay", 6.9),
        Title::new("The Last Samurai", &["Action", "History", "Drama"], "Japanese", 8.5),
        Title::new("Beyond the Stars", &["Sci-Fi", "Mystery"], "English", 7.6),
        Title::new("Rings of Power", &["Fantasy", "Adventure"], "English", 8.0),
    ]
}
