use crate::{
    models::{Title, User},
    text::equals_ignore_case,
};

/// Generates genre-matched recommendations for a user
///
/// A title is recommended when any of its genres equals any of the user's
/// preferred genres, ignoring ASCII case. Partial matches do not count:
/// a preference for "Act" does not match "Action".
///
/// Titles are returned in catalogue order. An empty result is a normal
/// outcome for users whose genres match nothing.
pub fn recommend(user: &User, catalogue: &[Title]) -> Vec<Title> {
    let recommendations: Vec<Title> = catalogue
        .iter()
        .filter(|title| matches_any_genre(title, &user.genres))
        .cloned()
        .collect();

    tracing::debug!(
        username = %user.username,
        matches = recommendations.len(),
        "Recommendations generated"
    );

    recommendations
}

fn matches_any_genre(title: &Title, preferred: &[String]) -> bool {
    title
        .genres
        .iter()
        .any(|genre| preferred.iter().any(|p| equals_ignore_case(genre, p)))
}
