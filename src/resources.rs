use crate::api::models::LearningResource;

/// Build the two static learning resource links for a recipe query.
///
/// The entries are synthesized, not looked up anywhere: a video link on the
/// cooking-school host and an article link on the recipes host, both keyed by
/// a slug of the query.
pub fn learning_resources(query: &str) -> Vec<LearningResource> {
    let slug = slugify(query);

    vec![
        LearningResource {
            title: format!("Master the Art of {query}"),
            url: format!("https://cooking-school.example.com/learn/{slug}"),
            resource_type: "video".to_string(),
        },
        LearningResource {
            title: format!("Tips and Tricks for Perfect {query}"),
            url: format!("https://recipes.example.com/tips/{slug}"),
            resource_type: "article".to_string(),
        },
    ]
}

// Lowercase with spaces replaced by hyphens. Other characters pass through.
fn slugify(query: &str) -> String {
    query.to_lowercase().replace(' ', "-")
}
