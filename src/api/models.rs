use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    /// The recipe to generate. Absent and empty are treated alike so both
    /// hit the validation path rather than a deserialization rejection.
    #[serde(default)]
    pub query: String,
    /// Dietary preference (e.g., vegetarian, vegan)
    pub diet_preference: Option<String>,
    /// Type of cuisine (e.g., Italian, Mexican)
    pub cuisine_type: Option<String>,
}

impl RecipeRequest {
    pub fn is_valid(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningResource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub recipe: String,
    pub image_url: String,
    pub learning_resources: Vec<LearningResource>,
}
