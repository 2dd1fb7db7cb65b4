/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a professional chef who provides detailed recipes with ingredients, instructions, nutritional information, and cooking tips. Format your responses in markdown.";

/// Fixed formatting instructions appended to every recipe prompt.
const FORMAT_INSTRUCTIONS: &str = "\n\nFormat the recipe in markdown with the following sections:
    1. Brief Description
    2. Ingredients (as a bulleted list)
    3. Instructions (as numbered steps)
    4. Tips (as a bulleted list)
    5. Nutritional Information (as a bulleted list)
    
    Use markdown formatting like:
    - Headers (###)
    - Bold text (**)
    - Lists (- and 1.)
    - Sections (>)
    ";

pub fn build_recipe_prompt(
    query: &str,
    diet_preference: Option<&str>,
    cuisine_type: Option<&str>,
) -> String {
    // Pre-allocate for the fixed suffix plus the query and clauses
    let mut prompt = String::with_capacity(FORMAT_INSTRUCTIONS.len() + query.len() + 80);
    prompt.push_str("Create a detailed recipe for ");
    prompt.push_str(query);

    if let Some(diet) = diet_preference {
        prompt.push_str(" that is ");
        prompt.push_str(diet);
    }

    if let Some(cuisine) = cuisine_type {
        prompt.push_str(" in ");
        prompt.push_str(cuisine);
        prompt.push_str(" style");
    }

    prompt.push_str(FORMAT_INSTRUCTIONS);
    prompt
}

/// Prompt for the image model. Takes the raw query only; the diet and
/// cuisine clauses are never part of the image prompt.
pub fn build_image_prompt(query: &str) -> String {
    format!("Professional food photography of {query}, appetizing, high-quality, restaurant style")
}
