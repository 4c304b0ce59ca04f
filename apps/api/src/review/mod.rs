// Resume review: ATS analysis, achievement suggestions, rewrite.
// All completion calls go through llm_client — handlers never call the API directly.

pub mod handlers;
pub mod prompts;
