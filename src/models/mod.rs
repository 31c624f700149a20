//! Data models for the recipe proxy
//!
//! Split into the inbound query parameters, the raw upstream payloads, the
//! normalized recipe contract, and the operational response bodies.

pub mod recipe;
pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use recipe::{Recipe, RecipeDetails, SearchResult, Tag, TagList};
pub use requests::{Action, ActionQuery, SearchParams};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use upstream::{RawRecipe, RawRecipeList, RawTagList};
