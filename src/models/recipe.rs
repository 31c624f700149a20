//! Normalized recipe contract
//!
//! The stable JSON shapes returned to the front-end.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Summary of a recipe, as shown in lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Value,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    /// e.g. `"20 min"`
    pub total_time: Option<String>,
    /// e.g. `"4 servings"`
    pub yields: Option<String>,
    /// Display rating on a 0-5 scale
    pub rating: Option<u8>,
}

/// Envelope for list-returning actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<Recipe>,
    pub total: u64,
}

/// Full recipe, as shown on a recipe page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    pub id: Value,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub total_time_minutes: Option<u32>,
    pub servings: Option<u32>,
    /// Directly hosted video; takes rendering priority over `youtube_url`
    pub video_url: Option<String>,
    pub youtube_url: Option<String>,
    pub rating: Option<u8>,
    pub nutrition: Option<Value>,
    pub tags: Vec<String>,
}

/// A recipe tag. Field names follow the upstream spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Value,
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagList {
    pub results: Vec<Tag>,
}
