//! Response Normalizer
//!
//! Pure transforms from raw upstream payloads into the stable recipe
//! contract. None of them fail: every missing field degrades to `None`,
//! an empty string or an empty list.

mod details;
mod search;

pub use details::normalize_recipe_details;
pub use search::{normalize_search_results, normalize_tags};

use crate::models::upstream::{RawRecipe, RawUserRatings};

/// Title used when upstream provides neither `name` nor `title`.
pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

/// Highest value of the display rating scale.
const RATING_SCALE: f64 = 5.0;

/// Rescales a 0-1 upstream score to a rounded 0-5 display rating.
pub fn display_rating(ratings: Option<&RawUserRatings>) -> Option<u8> {
    let score = ratings?.score?;
    Some((score * RATING_SCALE).round().clamp(0.0, RATING_SCALE) as u8)
}

/// `name`, then `title`, then the placeholder.
fn recipe_title(raw: &RawRecipe) -> String {
    non_empty(raw.name.as_deref())
        .or_else(|| non_empty(raw.title.as_deref()))
        .unwrap_or(UNTITLED_RECIPE)
        .to_string()
}

/// Trimmed text, or `None` when blank.
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
