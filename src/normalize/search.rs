//! List-shaped payloads: recipe search results and tags.

use super::{display_rating, non_empty, recipe_title};
use crate::models::upstream::{RawRecipe, RawRecipeList, RawTagList};
use crate::models::{Recipe, SearchResult, Tag, TagList};

/// Normalizes a `/recipes/list` payload.
///
/// `total` is upstream's `count`, or the page length when absent.
pub fn normalize_search_results(raw: RawRecipeList) -> SearchResult {
    let results: Vec<Recipe> = raw
        .results
        .unwrap_or_default()
        .into_iter()
        .map(recipe_summary)
        .collect();

    SearchResult {
        total: raw.count.unwrap_or(results.len() as u64),
        results,
    }
}

fn recipe_summary(item: RawRecipe) -> Recipe {
    Recipe {
        title: recipe_title(&item),
        image: item.thumbnail_url,
        description: item.description.unwrap_or_default(),
        // Upstream reports 0 when the time is unknown
        total_time: item
            .total_time_minutes
            .filter(|m| *m > 0)
            .map(|m| format!("{} min", m)),
        yields: item
            .num_servings
            .filter(|n| *n > 0)
            .map(|n| format!("{} servings", n)),
        rating: display_rating(item.user_ratings.as_ref()),
        id: item.id,
    }
}

/// Normalizes a `/tags/list` payload, dropping tags with no usable name.
pub fn normalize_tags(raw: RawTagList) -> TagList {
    let results = raw
        .results
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| {
            let name = non_empty(tag.name.as_deref()).map(str::to_string);
            let display_name = non_empty(tag.display_name.as_deref())
                .map(str::to_string)
                .or_else(|| name.clone())?;

            Some(Tag {
                id: tag.id,
                name: name.unwrap_or_else(|| display_name.clone()),
                display_name,
                kind: tag.kind.unwrap_or_default(),
            })
        })
        .collect();

    TagList { results }
}
