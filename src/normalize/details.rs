//! Recipe detail payloads from `/recipes/get-more-info`.

use serde_json::Value;

use super::{display_rating, non_empty, recipe_title};
use crate::models::upstream::{RawComponent, RawMeasurement, RawRecipe, RawUnit};
use crate::models::RecipeDetails;

/// Normalizes a single recipe payload.
///
/// Ingredients are flattened across sections in upstream order. Both video
/// fields are resolved independently: `video_url` from the hosted video
/// fields, `youtube_url` from the first credit linking to YouTube.
pub fn normalize_recipe_details(raw: RawRecipe) -> RecipeDetails {
    let title = recipe_title(&raw);
    let rating = display_rating(raw.user_ratings.as_ref());

    let ingredients = raw
        .sections
        .unwrap_or_default()
        .into_iter()
        .flat_map(|section| section.components.unwrap_or_default())
        .filter_map(ingredient_line)
        .collect();

    let steps = raw
        .instructions
        .unwrap_or_default()
        .into_iter()
        .filter_map(|step| non_empty(step.display_text.as_deref()).map(str::to_string))
        .collect();

    let video_url = non_empty(raw.original_video_url.as_deref())
        .or_else(|| non_empty(raw.video_url.as_deref()))
        .map(str::to_string);

    let youtube_url = raw
        .credits
        .unwrap_or_default()
        .into_iter()
        .filter_map(|credit| credit.url)
        .find(|url| url.contains("youtube"));

    let tags = raw
        .tags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|tag| {
            non_empty(tag.display_name.as_deref())
                .or_else(|| non_empty(tag.name.as_deref()))
                .map(str::to_string)
        })
        .collect();

    RecipeDetails {
        id: raw.id,
        title,
        image: raw.thumbnail_url,
        description: raw.description.unwrap_or_default(),
        ingredients,
        steps,
        total_time_minutes: raw.total_time_minutes,
        servings: raw.num_servings,
        video_url,
        youtube_url,
        rating,
        nutrition: nutrition(raw.nutrition),
        tags,
    }
}

/// `"<quantity> <unit> <name>"`, or the raw text when there is no name.
fn ingredient_line(component: RawComponent) -> Option<String> {
    let name = component
        .ingredient
        .as_ref()
        .and_then(|i| non_empty(i.name.as_deref()));

    let line = match name {
        Some(name) => {
            let measure = component
                .measurements
                .as_deref()
                .and_then(|m| m.first())
                .map(measurement_text)
                .unwrap_or_default();
            join_words(&[&measure, name])
        }
        None => non_empty(component.raw_text.as_deref())?.to_string(),
    };

    (!line.is_empty()).then_some(line)
}

fn measurement_text(measurement: &RawMeasurement) -> String {
    // "0" marks an unmeasured ingredient ("salt, to taste")
    let quantity = non_empty(measurement.quantity.as_deref()).filter(|q| *q != "0");
    let unit = match (quantity, measurement.unit.as_ref()) {
        (Some(q), Some(unit)) => unit_label(unit, q),
        _ => None,
    };

    join_words(&[quantity.unwrap_or_default(), unit.unwrap_or_default()])
}

fn unit_label<'a>(unit: &'a RawUnit, quantity: &str) -> Option<&'a str> {
    let preferred = if is_singular(quantity) {
        unit.display_singular.as_deref()
    } else {
        unit.display_plural.as_deref()
    };
    non_empty(preferred).or_else(|| non_empty(unit.name.as_deref()))
}

/// One or less: "1", "½", "1/4", "0.5".
fn is_singular(quantity: &str) -> bool {
    const VULGAR_FRACTIONS: &str = "½⅓⅔¼¾⅕⅖⅗⅘⅙⅚⅐⅛⅜⅝⅞⅑⅒";

    let quantity = quantity.trim();
    let mut chars = quantity.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if VULGAR_FRACTIONS.contains(c) {
            return true;
        }
    }

    if let Some((num, den)) = quantity.split_once('/') {
        return match (num.trim().parse::<u32>(), den.trim().parse::<u32>()) {
            (Ok(num), Ok(den)) => num > 0 && num <= den,
            _ => false,
        };
    }

    quantity
        .parse::<f64>()
        .is_ok_and(|q| q > 0.0 && q <= 1.0)
}

fn join_words(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps nutrition only when it is a non-empty object.
fn nutrition(raw: Option<Value>) -> Option<Value> {
    raw.filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
}
