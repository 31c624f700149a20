//! Raw upstream payloads
//!
//! Mirrors the parts of the recipe API's JSON that the normalizer reads.
//! Every field is optional. Scalars of the wrong type degrade to `None`;
//! only a structural mismatch (an object where a list belongs) fails to
//! deserialize.

use serde::Deserialize;
use serde_json::Value;

/// Response of `/recipes/list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecipeList {
    #[serde(deserialize_with = "lenient::count")]
    pub count: Option<u64>,
    pub results: Option<Vec<RawRecipe>>,
}

/// A recipe as returned by `/recipes/list` items and `/recipes/get-more-info`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecipe {
    pub id: Value,
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub thumbnail_url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::uint")]
    pub total_time_minutes: Option<u32>,
    #[serde(deserialize_with = "lenient::uint")]
    pub num_servings: Option<u32>,
    pub user_ratings: Option<RawUserRatings>,
    pub sections: Option<Vec<RawSection>>,
    pub instructions: Option<Vec<RawInstruction>>,
    #[serde(deserialize_with = "lenient::string")]
    pub original_video_url: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub video_url: Option<String>,
    pub credits: Option<Vec<RawCredit>>,
    pub nutrition: Option<Value>,
    pub tags: Option<Vec<RawTag>>,
}

/// Aggregate user rating; `score` is on a 0-1 scale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawUserRatings {
    #[serde(deserialize_with = "lenient::float")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSection {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    pub components: Option<Vec<RawComponent>>,
}

/// One ingredient line inside a section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComponent {
    #[serde(deserialize_with = "lenient::string")]
    pub raw_text: Option<String>,
    pub ingredient: Option<RawIngredient>,
    pub measurements: Option<Vec<RawMeasurement>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawIngredient {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMeasurement {
    #[serde(deserialize_with = "lenient::string")]
    pub quantity: Option<String>,
    pub unit: Option<RawUnit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawUnit {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub display_singular: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub display_plural: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInstruction {
    #[serde(deserialize_with = "lenient::string")]
    pub display_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCredit {
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTag {
    pub id: Value,
    #[serde(deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub display_name: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: Option<String>,
}

/// Response of `/tags/list`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTagList {
    pub results: Option<Vec<RawTag>>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::{Number, Value};

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn uint<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        Ok(non_negative(Value::deserialize(d)?).and_then(|v| u32::try_from(v).ok()))
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u64>, D::Error> {
        Ok(non_negative(Value::deserialize(d)?))
    }

    pub fn float<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let parsed = match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        };
        Ok(parsed.filter(|f| f.is_finite()))
    }

    fn non_negative(value: Value) -> Option<u64> {
        match value {
            Value::Number(n) => from_number(&n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn from_number(n: &Number) -> Option<u64> {
        n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.round() as u64)
        })
    }
}
