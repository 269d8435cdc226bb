use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::runtime::Runtime;

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Treats an explicit JSON null like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn genres_absent(genres: &Option<Vec<String>>) -> bool {
    genres.as_ref().map_or(true, |g| g.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub year: i32,
    #[serde(default, skip_serializing_if = "Runtime::is_zero")]
    pub runtime: Runtime,
    #[serde(default, skip_serializing_if = "genres_absent")]
    pub genres: Option<Vec<String>>,
    /// Starts at 1 and is incremented on every successful update
    pub version: i32,
}

/// Request body for creating a movie. Missing or null fields fall back to
/// zero values so that validation reports them.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieInput {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub year: i32,
    #[serde(default)]
    pub runtime: Runtime,
    #[serde(default, alias = "generes")]
    pub genres: Option<Vec<String>>,
}

/// Partial update; absent fields keep their current value
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub runtime: Option<Runtime>,
    #[serde(alias = "generes")]
    pub genres: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct MovieEnvelope {
    pub movie: Movie,
}
