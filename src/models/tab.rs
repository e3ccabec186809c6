use serde::{Deserialize, Deserializer, Serialize};

/// One hit from a tab search.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResultItem {
    pub id: i64,
    #[serde(rename = "song_name")]
    pub song_title: String,
    pub artist_name: String,
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResponse {
    pub results: Vec<SearchResultItem>,
}

/// A single tab with its chord sheet. `content` is trimmed at both ends.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TabDetail {
    pub id: i64,
    #[serde(rename = "song_name")]
    pub song_title: String,
    pub artist_name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub category: String,
}

/// Metadata recovered from a public tab page URL.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TabUrlMetadata {
    pub id: Option<i64>,
    #[serde(rename = "song_name")]
    pub song_title: String,
    pub artist_name: String,
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorPayload {
    #[serde(rename = "error")]
    pub message: String,
}

impl ErrorPayload {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorPayload {
            message: message.into(),
        }
    }
}

// Upstream wire shapes. Missing or null fields decode to their zero value.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct UpstreamSearchResponse {
    pub results: Option<Vec<UpstreamSearchResult>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct UpstreamSearchResult {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub song_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct UpstreamTab {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub song_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

impl UpstreamSearchResponse {
    pub fn into_items(self) -> Vec<SearchResultItem> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .map(SearchResultItem::from)
            .collect()
    }
}

impl From<UpstreamSearchResult> for SearchResultItem {
    fn from(raw: UpstreamSearchResult) -> Self {
        SearchResultItem {
            id: raw.id,
            song_title: raw.song_name,
            artist_name: raw.artist_name,
            category: raw.kind,
        }
    }
}

impl From<UpstreamTab> for TabDetail {
    fn from(raw: UpstreamTab) -> Self {
        TabDetail {
            id: raw.id,
            song_title: raw.song_name,
            artist_name: raw.artist_name,
            content: raw.content.trim().to_string(),
            category: raw.kind,
        }
    }
}
