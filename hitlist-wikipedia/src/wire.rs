//! MediaWiki action API payloads. Only the fields the lookup reads.

use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub pageid: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    pub query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    #[serde(default)]
    pub pages: HashMap<String, Page>,
}

#[derive(Debug, Deserialize)]
pub struct Page {
    pub extract: Option<String>,
}
