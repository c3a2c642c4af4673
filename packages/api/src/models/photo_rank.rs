use serde::{Deserialize, Serialize};

/// Date range of a weekly contest, `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRankCreateRequest {
    pub start_date: String,
    pub end_date: String,
}

/// Outcome of one contest bracket played by a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRankUpdateRequest {
    /// Photos the user picked in a match.
    pub selected_ids: Vec<i64>,
    /// Photos that were shown in a match.
    pub exposed_ids: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoRank {
    pub id: i64,
    pub file_url: String,
    #[serde(default)]
    pub selected_count: u32,
    #[serde(default)]
    pub exposed_count: u32,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl PhotoRank {
    /// `selected/exposed`, as shown on the enlarged result photo.
    pub fn selection_ratio(&self) -> String {
        format!("{}/{}", self.selected_count, self.exposed_count)
    }
}
