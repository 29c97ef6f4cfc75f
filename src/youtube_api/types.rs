//! Shared wire types for the YouTube API client.

use serde::Deserialize;

/// Response envelope shared by every list endpoint this crate consumes.
///
/// The contract assumed throughout: `{ items: [...], nextPageToken?: string }`,
/// where the token is an opaque continuation cursor omitted on the final
/// page.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    /// Resources matching the request criteria, in response order.
    pub items: Vec<T>,
    /// Cursor to pass as `pageToken` for the next page; absent when the
    /// result set is exhausted.
    #[serde(rename = "nextPageToken")]
    pub next_page_token: Option<String>,
    /// Paging details, when the endpoint reports them.
    #[serde(rename = "pageInfo")]
    pub page_info: Option<PageInfo>,
}

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults")]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage")]
    pub results_per_page: u32,
}
