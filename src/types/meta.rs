use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata block returned with every NWOpen API page.
#[derive(Serialize, Deserialize)]
pub struct Metadata {
    /// Name of the call.
    pub api_type: String,
    /// Version of the API.
    pub version: String,
    /// API release date.
    pub release_date: Option<NaiveDate>,
    /// Crossref-ID of NWO.
    pub funder: String,
    /// ROR-id of NWO.
    pub ror_id: String,
    /// Date the API call was made.
    pub date: Option<NaiveDate>,
    /// Number of rows that make up the result.
    pub count: Option<i64>,
    /// The maximum number of rows returned per call.
    pub per_page: Option<i64>,
    /// Number of pages that make up the result.
    pub pages: Option<i64>,
    /// The returned page number.
    pub page: Option<i64>,
}

impl Metadata {
    /// Merges the metadata of two pages of one logical query: the counts add
    /// up, every other field takes the later page's value.
    ///
    /// The count stays unset when either page lacks one; the caller backfills
    /// it from the merged project list.
    pub fn combine(self, other: Metadata) -> Metadata {
        Metadata {
            count: match (self.count, other.count) {
                (Some(own), Some(theirs)) => Some(own + theirs),
                _ => None,
            },
            ..other
        }
    }
}
