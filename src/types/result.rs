use serde::{Deserialize, Serialize};

use super::{Metadata, Project};

/// One decoded API response, or the merged combination of several pages.
#[derive(Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "meta")]
    pub metadata: Metadata,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl QueryResult {
    /// Merges two pages of one logical query: projects concatenate in page
    /// order, metadata per [`Metadata::combine`].
    pub fn combine(self, other: QueryResult) -> QueryResult {
        let mut projects = self.projects;
        projects.extend(other.projects);
        QueryResult {
            metadata: self.metadata.combine(other.metadata),
            projects,
        }
    }
}
