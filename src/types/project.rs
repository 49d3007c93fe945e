use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One funding project as returned by the NWOpen API.
#[derive(Serialize, Deserialize)]
pub struct Project {
    /// File number of the project. A unique combination of numbers,
    /// letters and punctuation marks by which the file is identified.
    pub project_id: String,

    pub grant_id: Option<String>,

    /// Programme, when there is a programme with underlying projects.
    pub parent_project_id: Option<String>,

    /// Title of the project.
    pub title: String,

    /// ID of the call under which the project falls.
    pub funding_scheme_id: Option<i64>,

    /// Name of the call under which the project falls.
    pub funding_scheme: String,

    /// NWO domain under which the funding has been allocated to the project.
    pub department: String,

    /// NWO sub-domain under which the funding has been allocated to the project.
    pub sub_department: String,

    /// Actual start date of the project.
    pub start_date: Option<NaiveDate>,

    /// Actual completion date of the project.
    pub end_date: Option<NaiveDate>,

    /// Scientific summary of the project in Dutch.
    pub summary_nl: String,

    /// Scientific summary of the project in English.
    pub summary_en: String,

    pub summary_updates: Option<Vec<SummaryUpdate>>,

    pub project_members: Option<Vec<ProjectMember>>,

    pub products: Option<Vec<Product>>,
}

/// A person involved in a project.
#[derive(Serialize, Deserialize)]
pub struct ProjectMember {
    /// Role of the project member within the project.
    pub role: Option<String>,

    pub member_id: Option<i64>,

    /// ORCID of the project member, where NWO's data carries one.
    pub orcid: Option<String>,

    pub last_name: Option<String>,

    pub initials: Option<String>,

    pub first_name: Option<String>,

    /// Organisation where the member is working for the project.
    pub organisation: Option<String>,

    pub organisation_id: Option<i64>,

    /// Whether the member is still working on the project.
    pub active: Option<bool>,

    pub degree_pre_nominal: Option<String>,

    /// Insert before the name.
    pub prefix: Option<String>,

    pub degree_post_nominal: Option<String>,

    pub dai: Option<String>,

    /// ROR-id of the organisation the member attends the project for.
    pub ror: Option<String>,
}

/// A publication or other output originating from a project.
#[derive(Serialize, Deserialize)]
pub struct Product {
    pub title: Option<String>,

    /// Year of publication.
    pub year: Option<i32>,

    pub edition: Option<String>,

    /// First page of the publication in its medium.
    pub start: Option<i32>,

    /// Last page of the publication in its medium.
    pub end: Option<i32>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    /// Open access link to the publication.
    pub url_open_access: Option<String>,

    pub journal_title: Option<String>,

    pub authors: Option<Vec<Author>>,

    pub city: Option<String>,

    pub publisher: Option<String>,

    pub sub_title: Option<String>,

    pub isbn: Option<String>,

    pub doi: Option<String>,
}

/// An author of a product.
#[derive(Serialize, Deserialize)]
pub struct Author {
    pub last_name: Option<String>,

    pub initials: Option<String>,

    pub first_name: Option<String>,

    pub prefix: Option<String>,

    pub role: Option<String>,

    /// Index number of the author within the product.
    pub index_number: Option<i32>,
}

/// A dated update to a project's public summary.
#[derive(Serialize, Deserialize)]
pub struct SummaryUpdate {
    /// Date of submission of the summary update.
    pub submission_date: Option<NaiveDate>,

    pub update_en: Option<String>,

    pub update_nl: Option<String>,
}
