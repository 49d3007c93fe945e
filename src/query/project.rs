//! Fluent builder for project searches: filter accumulation, query-string
//! rendering, and multi-page execution.

use chrono::NaiveDate;

use crate::{
    types::{Project, QueryResult},
    Client, Error,
};

/// The fixed number of results per page served by the upstream API.
const PAGE_SIZE: u32 = 100;

/// Page selection rendered into one query string: either a 1-based page
/// number at the full upstream page size, or a smaller single-page size.
enum PageParam {
    Number(u32),
    PerPage(u32),
}

/// Fluent builder for project searches.
///
/// Each `with_*` setter may be called at most once per builder; a second call
/// fails with [`Error::DuplicateFilter`]. String filter values are wrapped in
/// literal double quotes (the upstream convention requesting exact-phrase
/// matching) and percent-encoded before storage, so rendering never encodes
/// twice.
///
/// The builder stays usable after [`execute`](ProjectQuery::execute); running
/// the same query again issues the same requests.
#[derive(Default, Clone)]
pub struct ProjectQuery {
    organisation: Option<String>,
    title: Option<String>,
    title_exact: bool,
    role: Option<String>,
    member_last_name: Option<String>,
    start_date_from: Option<NaiveDate>,
    start_date_until: Option<NaiveDate>,
    end_date_from: Option<NaiveDate>,
    end_date_until: Option<NaiveDate>,
    number_of_results: Option<u32>,
}

impl ProjectQuery {
    /// Filter by project organisation.
    pub fn with_organisation(mut self, organisation: &str) -> Result<Self, Error> {
        if self.organisation.is_some() {
            return Err(Error::DuplicateFilter("organisation"));
        }
        self.organisation = Some(quote(organisation));
        Ok(self)
    }

    /// Filter by project title.
    ///
    /// The upstream API matches titles by substring. With `exact` set, any
    /// project whose title is not identical to the submitted filter value is
    /// dropped client-side after the merge.
    pub fn with_title(mut self, title: &str, exact: bool) -> Result<Self, Error> {
        if self.title.is_some() {
            return Err(Error::DuplicateFilter("title"));
        }
        self.title_exact = exact;
        self.title = Some(quote(title));
        Ok(self)
    }

    /// Filter by project member role.
    pub fn with_role(mut self, role: &str) -> Result<Self, Error> {
        if self.role.is_some() {
            return Err(Error::DuplicateFilter("role"));
        }
        self.role = Some(quote(role));
        Ok(self)
    }

    /// Filter by project member last name.
    pub fn with_member_last_name(mut self, last_name: &str) -> Result<Self, Error> {
        if self.member_last_name.is_some() {
            return Err(Error::DuplicateFilter("last name"));
        }
        self.member_last_name = Some(quote(last_name));
        Ok(self)
    }

    /// Set the beginning of the project start date range.
    pub fn with_start_date_from(mut self, from: NaiveDate) -> Result<Self, Error> {
        if self.start_date_from.is_some() {
            return Err(Error::DuplicateFilter("start date from"));
        }
        self.start_date_from = Some(from);
        Ok(self)
    }

    /// Set the end of the project start date range.
    pub fn with_start_date_until(mut self, until: NaiveDate) -> Result<Self, Error> {
        if self.start_date_until.is_some() {
            return Err(Error::DuplicateFilter("start date until"));
        }
        self.start_date_until = Some(until);
        Ok(self)
    }

    /// Set the beginning of the project end date range.
    pub fn with_end_date_from(mut self, from: NaiveDate) -> Result<Self, Error> {
        if self.end_date_from.is_some() {
            return Err(Error::DuplicateFilter("end date from"));
        }
        self.end_date_from = Some(from);
        Ok(self)
    }

    /// Set the end of the project end date range.
    pub fn with_end_date_until(mut self, until: NaiveDate) -> Result<Self, Error> {
        if self.end_date_until.is_some() {
            return Err(Error::DuplicateFilter("end date until"));
        }
        self.end_date_until = Some(until);
        Ok(self)
    }

    /// Set the number of results to return. Must be greater than zero; the
    /// value check runs before the duplicate check and never changes the
    /// builder.
    pub fn with_number_of_results(mut self, number_of_results: u32) -> Result<Self, Error> {
        if number_of_results == 0 {
            return Err(Error::InvalidNumberOfResults);
        }
        if self.number_of_results.is_some() {
            return Err(Error::DuplicateFilter("number of results"));
        }
        self.number_of_results = Some(number_of_results);
        Ok(self)
    }

    /// Renders the accumulated filters into one query string per page.
    ///
    /// Without a result count one full page is requested. A count below the
    /// upstream page size becomes a single `per_page` query; anything larger
    /// becomes one `page=<n>` query per page, rounding up.
    pub fn build_queries(&self) -> Vec<String> {
        let results = match self.number_of_results {
            Some(results) => results,
            None => return vec![self.render(PageParam::PerPage(PAGE_SIZE))],
        };

        if results < PAGE_SIZE {
            return vec![self.render(PageParam::PerPage(results))];
        }

        let mut pages = results / PAGE_SIZE;
        if results % PAGE_SIZE > 0 {
            pages += 1;
        }

        (1..=pages)
            .map(|page| self.render(PageParam::Number(page)))
            .collect()
    }

    /// Executes the query against the given client.
    ///
    /// Pages are fetched sequentially in query order. A page the API answers
    /// with JSON `null` is skipped; when every page is absent the overall
    /// result is `None`. Present pages merge left-to-right, the count is
    /// backfilled from the merged project list when the upstream never set
    /// it, and the exact-title post-filter runs last when requested.
    pub async fn execute(&self, client: &Client) -> Result<Option<QueryResult>, Error> {
        let mut pages = Vec::new();
        for query in self.build_queries() {
            if let Some(page) = client.perform_query(&query).await? {
                pages.push(page);
            }
        }

        let mut result = match pages.into_iter().reduce(QueryResult::combine) {
            Some(result) => result,
            None => return Ok(None),
        };

        if result.metadata.count.is_none() {
            result.metadata.count = Some(result.projects.len() as i64);
        }

        if self.title_exact {
            result = self.filter_title_exact(result);
        }

        Ok(Some(result))
    }

    /// Client-side correction for the upstream title filter: only projects
    /// whose title is byte-identical to the stored filter value survive, and
    /// the count becomes the survivor count.
    fn filter_title_exact(&self, result: QueryResult) -> QueryResult {
        let title = self.title.as_deref().unwrap_or_default();
        let projects: Vec<Project> = result
            .projects
            .into_iter()
            .filter(|project| project.title == title)
            .collect();

        let mut metadata = result.metadata;
        metadata.count = Some(projects.len() as i64);

        QueryResult { metadata, projects }
    }

    fn render(&self, page: PageParam) -> String {
        let mut components = vec![match page {
            PageParam::Number(page) => format!("page={}", page),
            PageParam::PerPage(size) => format!("per_page={}", size),
        }];

        if let Some(organisation) = &self.organisation {
            components.push(format!("organisation={}", organisation));
        }
        if let Some(title) = &self.title {
            components.push(format!("title={}", title));
        }
        if let Some(role) = &self.role {
            components.push(format!("role={}", role));
        }
        if let Some(last_name) = &self.member_last_name {
            components.push(format!("last_name={}", last_name));
        }
        if let Some(from) = self.start_date_from {
            components.push(format!("rs_start_date={}", format_date(from)));
        }
        if let Some(until) = self.start_date_until {
            components.push(format!("re_start_date={}", format_date(until)));
        }
        if let Some(from) = self.end_date_from {
            components.push(format!("rs_end_date={}", format_date(from)));
        }
        if let Some(until) = self.end_date_until {
            components.push(format!("re_end_date={}", format_date(until)));
        }

        components.join("&")
    }
}

/// Wraps a filter value in literal double quotes and percent-encodes it for
/// URL transmission.
fn quote(value: &str) -> String {
    urlencoding::encode(&format!("\"{}\"", value)).into_owned()
}

/// `YYYY-MM-DD`, the only date format the upstream accepts. The rendered
/// form contains no characters needing percent-encoding.
fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
