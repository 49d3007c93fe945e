mod meta;
pub use self::meta::Metadata;

mod result;
pub use self::result::QueryResult;

mod project;
pub use self::project::{Author, Product, Project, ProjectMember, SummaryUpdate};
