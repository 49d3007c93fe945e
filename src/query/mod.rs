mod project;
pub use self::project::ProjectQuery;
