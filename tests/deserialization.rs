use chrono::NaiveDate;
use nwopen_api::types::QueryResult;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_projects_full() {
    let json = load_fixture("projects.json");
    let result: QueryResult = serde_json::from_str(&json).unwrap();

    assert_eq!(result.metadata.api_type, "NWO Projects API");
    assert_eq!(result.metadata.version, "1.0.1");
    assert_eq!(result.metadata.funder, "501100003246");
    assert_eq!(
        result.metadata.release_date,
        NaiveDate::from_ymd_opt(2024, 5, 2)
    );
    assert_eq!(result.metadata.count, Some(1));
    assert_eq!(result.metadata.per_page, Some(100));

    assert_eq!(result.projects.len(), 1);
    let project = &result.projects[0];
    assert_eq!(project.project_id, "20447");
    assert_eq!(
        project.title,
        "Hybrid protein-lipid nanoparticles for targeted oligonucleotide delivery in endometriosis (HYPNODE)"
    );
    assert_eq!(project.funding_scheme_id, Some(4851));
    assert_eq!(project.grant_id, None);
    assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(project.end_date, None);

    let members = project.project_members.as_ref().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].last_name.as_deref(), Some("Mathur"));
    assert_eq!(members[0].member_id, Some(557530));
    assert_eq!(members[0].active, Some(true));
    assert_eq!(
        members[0].organisation.as_deref(),
        Some("Radboud universitair medisch centrum")
    );

    let products = project.products.as_ref().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].year, Some(2021));
    assert_eq!(
        products[0].product_type.as_deref(),
        Some("Wetenschappelijk artikel")
    );
    assert_eq!(
        products[0].journal_title.as_deref(),
        Some("The Astronomical Journal")
    );

    let authors = products[0].authors.as_ref().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0].last_name.as_deref(), Some("Spake"));
    assert_eq!(authors[0].role.as_deref(), Some("Auteur"));

    let updates = project.summary_updates.as_ref().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(
        updates[0].submission_date,
        NaiveDate::from_ymd_opt(2024, 4, 15)
    );
}

#[test]
fn deserialize_projects_empty() {
    let json = load_fixture("projects_empty.json");
    let result: QueryResult = serde_json::from_str(&json).unwrap();

    assert!(result.projects.is_empty());
    assert_eq!(result.metadata.count, Some(0));
    assert_eq!(result.metadata.pages, Some(0));
}

#[test]
fn deserialize_null_page_is_absent() {
    let result: Option<QueryResult> = serde_json::from_str("null").unwrap();
    assert!(result.is_none());
}

#[test]
fn deserialize_omitted_projects_defaults_to_empty() {
    let json = r#"{"meta": {
        "api_type": "NWO Projects API",
        "version": "1.0.1",
        "funder": "501100003246",
        "ror_id": "https://ror.org/04jsz6e67"
    }}"#;
    let result: QueryResult = serde_json::from_str(json).unwrap();
    assert!(result.projects.is_empty());
    assert_eq!(result.metadata.count, None);
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"meta": not valid json}"#;
    assert!(serde_json::from_str::<QueryResult>(bad_json).is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"meta": {"api_type": "NWO Projects API"}, "projects": []}"#;
    assert!(serde_json::from_str::<QueryResult>(json).is_err());
}
