use daktela_api::rest::{RequestOptions, SimpleFilter};
use serde::Deserialize;

use super::common;

#[derive(Debug, Deserialize)]
struct Status {
    name: String,
    title: String,
    description: Option<String>,
}

/// Full lifecycle of a status record, run as one test so the steps stay in
/// order.
#[tokio::test]
#[ignore = "requires DAKTELA_INSTANCE and DAKTELA_ACCESS_TOKEN"]
async fn test_status_crud() {
    let daktela = common::connector();
    let suffix = common::unique_suffix();
    let name = format!("name_{suffix}");
    let title = format!("title_{suffix}");
    let endpoint = format!("statuses/{name}");

    // Create
    let r = daktela
        .post(
            "statuses",
            &serde_json::json!({"name": name, "title": title}),
            None,
        )
        .await
        .expect("create should succeed");
    assert_eq!(r.status, 201);
    let created: Status = r.json().unwrap();
    assert_eq!(created.name, name);
    assert_eq!(created.title, title);

    // Read one
    let r = daktela.get(&endpoint, None).await.unwrap();
    assert_eq!(r.status, 200);
    assert_eq!(r.json::<Status>().unwrap().title, title);

    // Read list
    let options = RequestOptions::new().filters([SimpleFilter::new("name", "eq", name.as_str())]);
    let r = daktela.get("statuses", Some(&options)).await.unwrap();
    assert_eq!(r.status, 200);
    assert_eq!(r.total, Some(1));
    let rows: Vec<Status> = r.records().unwrap();
    assert_eq!(rows[0].name, name);
    assert_eq!(rows[0].title, title);

    // Update
    let r = daktela
        .put(&endpoint, &serde_json::json!({"description": "test XXX"}), None)
        .await
        .unwrap();
    assert_eq!(r.status, 200);
    let updated: Status = r.json().unwrap();
    assert_eq!(updated.name, name);
    assert_eq!(updated.description.as_deref(), Some("test XXX"));

    // Delete
    let r = daktela.delete(&endpoint, None).await.unwrap();
    assert_eq!(r.status, 204);
    assert_eq!(r.data, None);
}
