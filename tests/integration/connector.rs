use daktela_api::rest::DaktelaConnector;

use super::common;

#[tokio::test]
#[ignore = "requires DAKTELA_INSTANCE"]
async fn test_whoim_without_token() {
    common::init_tracing();
    let daktela = DaktelaConnector::without_token(common::instance()).unwrap();

    let r = daktela.get("whoim", None).await.expect("whoim should succeed");
    assert_eq!(r.status, 200);
    assert_eq!(r.total, None);

    let data = r.data.expect("whoim returns an entity");
    assert!(!data["version"].is_null());
    assert!(data.get("user").is_some());
    assert!(data["user"].is_null());
}

#[tokio::test]
#[ignore = "requires DAKTELA_INSTANCE and DAKTELA_ACCESS_TOKEN"]
async fn test_whoim_with_cookie_auth() {
    let r = common::connector().get("whoim", None).await.unwrap();
    assert_eq!(r.status, 200);

    let data = r.data.unwrap();
    assert_eq!(
        data["user"]["_sys"]["accessToken"],
        serde_json::json!(common::access_token())
    );
}

#[tokio::test]
#[ignore = "requires DAKTELA_INSTANCE and DAKTELA_ACCESS_TOKEN"]
async fn test_whoim_with_query_token() {
    let r = common::query_token_connector()
        .get("whoim", None)
        .await
        .unwrap();
    assert_eq!(r.status, 200);
    assert!(!r.data.unwrap()["user"].is_null());
}

#[tokio::test]
#[ignore = "requires DAKTELA_INSTANCE and DAKTELA_ACCESS_TOKEN"]
async fn test_errors_are_normalized() {
    let daktela = common::connector();

    let err = daktela.get("xxx", None).await.unwrap_err();
    assert!(err.status().is_some());

    let err = daktela.get("tickets/xxx", None).await.unwrap_err();
    assert!(err.status().is_some());

    let err = daktela
        .post(
            "login",
            &serde_json::json!({"username": "xyz", "password": "-123"}),
            None,
        )
        .await
        .unwrap_err();
    assert!(err.status().is_some());
}
