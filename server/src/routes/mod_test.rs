use super::*;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_without_leptos_config() {
    let _router = api_routes(crate::state::test_helpers::test_app_state());
}
