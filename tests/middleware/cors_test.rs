#[path = "../common/mod.rs"]
#[macro_use]
mod common;

use actix_web::{http::header, test};
use common::{state, StubCompletionClient};
use serde_json::json;

fn allow_origin(resp: &actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>) -> Option<String> {
    resp.headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .map(|v| v.to_str().unwrap().to_string())
}

#[actix_web::test]
async fn test_allowed_origin_receives_cors_headers() {
    let stub = StubCompletionClient::replying("X");
    let app = gateway_app!(state(&stub));

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header((header::ORIGIN, "https://xfz-chatbot-frontend.pages.dev"))
        .set_json(json!({ "query": "{ hello }" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(allow_origin(&resp).as_deref(), Some("https://xfz-chatbot-frontend.pages.dev"));
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[actix_web::test]
async fn test_every_configured_origin_is_allowed() {
    let stub = StubCompletionClient::replying("X");
    let app = gateway_app!(state(&stub));

    for origin in ["http://localhost:5173", "https://xfz-chatbot-frontend.pages.dev", "api.yideng.shop"] {
        let req = test::TestRequest::post()
            .uri("/")
            .insert_header((header::ORIGIN, origin))
            .set_json(json!({ "query": "{ hello }" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(allow_origin(&resp).as_deref(), Some(origin), "origin {}", origin);
    }
}

#[actix_web::test]
async fn test_preflight_from_allowed_origin() {
    let stub = StubCompletionClient::replying("X");
    let app = gateway_app!(state(&stub));

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(allow_origin(&resp).as_deref(), Some("http://localhost:5173"));
    let methods = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(methods.contains("POST"));
    assert!(methods.contains("GET"));
    assert_eq!(stub.calls(), 0);
}

#[actix_web::test]
async fn test_unknown_origin_is_not_allowed() {
    let stub = StubCompletionClient::replying("X");
    let app = gateway_app!(state(&stub));

    let req = test::TestRequest::post()
        .uri("/")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .set_json(json!({ "query": "{ hello }" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_ne!(allow_origin(&resp).as_deref(), Some("https://evil.example"));
}

#[actix_web::test]
async fn test_preflight_from_unknown_origin_is_not_allowed() {
    let stub = StubCompletionClient::replying("X");
    let app = gateway_app!(state(&stub));

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_ne!(allow_origin(&resp).as_deref(), Some("https://evil.example"));
}

#[actix_web::test]
async fn test_origin_match_is_exact() {
    let stub = StubCompletionClient::replying("X");
    let app = gateway_app!(state(&stub));

    // the bare host entry does not cover its https origin
    let req = test::TestRequest::post()
        .uri("/")
        .insert_header((header::ORIGIN, "https://api.yideng.shop"))
        .set_json(json!({ "query": "{ hello }" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(allow_origin(&resp).is_none());
}
