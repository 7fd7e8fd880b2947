use axum::{
    http::{
        header::{COOKIE, SET_COOKIE, USER_AGENT},
        HeaderMap, Method, StatusCode,
    },
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

use wallet_user_agent::{ClientFactory, ClientIdentity, Error, HttpClient};

async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    let user_agents: Vec<String> = headers
        .get_all(USER_AGENT)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();

    Json(json!({
        "method": method.as_str(),
        "user_agents": user_agents,
        "cookie": headers.get(COOKIE).and_then(|v| v.to_str().ok()),
        "request_id": headers.get("x-request-id").and_then(|v| v.to_str().ok()),
        "body": body,
    }))
}

async fn login() -> impl IntoResponse {
    ([(SET_COOKIE, "session=abc; Path=/")], "ok")
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/echo", any(echo))
        .route("/login", get(login))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn tagged_client() -> HttpClient {
    let identity = ClientIdentity::new("Wallet", 42, "android", "13");
    ClientFactory::new(Some(identity)).build().unwrap()
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_get_is_tagged() {
    let addr = spawn_server().await;
    let client = tagged_client();

    let response = client.get(&format!("http://{}/echo", addr)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let echoed = json_body(response.body());
    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["user_agents"], json!(["Wallet$42 android/13"]));
}

#[tokio::test]
async fn test_post_keeps_everything_but_user_agent() {
    let addr = spawn_server().await;
    let client = tagged_client();

    let request = http::Request::post(format!("http://{}/echo", addr))
        .header(USER_AGENT, "OkHttp/4.9")
        .header("x-request-id", "7")
        .body(reqwest::Body::from("hello"))
        .unwrap();
    let response = client.send(request).await.unwrap();

    let echoed = json_body(response.body());
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["user_agents"], json!(["Wallet$42 android/13"]));
    assert_eq!(echoed["request_id"], "7");
    assert_eq!(echoed["body"], "hello");
}

#[tokio::test]
async fn test_absent_identity_leaves_user_agent_alone() {
    let addr = spawn_server().await;
    let client = ClientFactory::new(None).build().unwrap();

    let request = http::Request::get(format!("http://{}/echo", addr))
        .header(USER_AGENT, "OkHttp/4.9")
        .body(reqwest::Body::from(Vec::new()))
        .unwrap();
    let response = client.send(request).await.unwrap();
    assert_eq!(json_body(response.body())["user_agents"], json!(["OkHttp/4.9"]));

    // reqwest itself sends no User-Agent unless asked to
    let response = client.get(&format!("http://{}/echo", addr)).await.unwrap();
    assert_eq!(json_body(response.body())["user_agents"], json!([]));
}

#[tokio::test]
async fn test_cookies_are_stored_and_replayed() {
    let addr = spawn_server().await;
    let client = tagged_client();
    let base = format!("http://{}", addr);

    let response = client.get(&format!("{}/login", base)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let url: reqwest::Url = base.parse().unwrap();
    assert_eq!(client.cookies(&url).as_deref(), Some("session=abc"));

    // a clone shares the same jar
    let response = client.clone().get(&format!("{}/echo", base)).await.unwrap();
    let echoed = json_body(response.body());
    assert_eq!(echoed["cookie"], "session=abc");
    assert_eq!(echoed["user_agents"], json!(["Wallet$42 android/13"]));
}

#[tokio::test]
async fn test_error_status_is_a_response() {
    let addr = spawn_server().await;
    let client = tagged_client();

    let response = client.get(&format!("http://{}/missing", addr)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = tagged_client();
    let err = client.get(&format!("http://{}/echo", addr)).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "unexpected error: {:?}", err);
}
