use futures::future::join_all;
use mockito::{Matcher, Server};
use pacer_http::{GateConfig, Headers, HttpClient, PacedClient, RequestExt};
use std::time::Duration;
use tokio::task::JoinError;

const INTERVAL: Duration = Duration::from_millis(100);

type Outcome = Result<http::Response<Vec<u8>>, pacer_http::Error>;

fn headers() -> Headers {
    Headers::from([
        (String::from("Authorization"), String::from("Bearer secret")),
        (String::from("Notion-Version"), String::from("2022-06-28")),
    ])
}

fn paced<T>(transport: T) -> PacedClient<T> {
    PacedClient::with_config(transport, GateConfig::new(INTERVAL))
}

async fn run_get(client: impl HttpClient + Send + Sync, url: String) -> Outcome {
    client.get(&url, &headers()).await
}

async fn run_post(client: impl HttpClient + Send + Sync, url: String) -> Outcome {
    client.post(&url, &headers(), &serde_json::json!({ "title": "foo" })).await
}

async fn run_patch(client: impl HttpClient + Send + Sync, url: String) -> Outcome {
    client.patch(&url, &headers(), &serde_json::json!({ "archived": true })).await
}

macro_rules! spawn_all {
    ($run:ident, $url:expr) => {
        vec![
            #[cfg(feature = "reqwest")]
            tokio::spawn($run(paced(crate::reqwest::ReqwestClient::new()), $url.clone())),
            #[cfg(feature = "isahc")]
            tokio::spawn($run(
                paced(crate::isahc::IsahcClient::new().expect("client should be successfully built")),
                $url.clone(),
            )),
        ]
    };
}

async fn collect(
    handles: Vec<tokio::task::JoinHandle<Outcome>>,
) -> Vec<Result<Outcome, JoinError>> {
    join_all(handles).await
}

#[tokio::test]
async fn send_get() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock_ok = server
        .mock("GET", "/v1/pages/abc")
        .match_header("authorization", "Bearer secret")
        .match_header("notion-version", "2022-06-28")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"object": "page"}"#)
        .create_async()
        .await;
    let mock_rate_limited = server
        .mock("GET", "/v1/pages/limited")
        .with_status(429)
        .with_body(r#"{"code": "rate_limited"}"#)
        .create_async()
        .await;

    // Ok
    {
        let url = format!("{}/v1/pages/abc", server.url());
        let results = collect(spawn_all!(run_get, url)).await;
        let len = results.len();
        for result in results {
            let response = result?.expect("response should be ok");
            assert_eq!(response.status(), 200);
            assert_eq!(response.headers()["content-type"], "application/json");
            assert_eq!(response.body(), br#"{"object": "page"}"#);
        }
        mock_ok.expect(len).assert_async().await;
    }
    // Error status is passed through
    {
        let url = format!("{}/v1/pages/limited", server.url());
        let results = collect(spawn_all!(run_get, url)).await;
        let len = results.len();
        for result in results {
            let response = result?.expect("status codes are not errors");
            assert_eq!(response.status(), 429);
            assert_eq!(response.body(), br#"{"code": "rate_limited"}"#);
        }
        mock_rate_limited.expect(len).assert_async().await;
    }
    Ok(())
}

#[tokio::test]
async fn send_post_and_patch() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock_post = server
        .mock("POST", "/v1/pages")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(r#"{"title": "foo"}"#.into()))
        .with_status(200)
        .with_body(r#"{"id": "abc"}"#)
        .create_async()
        .await;
    let mock_patch = server
        .mock("PATCH", "/v1/pages/abc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::JsonString(r#"{"archived": true}"#.into()))
        .with_status(200)
        .with_body(r#"{"id": "abc", "archived": true}"#)
        .create_async()
        .await;

    // Create
    {
        let url = format!("{}/v1/pages", server.url());
        let results = collect(spawn_all!(run_post, url)).await;
        let len = results.len();
        for result in results {
            let response = result?.expect("response should be ok");
            assert_eq!(response.body(), br#"{"id": "abc"}"#);
        }
        mock_post.expect(len).assert_async().await;
    }
    // Update
    {
        let url = format!("{}/v1/pages/abc", server.url());
        let results = collect(spawn_all!(run_patch, url)).await;
        let len = results.len();
        for result in results {
            let response = result?.expect("response should be ok");
            assert_eq!(response.status(), 200);
        }
        mock_patch.expect(len).assert_async().await;
    }
    Ok(())
}

#[tokio::test]
async fn connection_error_is_passed_through() -> Result<(), Box<dyn std::error::Error>> {
    // nothing listens on the discard port
    let url = String::from("http://127.0.0.1:9/v1/users");
    for result in collect(spawn_all!(run_get, url)).await {
        let error = result?.expect_err("request should fail");
        assert!(matches!(error, pacer_http::Error::HttpClient(_)), "got {error:?}");
    }
    Ok(())
}

#[cfg(feature = "reqwest")]
#[tokio::test]
async fn requests_are_spaced() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = Server::new_async().await;
    let mock = server.mock("GET", "/v1/users").with_status(200).create_async().await;
    let client = paced(crate::reqwest::ReqwestClient::new());
    let url = format!("{}/v1/users", server.url());
    let begin = std::time::Instant::now();
    for _ in 0..3 {
        client.get(&url, &Headers::new()).await?;
    }
    assert!(begin.elapsed() >= INTERVAL * 2, "{:?}", begin.elapsed());
    mock.expect(3).assert_async().await;
    Ok(())
}
