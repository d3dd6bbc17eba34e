//! Google Books client for remote volume searches
//!
//! Uses reqwest to talk to the public volumes endpoint.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{
    config::GoogleBooksConfig,
    error::{AppError, AppResult},
    models::GoogleBook,
};

/// Envelope around the volume list in a search response.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<GoogleBook>,
}

#[derive(Clone)]
pub struct GoogleBooksClient {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleBooksClient {
    /// Build a client from configuration. The request timeout bounds every
    /// search so a stalled upstream cannot hold a handler open indefinitely.
    pub fn new(config: &GoogleBooksConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Search volumes by title, returning the upstream items untouched.
    pub async fn search(&self, title: &str) -> AppResult<Vec<GoogleBook>> {
        tracing::debug!("Google Books search - title: {}", title);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", title)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Google Books returned status {}", status);
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(|e| AppError::UpstreamDecode(e.to_string()))?;

        tracing::debug!("Google Books returned {} volumes", parsed.items.len());
        Ok(parsed.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::SocketAddr;

    use axum::{extract::RawQuery, http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    const FAKE_RESPONSE: &str = r#"{
        "items": [
            {
                "id": "abc123",
                "volumeInfo": {
                    "title": "Harry Potter and the Sorcerer's Stone",
                    "authors": ["J.K. Rowling"],
                    "description": "A young wizard discovers his heritage."
                }
            }
        ]
    }"#;

    async fn serve(router: Router) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr, timeout_seconds: u64) -> GoogleBooksClient {
        GoogleBooksClient::new(&GoogleBooksConfig {
            base_url: format!("http://{}/books/v1/volumes", addr),
            timeout_seconds,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn search_returns_upstream_volumes_untouched() {
        let addr = serve(Router::new().route("/books/v1/volumes", get(|| async { FAKE_RESPONSE })))
            .await;

        let books = client_for(addr, 5).search("Harry Potter").await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "abc123");
        assert_eq!(
            books[0].volume_info.title,
            "Harry Potter and the Sorcerer's Stone"
        );
        assert_eq!(books[0].volume_info.authors, vec!["J.K. Rowling"]);
        assert_eq!(
            books[0].volume_info.description,
            "A young wizard discovers his heritage."
        );
    }

    #[tokio::test]
    async fn search_escapes_the_title_in_the_query_string() {
        // Echo the raw query back as a volume id so the test can see
        // exactly what reached the wire.
        let addr = serve(Router::new().route(
            "/books/v1/volumes",
            get(|RawQuery(query): RawQuery| async move {
                format!(
                    r#"{{"items": [{{"id": {:?}}}]}}"#,
                    query.unwrap_or_default()
                )
            }),
        ))
        .await;

        let books = client_for(addr, 5).search("harry potter").await.unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, "q=harry+potter");
    }

    #[tokio::test]
    async fn non_ok_status_maps_to_upstream_status() {
        let addr = serve(Router::new().route(
            "/books/v1/volumes",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        ))
        .await;

        let err = client_for(addr, 5).search("anything").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamStatus(500)));
    }

    #[tokio::test]
    async fn malformed_body_maps_to_upstream_decode() {
        let addr =
            serve(Router::new().route("/books/v1/volumes", get(|| async { "not json at all" })))
                .await;

        let err = client_for(addr, 5).search("anything").await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamDecode(_)));
    }

    #[tokio::test]
    async fn response_without_items_decodes_to_no_volumes() {
        let addr = serve(Router::new().route("/books/v1/volumes", get(|| async { "{}" }))).await;

        let books = client_for(addr, 5).search("anything").await.unwrap();

        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn stalled_upstream_hits_the_client_timeout() {
        let addr = serve(Router::new().route(
            "/books/v1/volumes",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        ))
        .await;

        let err = client_for(addr, 1).search("anything").await.unwrap_err();

        match err {
            AppError::UpstreamRequest(e) => assert!(e.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn callers_can_abandon_a_slow_search() {
        let addr = serve(Router::new().route(
            "/books/v1/volumes",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                "{}"
            }),
        ))
        .await;

        let client = client_for(addr, 30);
        let result =
            tokio::time::timeout(Duration::from_millis(200), client.search("anything")).await;

        assert!(result.is_err(), "abandoned search should not have completed");
    }
}
