// ABOUTME: HTTP fetch layer producing FetchResult {status, url, final_url, body}.
// ABOUTME: Status is returned raw so each pipeline stage maps non-200 to its own error code.

use std::collections::HashMap;

use crate::error::ParseError;

/// Options for fetching a resource.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Extra per-request headers; User-Agent is set at the client level.
    pub headers: HashMap<String, String>,
}

/// Result of one GET, consumed immediately by the next pipeline stage.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status: u16,
    pub url: String,
    /// Address after any redirects the client followed.
    pub final_url: String,
    pub body: String,
}

/// Fetch a resource from the given URL.
///
/// Redirect behavior is a property of the passed `reqwest::Client`, not of
/// this call; the resolver holds one following client and one direct client.
pub async fn fetch(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
) -> Result<FetchResult, ParseError> {
    if url.is_empty() {
        return Err(ParseError::fetch(url, "Fetch", Some(anyhow::anyhow!("empty URL"))));
    }

    let parsed_url = url::Url::parse(url).map_err(|e| {
        ParseError::fetch(url, "Fetch", Some(anyhow::anyhow!("invalid URL: {}", e)))
    })?;

    let scheme = parsed_url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ParseError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("scheme must be http or https")),
        ));
    }

    let mut request = client.get(url);
    for (key, value) in &opts.headers {
        request = request.header(key, value);
    }

    let response = request.send().await.map_err(|e| {
        ParseError::fetch(url, "Fetch", Some(anyhow::anyhow!("request failed: {}", e)))
    })?;

    let status = response.status().as_u16();
    let final_url = response.url().to_string();

    let body = response.text().await.map_err(|e| {
        ParseError::fetch(
            url,
            "Fetch",
            Some(anyhow::anyhow!("failed to read body: {}", e)),
        )
    })?;

    Ok(FetchResult {
        status,
        url: url.to_string(),
        final_url,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn create_test_client() -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent("test-agent")
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn fetch_returns_status_and_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/test");
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("hello");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/test"), &FetchOptions::default()).await;
        mock.assert();

        let result = result.expect("fetch should succeed");
        assert_eq!(result.status, 200);
        assert_eq!(result.body, "hello");
        assert!(result.final_url.ends_with("/test"));
    }

    #[tokio::test]
    async fn fetch_does_not_reject_non_200() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/gone");
            then.status(404).body("not found");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/gone"), &FetchOptions::default()).await;
        mock.assert();

        // Status mapping is the caller's job; the fetch layer just reports it.
        let result = result.expect("non-200 is not a fetch error");
        assert_eq!(result.status, 404);
    }

    #[tokio::test]
    async fn fetch_reports_redirect_status_when_not_following() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/share/video/123");
            then.status(302).header("location", "https://example.com/elsewhere");
        });

        let client = create_test_client();
        let result = fetch(&client, &server.url("/share/video/123"), &FetchOptions::default())
            .await
            .expect("redirect response is returned as-is");
        mock.assert();

        assert_eq!(result.status, 302);
    }

    #[tokio::test]
    async fn fetch_rejects_bad_scheme() {
        let client = create_test_client();
        let err = fetch(&client, "ftp://example.com/x", &FetchOptions::default())
            .await
            .expect_err("ftp should be rejected");
        assert!(err.is_fetch());
    }

    #[tokio::test]
    async fn fetch_rejects_empty_url() {
        let client = create_test_client();
        let err = fetch(&client, "", &FetchOptions::default())
            .await
            .expect_err("empty URL should be rejected");
        assert!(err.is_fetch());
    }

    #[tokio::test]
    async fn fetch_sends_extra_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/hdr").header("x-extra", "1");
            then.status(200).body("ok");
        });

        let client = create_test_client();
        let opts = FetchOptions {
            headers: HashMap::from([("x-extra".to_string(), "1".to_string())]),
        };
        let result = fetch(&client, &server.url("/hdr"), &opts).await;
        mock.assert();
        assert_eq!(result.unwrap().status, 200);
    }
}
