// ABOUTME: Error types for the share-link resolver including ErrorCode enum and ParseError struct.
// ABOUTME: One code per pipeline failure, with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the ways a resolution can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Caller supplied no share-URL text at all.
    MissingInput,
    /// Input text contains no URL-shaped substring.
    NoLink,
    /// Initial GET on the share link did not return 200.
    ShareLinkUnreachable,
    /// Neither id-extraction strategy matched the resolved URL.
    VideoIdNotFound,
    /// Canonical page GET did not return 200 (an expired id redirects).
    PageUnreachable,
    /// The ROUTER_DATA script marker is absent from the page HTML.
    EmbeddedDataMissing,
    /// The embedded payload is not valid JSON or lacks a required field.
    EmbeddedDataMalformed,
    /// Neither recognized page-type key is present under loaderData.
    UnknownPageSchema,
    /// The item_list array is empty or missing.
    EmptyItemList,
    /// Transport-level failure (connect error, timeout, body read).
    Fetch,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingInput => "missing share_url input",
            ErrorCode::NoLink => "no share link found",
            ErrorCode::ShareLinkUnreachable => "share link unreachable",
            ErrorCode::VideoIdNotFound => "video id not found",
            ErrorCode::PageUnreachable => "canonical page unreachable",
            ErrorCode::EmbeddedDataMissing => "embedded data missing",
            ErrorCode::EmbeddedDataMalformed => "embedded data malformed",
            ErrorCode::UnknownPageSchema => "unknown page schema",
            ErrorCode::EmptyItemList => "empty item list",
            ErrorCode::Fetch => "fetch error",
        };
        write!(f, "{}", s)
    }
}

/// The main error type for resolve operations.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "douyin-share: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ParseError {
    pub fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a MissingInput error.
    pub fn missing_input(op: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::MissingInput,
            String::new(),
            op,
            Some(anyhow::anyhow!("share_url parameter is required")),
        )
    }

    /// Create a NoLink error.
    pub fn no_link(op: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NoLink,
            String::new(),
            op,
            Some(anyhow::anyhow!("input text contains no URL")),
        )
    }

    /// Create a ShareLinkUnreachable error carrying the HTTP status.
    pub fn share_link_unreachable(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        Self::new(
            ErrorCode::ShareLinkUnreachable,
            url,
            op,
            Some(anyhow::anyhow!("HTTP status {}", status)),
        )
    }

    /// Create a VideoIdNotFound error.
    pub fn video_id_not_found(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::VideoIdNotFound, url, op, None)
    }

    /// Create a PageUnreachable error carrying the HTTP status.
    pub fn page_unreachable(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        Self::new(
            ErrorCode::PageUnreachable,
            url,
            op,
            Some(anyhow::anyhow!("HTTP status {}", status)),
        )
    }

    /// Create an EmbeddedDataMissing error.
    pub fn embedded_data_missing(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmbeddedDataMissing, url, op, None)
    }

    /// Create an EmbeddedDataMalformed error.
    pub fn embedded_data_malformed(
        url: impl Into<String>,
        op: impl Into<String>,
        source: anyhow::Error,
    ) -> Self {
        Self::new(ErrorCode::EmbeddedDataMalformed, url, op, Some(source))
    }

    /// Create an UnknownPageSchema error.
    pub fn unknown_page_schema(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnknownPageSchema, url, op, None)
    }

    /// Create an EmptyItemList error.
    pub fn empty_item_list(url: impl Into<String>, op: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyItemList, url, op, None)
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, url, op, source)
    }

    /// Returns true if this is a Fetch (transport) error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is either of the non-200 statuses.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::ShareLinkUnreachable | ErrorCode::PageUnreachable
        )
    }

    /// Returns true if this is a MissingInput error.
    pub fn is_missing_input(&self) -> bool {
        self.code == ErrorCode::MissingInput
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_op_url_and_code() {
        let err = ParseError::page_unreachable("https://example.com/share/video/1", "FetchPage", 302);
        let msg = err.to_string();
        assert!(msg.contains("FetchPage"));
        assert!(msg.contains("https://example.com/share/video/1"));
        assert!(msg.contains("canonical page unreachable"));
        assert!(msg.contains("HTTP status 302"));
    }

    #[test]
    fn no_link_mentions_missing_url() {
        let err = ParseError::no_link("FindShareUrl");
        assert_eq!(err.code, ErrorCode::NoLink);
        assert!(err.to_string().contains("no share link found"));
    }

    #[test]
    fn unreachable_helper_covers_both_codes() {
        assert!(ParseError::share_link_unreachable("u", "op", 404).is_unreachable());
        assert!(ParseError::page_unreachable("u", "op", 302).is_unreachable());
        assert!(!ParseError::no_link("op").is_unreachable());
    }
}
