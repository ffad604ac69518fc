// ABOUTME: VideoMetadata output entity returned for every invocation, success or error.
// ABOUTME: Field names match the host runtime's output schema; error_result enforces the shape invariant.

use serde::{Deserialize, Serialize};

/// Outcome discriminator for the output entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    #[default]
    Error,
}

/// Structured metadata for one resolved post.
///
/// Always fully populated: the error path fills numeric fields with 0 and
/// strings with empty, setting `status` to error and a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoMetadata {
    pub status: Status,
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub download_url_no_watermark: String,
    pub download_url_with_watermark: String,
    pub digg_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
    pub collect_count: i64,
    /// Duration in seconds.
    pub duration: f64,
    pub width: i64,
    pub height: i64,
    pub error: String,
}

impl VideoMetadata {
    /// Build the uniform error-shaped output: all fields defaulted except the message.
    pub fn error_result(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: message.into(),
            ..Default::default()
        }
    }

    /// Returns true if this is a success result.
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}
