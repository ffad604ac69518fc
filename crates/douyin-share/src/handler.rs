// ABOUTME: Typed input for the single handler entry point.
// ABOUTME: One required text field; the host's heterogeneous inputs marshal into it via serde or From.

use serde::{Deserialize, Serialize};

/// Input for one invocation: free-form text expected to contain a share link,
/// possibly surrounded by other prose from the share dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HandlerInput {
    pub share_url: String,
}

impl HandlerInput {
    pub fn new(share_url: impl Into<String>) -> Self {
        Self {
            share_url: share_url.into(),
        }
    }
}

impl From<&str> for HandlerInput {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for HandlerInput {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
