// ABOUTME: Embedded ROUTER_DATA payload extraction and navigation for the share page.
// ABOUTME: Page-schema dispatch over the two known loaderData keys, then item_list[0] readout.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::ParseError;
use crate::result::{Status, VideoMetadata};

/// The payload spans multiple lines, hence the dot-matches-newline flag.
static ROUTER_DATA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)window\._ROUTER_DATA\s*=\s*(.*?)</script>").unwrap());

/// The two page types the share host renders; each nests its fetched data
/// under a distinct loaderData key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A plain video post.
    Video,
    /// A note / image-set post, which still carries a videoInfoRes sub-tree.
    Note,
}

impl PageKind {
    pub const ALL: [PageKind; 2] = [PageKind::Video, PageKind::Note];

    pub fn loader_key(self) -> &'static str {
        match self {
            PageKind::Video => "video_(id)/page",
            PageKind::Note => "note_(id)/page",
        }
    }
}

/// Locate and parse the embedded ROUTER_DATA JSON in the page HTML.
pub fn extract_router_data(html: &str, page_url: &str) -> Result<Value, ParseError> {
    let caps = ROUTER_DATA_RE
        .captures(html)
        .ok_or_else(|| ParseError::embedded_data_missing(page_url, "ExtractRouterData"))?;

    let json_text = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    serde_json::from_str(json_text).map_err(|e| {
        ParseError::embedded_data_malformed(page_url, "ExtractRouterData", anyhow::anyhow!(e))
    })
}

/// Find the videoInfoRes sub-tree under whichever known page key is present.
///
/// Whichever key is present is trusted as-is; the payload id is not checked
/// against the requested id.
pub fn find_video_info<'a>(router_data: &'a Value, page_url: &str) -> Result<&'a Value, ParseError> {
    let loader_data = router_data.get("loaderData").unwrap_or(&Value::Null);

    for kind in PageKind::ALL {
        if let Some(info) = loader_data
            .get(kind.loader_key())
            .and_then(|page| page.get("videoInfoRes"))
        {
            return Ok(info);
        }
    }

    Err(ParseError::unknown_page_schema(page_url, "FindVideoInfo"))
}

/// Take the first element of item_list.
pub fn first_item<'a>(video_info: &'a Value, page_url: &str) -> Result<&'a Value, ParseError> {
    video_info
        .get("item_list")
        .and_then(|list| list.as_array())
        .and_then(|arr| arr.first())
        .ok_or_else(|| ParseError::empty_item_list(page_url, "FirstItem"))
}

/// Read the metadata fields out of one item_list element.
///
/// The watermarked and clean CDN paths differ only by the `playwm` token,
/// which platform URLs carry exactly once.
pub fn read_item(item: &Value, video_id: &str, page_url: &str) -> Result<VideoMetadata, ParseError> {
    let watermarked = item
        .get("video")
        .and_then(|v| v.get("play_addr"))
        .and_then(|v| v.get("url_list"))
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.first())
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            ParseError::embedded_data_malformed(
                page_url,
                "ReadItem",
                anyhow::anyhow!("payload has no play address"),
            )
        })?;

    let no_watermark = watermarked.replacen("playwm", "play", 1);

    let desc = item
        .get("desc")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");
    let title = if desc.is_empty() {
        format!("douyin_{}", video_id)
    } else {
        desc.to_string()
    };

    let author = item
        .get("author")
        .and_then(|a| a.get("nickname"))
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    let statistics = item.get("statistics");
    let count = |key: &str| {
        statistics
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_i64())
            .unwrap_or(0)
    };

    let video = item.get("video");
    let dimension = |key: &str| {
        video
            .and_then(|v| v.get(key))
            .and_then(|v| v.as_i64())
            .unwrap_or(0)
    };
    let duration_ms = video
        .and_then(|v| v.get("duration"))
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);

    Ok(VideoMetadata {
        status: Status::Success,
        video_id: video_id.to_string(),
        title,
        author,
        download_url_no_watermark: no_watermark,
        download_url_with_watermark: watermarked.to_string(),
        digg_count: count("digg_count"),
        comment_count: count("comment_count"),
        share_count: count("share_count"),
        collect_count: count("collect_count"),
        duration: duration_ms / 1000.0,
        width: dimension("width"),
        height: dimension("height"),
        error: String::new(),
    })
}
