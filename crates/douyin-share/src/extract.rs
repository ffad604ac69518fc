// ABOUTME: Link Extractor and Identifier Extractor stages.
// ABOUTME: First URL-shaped substring in free text; numeric video id from the resolved URL path.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

static SHARE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"https?://[-A-Za-z0-9$_.+!*'(),/?=:;@&#%~]+"#).unwrap()
});

static VIDEO_PATH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/video/(\d+)").unwrap());

/// Find the first URL-shaped substring in free-form share text.
///
/// Share dialogs paste the link surrounded by prose; no reachability check
/// is performed here.
pub fn find_share_url(text: &str) -> Result<String, ParseError> {
    SHARE_URL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ParseError::no_link("FindShareUrl"))
}

/// Derive the numeric video id from a resolved URL.
///
/// Canonical video pages always embed the id somewhere in the path, but the
/// position varies across share formats: try `/video/<digits>` first, then
/// scan path segments from the end for the first purely numeric one.
pub fn extract_video_id(resolved_url: &str) -> Result<String, ParseError> {
    if let Some(caps) = VIDEO_PATH_RE.captures(resolved_url) {
        return Ok(caps[1].to_string());
    }

    let path = match url::Url::parse(resolved_url) {
        Ok(parsed) => parsed.path().to_string(),
        // Not parseable as an absolute URL; strip the query string by hand.
        Err(_) => resolved_url.split('?').next().unwrap_or("").to_string(),
    };

    for segment in path.trim_matches('/').rsplit('/') {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(segment.to_string());
        }
    }

    Err(ParseError::video_id_not_found(resolved_url, "ExtractVideoId"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn finds_url_inside_share_prose() {
        let text = "7.43 复制打开抖音，看看 https://v.douyin.com/iRNBho6u/ 精彩视频";
        let url = find_share_url(text).unwrap();
        assert_eq!(url, "https://v.douyin.com/iRNBho6u/");
    }

    #[test]
    fn finds_first_of_multiple_urls() {
        let text = "http://a.example/one and https://b.example/two";
        assert_eq!(find_share_url(text).unwrap(), "http://a.example/one");
    }

    #[test]
    fn accepts_percent_encoded_octets() {
        let text = "link: https://host/path%2Fabc?x=1";
        let url = find_share_url(text).unwrap();
        assert!(url.contains("%2F"));
    }

    #[test]
    fn no_url_yields_no_link() {
        let err = find_share_url("just some words").unwrap_err();
        assert_eq!(err.code, ErrorCode::NoLink);
    }

    #[test]
    fn id_from_video_path_with_query() {
        let id = extract_video_id("https://host/video/7123456789012345678?x=1").unwrap();
        assert_eq!(id, "7123456789012345678");
    }

    #[test]
    fn id_from_positional_fallback() {
        let id = extract_video_id("https://host/share/7123456789012345678/").unwrap();
        assert_eq!(id, "7123456789012345678");
    }

    #[test]
    fn fallback_scans_from_the_end() {
        let id = extract_video_id("https://host/123/slides/456/").unwrap();
        assert_eq!(id, "456");
    }

    #[test]
    fn fallback_ignores_query_string() {
        let id = extract_video_id("https://host/share/999?video=111abc").unwrap();
        assert_eq!(id, "999");
    }

    #[test]
    fn no_numeric_segment_yields_video_id_not_found() {
        let err = extract_video_id("https://host/user/profile").unwrap_err();
        assert_eq!(err.code, ErrorCode::VideoIdNotFound);
    }

    #[test]
    fn mixed_segment_is_not_an_id() {
        let err = extract_video_id("https://host/share/12ab34/").unwrap_err();
        assert_eq!(err.code, ErrorCode::VideoIdNotFound);
    }
}
