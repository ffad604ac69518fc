// ABOUTME: The resolver Client holding two HTTP clients (redirects on / off) and the pipeline.
// ABOUTME: resolve() runs the four stages; handle() is the infallible host-facing boundary.

use crate::error::ParseError;
use crate::extract::{extract_video_id, find_share_url};
use crate::handler::HandlerInput;
use crate::options::{ClientBuilder, Options};
use crate::resource::{fetch, FetchOptions};
use crate::result::VideoMetadata;
use crate::router_data::{extract_router_data, find_video_info, first_item, read_item};

/// The share-link resolver.
///
/// Holds two pre-built HTTP clients because reqwest's redirect policy is a
/// client property: the share link must be followed to its canonical
/// location, while the canonical page itself must answer 200 directly.
pub struct Client {
    opts: Options,
    redirecting: reqwest::Client,
    direct: reqwest::Client,
}

impl Client {
    /// Create a new ClientBuilder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new Client with the given options.
    pub fn new(opts: Options) -> Self {
        let build = |policy: reqwest::redirect::Policy| {
            reqwest::Client::builder()
                .redirect(policy)
                .user_agent(&opts.user_agent)
                .connect_timeout(opts.connect_timeout)
                .timeout(opts.timeout)
                .build()
                .expect("failed to build HTTP client")
        };

        let redirecting = build(reqwest::redirect::Policy::limited(10));
        let direct = build(reqwest::redirect::Policy::none());

        Self {
            opts,
            redirecting,
            direct,
        }
    }

    /// Run the pipeline: link extraction, redirect resolution, id extraction,
    /// canonical page fetch and payload readout.
    ///
    /// Issues exactly two GETs on the success path and stops at the first
    /// failing stage; nothing is retried.
    pub async fn resolve(&self, share_text: &str) -> Result<VideoMetadata, ParseError> {
        let share_url = find_share_url(share_text)?;

        let resolved = fetch(&self.redirecting, &share_url, &FetchOptions::default()).await?;
        if resolved.status != 200 {
            return Err(ParseError::share_link_unreachable(
                &share_url,
                "ResolveShareLink",
                resolved.status,
            ));
        }

        // Share links are short-lived and obfuscate the id; the post-redirect
        // address is the canonical location that carries it.
        let video_id = extract_video_id(&resolved.final_url)?;

        let page_url = format!("{}{}", self.opts.page_url_prefix, video_id);
        let page = fetch(&self.direct, &page_url, &FetchOptions::default()).await?;
        if page.status != 200 {
            return Err(ParseError::page_unreachable(
                &page_url,
                "FetchPage",
                page.status,
            ));
        }

        let router_data = extract_router_data(&page.body, &page_url)?;
        let video_info = find_video_info(&router_data, &page_url)?;
        let item = first_item(video_info, &page_url)?;
        read_item(item, &video_id, &page_url)
    }

    /// Host-facing entry point: never fails, every internal error becomes the
    /// uniform error-shaped output. Logging is best-effort.
    pub async fn handle(&self, input: &HandlerInput) -> VideoMetadata {
        let logger = self.opts.logger.clone();

        if input.share_url.trim().is_empty() {
            let err = ParseError::missing_input("Handle");
            logger.error(&err.to_string());
            return VideoMetadata::error_result(err.to_string());
        }

        logger.info(&format!("resolving share link from: {}", input.share_url));

        match self.resolve(&input.share_url).await {
            Ok(meta) => {
                logger.info(&format!("resolved {}: {}", meta.video_id, meta.title));
                meta
            }
            Err(err) => {
                let message = err.to_string();
                logger.error(&message);
                VideoMetadata::error_result(message)
            }
        }
    }
}
