// ABOUTME: Main library entry point for the douyin share-link resolver.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, VideoMetadata, ParseError, ErrorCode.

//! douyin-share - resolve a douyin share link to a watermark-free video URL.
//!
//! Given free-form text containing a share link, this crate follows the link
//! to its canonical location, derives the numeric post id, fetches the share
//! page, and reads the metadata embedded in its ROUTER_DATA payload.
//!
//! # Example
//!
//! ```no_run
//! use douyin_share::{Client, HandlerInput};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::builder().build();
//!     let input = HandlerInput::from("7.43 复制打开抖音 https://v.douyin.com/abc/ 看看");
//!     let meta = client.handle(&input).await;
//!     println!("{} -> {}", meta.title, meta.download_url_no_watermark);
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod handler;
pub mod logger;
pub mod options;
pub mod resource;
pub mod result;
pub mod router_data;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, ParseError};
pub use crate::handler::HandlerInput;
pub use crate::logger::{Logger, NoopLogger, TracingLogger};
pub use crate::options::{ClientBuilder, Options, DEFAULT_PAGE_URL_PREFIX, DEFAULT_USER_AGENT};
pub use crate::result::{Status, VideoMetadata};
