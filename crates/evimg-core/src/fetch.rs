//! Image download over HTTP.
//!
//! Uses the curl crate (libcurl) for a blocking GET that follows redirects,
//! buffers the whole body and reports the final response's Content-Type.

use std::time::Duration;
use thiserror::Error;

use crate::config::IngestConfig;

/// Failure while fetching or saving one image.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection, TLS, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the file failed.
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// Response body and declared media type of a successful GET.
#[derive(Debug, Clone, Default)]
pub struct FetchedImage {
    /// Raw `Content-Type` value of the final response, parameters included.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Source of image bytes. The pipeline only talks to this trait so callers can
/// swap the network for something else.
pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError>;
}

/// Transfer limits for [`CurlFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-transfer timeout.
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from(&IngestConfig::default())
    }
}

impl From<&IngestConfig> for FetchOptions {
    fn from(cfg: &IngestConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            max_redirections: cfg.max_redirections,
            user_agent: cfg.user_agent.clone(),
        }
    }
}

/// Unauthenticated GET via libcurl, one fresh handle per image.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    options: FetchOptions,
}

impl CurlFetcher {
    pub fn new(options: FetchOptions) -> Self {
        Self { options }
    }
}

impl ImageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        // Statuses >= 400 end the transfer before any body bytes are delivered.
        easy.fail_on_error(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.options.max_redirections)?;
        easy.connect_timeout(self.options.connect_timeout)?;
        easy.timeout(self.options.timeout)?;
        easy.useragent(&self.options.user_agent)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };
        if let Err(e) = performed {
            if e.is_http_returned_error() {
                return Err(FetchError::Http(easy.response_code()?));
            }
            return Err(e.into());
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        let content_type = easy.content_type()?.map(str::to_string);
        tracing::debug!(
            url,
            status = code,
            bytes = body.len(),
            content_type = content_type.as_deref().unwrap_or(""),
            "GET complete"
        );

        Ok(FetchedImage { content_type, body })
    }
}
