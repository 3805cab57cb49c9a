//! One-shot preview download.
//!
//! Fetches a preview clip from the Deezer CDN and writes it to disk so it can
//! be played back by hand. CDN preview links carry an `exp=` expiry in their
//! `hdnea` token, so [`DEFAULT_PREVIEW_URL`] stops working once it lapses.

use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{Client, Response, StatusCode};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::Result;

/// Pre-captured CDN preview link.
pub const DEFAULT_PREVIEW_URL: &str = "https://cdnt-preview.dzcdn.net/api/1/1/2/7/a/0/27a14827ff1e82c5e40e8b6a934a8637.mp3?hdnea=exp=1750089980~acl=/api/1/1/2/7/a/0/27a14827ff1e82c5e40e8b6a934a8637.mp3";

/// File the preview is written to.
pub const DEFAULT_OUTPUT: &str = "preview.mp3";

/// The CDN refuses requests that do not look like they come from a browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Result of a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Status 200; the body was written to `path`.
    Saved {
        /// Where the body was written.
        path: PathBuf,
        /// Bytes written.
        size: u64,
    },
    /// Any other status. Nothing was written.
    Rejected {
        /// Status the server answered with.
        status: StatusCode,
        /// Response body as text.
        body: String,
    },
}

impl FetchOutcome {
    /// HTTP status of the response.
    pub fn status(&self) -> StatusCode {
        match self {
            FetchOutcome::Saved { .. } => StatusCode::OK,
            FetchOutcome::Rejected { status, .. } => *status,
        }
    }
}

/// Downloads preview clips with a browser user agent.
#[derive(Debug, Clone)]
pub struct PreviewFetcher {
    client: Client,
}

impl PreviewFetcher {
    /// Create a fetcher.
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(BROWSER_USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// GET `url` and write the body to `path` if the answer is 200.
    ///
    /// The body is streamed into `<path>.part` and renamed over `path` once
    /// complete, so a failed download leaves an existing `path` as it was.
    /// The parent directory must exist. On any other status nothing is
    /// written and the body text is returned instead.
    pub async fn fetch_to_file<P: AsRef<Path>>(&self, url: &str, path: P) -> Result<FetchOutcome> {
        let path = path.as_ref();
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            return Ok(FetchOutcome::Rejected { status, body });
        }

        let part = part_path(path)?;
        let size = match write_body(response, &part).await {
            Ok(size) => size,
            Err(e) => {
                discard_partial(&part).await;
                return Err(e);
            }
        };
        if let Err(e) = tokio::fs::rename(&part, path).await {
            discard_partial(&part).await;
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", size, path.display());
        Ok(FetchOutcome::Saved {
            path: path.to_path_buf(),
            size,
        })
    }
}

/// `preview.mp3` -> `preview.mp3.part`, in the same directory so the final
/// rename stays on one filesystem.
fn part_path(path: &Path) -> Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let mut part = name.to_os_string();
    part.push(".part");
    Ok(path.with_file_name(part))
}

async fn write_body(response: Response, part: &Path) -> Result<u64> {
    let mut file = File::create(part).await?;
    let mut stream = response.bytes_stream();
    let mut size = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk: Bytes = chunk?;
        file.write_all(&chunk).await?;
        size += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(size)
}

async fn discard_partial(part: &Path) {
    if let Err(e) = tokio::fs::remove_file(part).await {
        warn!("Could not remove partial download {}: {}", part.display(), e);
    }
}
