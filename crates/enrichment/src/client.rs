use std::time::Duration;

use reqwest::StatusCode;

use crate::error::EnrichmentError;
use crate::song_detail::SongDetail;

/// Maximum length of a response body quoted in an error.
const MAX_ERROR_BODY_LEN: usize = 200;

/// Client for the song info API.
#[derive(Debug, Clone)]
pub struct SongInfoClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl SongInfoClient {
    /// Creates a client for the API at `base_url`. Every request is bounded by
    /// `timeout`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, EnrichmentError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EnrichmentError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, timeout })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch release date, lyrics and link for `(group, song)`.
    ///
    /// # Errors
    /// Fails on transport errors, on timeout, on any status other than 200,
    /// and on a body that is not the expected JSON object.
    pub async fn fetch_song_info(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongDetail, EnrichmentError> {
        let url = format!("{}/info", self.base_url);
        tracing::debug!(%url, group, song, "requesting song info");

        let response = self
            .client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            tracing::warn!(status = status.as_u16(), group, song, "song info API returned non-OK status");
            return Err(EnrichmentError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY_LEN).to_owned(),
            });
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        serde_json::from_str(&body).map_err(|source| EnrichmentError::JsonParse {
            context: format!("song info response (body: {})", truncate(&body, MAX_ERROR_BODY_LEN)),
            source,
        })
    }

    fn request_error(&self, err: reqwest::Error) -> EnrichmentError {
        if err.is_timeout() {
            EnrichmentError::Timeout(self.timeout)
        } else {
            EnrichmentError::HttpRequest(err)
        }
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub(crate) fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
