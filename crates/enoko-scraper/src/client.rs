use std::future::Future;
use std::time::Duration;

use enoko_core::FigureRecord;
use reqwest::Client;

use crate::error::ScraperError;
use crate::extract::extract_figure;

/// Anything that can turn a catalog link into a [`FigureRecord`].
pub trait FigureSource {
    /// Fetches and extracts the figure behind `url`.
    fn fetch_figure(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<FigureRecord, ScraperError>> + Send;
}

/// HTTP client for catalog product pages.
///
/// Each lookup is a single GET with no retry; a failed lookup is reported to
/// the caller and nothing else happens.
#[derive(Debug, Clone)]
pub struct HpoiClient {
    client: Client,
}

impl HpoiClient {
    /// Creates an `HpoiClient` with the given request timeout.
    ///
    /// No custom headers are sent unless `user_agent` is provided.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: Option<&str>) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().timeout(Duration::from_secs(timeout_secs));
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Fetches one catalog page and extracts its figure attributes.
    ///
    /// Missing page elements are not errors; they leave fields empty.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] — connection failure, timeout, or a body that
    ///   cannot be read.
    /// - [`ScraperError::UnexpectedStatus`] — any non-2xx status.
    pub async fn fetch_figure(&self, url: &str) -> Result<FigureRecord, ScraperError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        let figure = extract_figure(&body);
        tracing::debug!(url, name = %figure.name, "extracted catalog page");
        Ok(figure)
    }
}

impl FigureSource for HpoiClient {
    fn fetch_figure(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<FigureRecord, ScraperError>> + Send {
        HpoiClient::fetch_figure(self, url)
    }
}
