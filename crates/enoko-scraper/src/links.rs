//! Detection of catalog product links in free-form message text.

use std::sync::LazyLock;

use enoko_core::DEFAULT_CATALOG_HOST;
use regex::Regex;

use crate::error::ScraperError;

static DEFAULT_DETECTOR: LazyLock<LinkDetector> = LazyLock::new(LinkDetector::default);

/// Finds product page links (`http(s)://<host>/hobby/<digits>`) in text.
///
/// The pattern is compiled once at construction and never changes afterwards.
#[derive(Debug, Clone)]
pub struct LinkDetector {
    pattern: Regex,
}

impl LinkDetector {
    /// Builds a detector for product links on `host`.
    ///
    /// The host is matched literally and case-sensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidPattern`] if the resulting pattern
    /// cannot be compiled.
    pub fn new(host: &str) -> Result<Self, ScraperError> {
        // ASCII digits only; `\d` would also accept other Unicode digits.
        let source = format!(r"https?://{}/hobby/[0-9]+", regex::escape(host));
        let pattern = Regex::new(&source).map_err(|source| ScraperError::InvalidPattern {
            host: host.to_owned(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Returns every link in `text`, left to right.
    ///
    /// A link repeated in the text is returned once per occurrence. Text
    /// without links yields an empty vector.
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_owned())
            .collect()
    }
}

impl Default for LinkDetector {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_HOST).expect("escaped default host is a valid pattern")
    }
}

/// [`LinkDetector::find_all`] for the default catalog host.
#[must_use]
pub fn find_catalog_links(text: &str) -> Vec<String> {
    DEFAULT_DETECTOR.find_all(text)
}

#[cfg(test)]
#[path = "links_test.rs"]
mod tests;
