//! Platform-neutral rich reply built from a scraped figure.

use chrono::{DateTime, Utc};
use enoko_core::FigureRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: &'static str,
    pub value: String,
}

/// One rich reply for one catalog link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    /// Link target of the reply: the catalog page itself.
    pub url: String,
    pub title: String,
    pub fields: Vec<EmbedField>,
    pub image_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Formats `figure` into a reply linking to `url`.
///
/// Fields appear in a fixed order and only when they carry text. The
/// manufacturer is scraped but never shown.
#[must_use]
pub fn build_reply(url: &str, figure: &FigureRecord, timestamp: DateTime<Utc>) -> OutboundReply {
    let fields = [
        ("Original name", &figure.original_name),
        ("Price", &figure.price),
        ("Release Date", &figure.release_date),
        ("Scale", &figure.scale),
        ("Size", &figure.size),
    ]
    .into_iter()
    // Discord rejects blank field values.
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(name, value)| EmbedField {
        name,
        value: value.clone(),
    })
    .collect();

    let image_url = Some(figure.main_image_url.clone()).filter(|src| !src.is_empty());

    OutboundReply {
        url: url.to_owned(),
        title: figure.name.clone(),
        fields,
        image_url,
        timestamp,
    }
}

#[cfg(test)]
#[path = "reply_test.rs"]
mod tests;
