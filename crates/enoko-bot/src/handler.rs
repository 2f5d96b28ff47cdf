use chrono::Utc;
use enoko_scraper::{FigureSource, LinkDetector};

use crate::reply::{build_reply, OutboundReply};

/// Turns one incoming message into the replies the bot should send.
///
/// Messages written by the bot itself produce nothing. Links are looked up
/// one at a time in the order they appear; a link whose lookup fails is
/// logged and skipped without affecting the others.
pub async fn handle_message<S: FigureSource>(
    detector: &LinkDetector,
    source: &S,
    text: &str,
    author_id: u64,
    self_id: u64,
) -> Vec<OutboundReply> {
    if author_id == self_id {
        return Vec::new();
    }

    let links = detector.find_all(text);
    if links.is_empty() {
        return Vec::new();
    }
    tracing::debug!(count = links.len(), author_id, "found catalog links");

    let mut replies = Vec::with_capacity(links.len());
    for url in links {
        match source.fetch_figure(&url).await {
            Ok(figure) => replies.push(build_reply(&url, &figure, Utc::now())),
            Err(error) => {
                tracing::warn!(url = %url, %error, "failed to extract figure, skipping link");
            }
        }
    }
    replies
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod tests;
