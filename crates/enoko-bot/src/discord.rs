//! Discord gateway glue: forwards message events to the handler and sends
//! the resulting replies back as embeds.

use enoko_scraper::{HpoiClient, LinkDetector};
use serenity::async_trait;
use serenity::builder::{CreateEmbed, CreateMessage};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};

use crate::handler::handle_message;
use crate::reply::OutboundReply;

pub struct Bot {
    detector: LinkDetector,
    client: HpoiClient,
}

impl Bot {
    pub fn new(detector: LinkDetector, client: HpoiClient) -> Self {
        Self { detector, client }
    }
}

#[async_trait]
impl EventHandler for Bot {
    async fn message(&self, ctx: Context, msg: Message) {
        let self_id = ctx.cache.current_user().id;
        let replies = handle_message(
            &self.detector,
            &self.client,
            &msg.content,
            msg.author.id.get(),
            self_id.get(),
        )
        .await;

        for reply in replies {
            let builder = CreateMessage::new()
                .embed(to_embed(&reply))
                .reference_message(&msg);
            // Not retried: a lost reply only affects this one link.
            if let Err(error) = msg.channel_id.send_message(&ctx.http, builder).await {
                tracing::error!(
                    url = %reply.url,
                    channel_id = %msg.channel_id,
                    %error,
                    "failed to send figure reply"
                );
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "connected to Discord");
    }
}

/// Converts a reply into a rich embed. Fields are never inline.
pub(crate) fn to_embed(reply: &OutboundReply) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .url(&reply.url)
        .title(&reply.title)
        .timestamp(reply.timestamp)
        .fields(
            reply
                .fields
                .iter()
                .map(|field| (field.name, field.value.as_str(), false)),
        );

    match &reply.image_url {
        Some(image_url) => embed.image(image_url),
        None => embed,
    }
}
