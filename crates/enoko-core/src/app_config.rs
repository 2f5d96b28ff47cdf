/// Host of the figure catalog whose product links the bot answers.
pub const DEFAULT_CATALOG_HOST: &str = "www.hpoi.net";

#[derive(Clone)]
pub struct AppConfig {
    pub discord_token: String,
    pub log_level: String,
    pub catalog_host: String,
    pub scraper_request_timeout_secs: u64,
    /// Sent as `User-Agent` only when set; requests carry no custom headers otherwise.
    pub scraper_user_agent: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("discord_token", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("catalog_host", &self.catalog_host)
            .field(
                "scraper_request_timeout_secs",
                &self.scraper_request_timeout_secs,
            )
            .field("scraper_user_agent", &self.scraper_user_agent)
            .finish()
    }
}
