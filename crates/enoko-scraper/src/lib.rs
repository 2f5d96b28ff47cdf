pub mod client;
pub mod error;
pub mod extract;
pub mod links;

pub use client::{FigureSource, HpoiClient};
pub use error::ScraperError;
pub use extract::extract_figure;
pub use links::{find_catalog_links, LinkDetector};
