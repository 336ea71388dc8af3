pub use client::ScrapeClient;
pub use error::{Result, ScrapeError};
pub use model::Competition;

pub mod api;
mod client;
pub mod error;
pub mod model;
pub(crate) mod scraper;
