use std::time::Duration;

use strum::IntoEnumIterator;
use tracing::{instrument, warn};

use crate::error::Result;
use crate::model::{Classification, Competition, ImageGallery, JourneyMap, UpcomingMatch};
use crate::scraper;

/// Upstream pages answer slowly under load; every fetch attempt is bounded.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Entry point for scraping results, standings, fixtures and galleries.
///
/// Wraps a [`reqwest::Client`] configured with the fetch timeout. Cloning is
/// cheap; the inner client is shared.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> marcador::Result<()> {
/// use marcador::{Competition, ScrapeClient};
///
/// let client = ScrapeClient::new();
/// let results = client.get_results(Competition::PremierLeague).await?;
/// println!("{} journeys", results.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ScrapeClient {
    http: reqwest::Client,
}

impl ScrapeClient {
    /// Create a client with the default 10 second timeout.
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("default reqwest client");
        Self { http }
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this to override the timeout, proxy, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Fetch and assemble one competition's results, grouped by journey.
    ///
    /// Errors propagate so callers can distinguish a failed scrape from a
    /// page that genuinely has no results yet (which is `Ok` and empty).
    #[instrument(skip(self), fields(competition = %competition))]
    pub async fn get_results(&self, competition: Competition) -> Result<JourneyMap> {
        scraper::results::get_results(&self.http, competition).await
    }

    /// Like [`Self::get_results`], but a failed scrape degrades to an empty
    /// map with a logged warning. A broken upstream page costs that
    /// competition's data, never the caller's whole response.
    #[instrument(skip(self), fields(competition = %competition))]
    pub async fn get_results_best_effort(&self, competition: Competition) -> JourneyMap {
        results_or_empty(
            competition,
            scraper::results::get_results(&self.http, competition).await,
        )
    }

    /// Fetch every known competition sequentially and merge the journey maps.
    ///
    /// Best-effort per competition, like [`Self::get_results_best_effort`].
    /// Competitions are visited in declaration order, which fixes the order
    /// of merged buckets.
    #[instrument(skip(self))]
    pub async fn get_all_results(&self) -> JourneyMap {
        let mut merged = JourneyMap::new();
        for competition in Competition::iter() {
            merged.merge(self.get_results_best_effort(competition).await);
        }
        merged
    }

    /// Fetch a competition's standings table.
    #[instrument(skip(self), fields(competition = %competition))]
    pub async fn get_classification(&self, competition: Competition) -> Result<Classification> {
        scraper::standings::get_classification(&self.http, competition).await
    }

    /// Fetch a competition's upcoming fixtures.
    #[instrument(skip(self), fields(competition = %competition))]
    pub async fn get_matches(&self, competition: Competition) -> Result<Vec<UpcomingMatch>> {
        scraper::matches::get_matches(&self.http, competition).await
    }

    /// Fetch the gallery images from an arbitrary page.
    #[instrument(skip(self))]
    pub async fn get_images(&self, url: &str) -> Result<ImageGallery> {
        scraper::images::get_images(&self.http, url).await
    }

    /// Like [`Self::get_images`], but a failed scrape degrades to an empty
    /// gallery with a logged warning.
    #[instrument(skip(self))]
    pub async fn get_images_best_effort(&self, url: &str) -> ImageGallery {
        gallery_or_empty(url, scraper::images::get_images(&self.http, url).await)
    }
}

impl Default for ScrapeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Downgrade point for per-competition failures: every error kind ends here
/// as an empty map plus a warning, keeping the HTTP boundary clear of scrape
/// errors.
fn results_or_empty(competition: Competition, result: Result<JourneyMap>) -> JourneyMap {
    match result {
        Ok(results) => results,
        Err(e) => {
            warn!(
                competition = %competition,
                error = %e,
                "scrape failed, serving empty results"
            );
            JourneyMap::new()
        }
    }
}

fn gallery_or_empty(url: &str, result: Result<ImageGallery>) -> ImageGallery {
    match result {
        Ok(gallery) => gallery,
        Err(e) => {
            warn!(url, error = %e, "scrape failed, serving empty gallery");
            ImageGallery::new()
        }
    }
}
