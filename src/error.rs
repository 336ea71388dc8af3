use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching and reshaping upstream pages.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}: {body}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
        /// Leading portion of the response body, kept for log context.
        body: String,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// More match cards than journey sections: the page no longer follows
    /// the ten-team-rows-per-journey layout.
    #[error("journey sections exhausted: {journeys} section(s), but match {match_index} remains")]
    JourneyOverflow { journeys: usize, match_index: usize },
}

impl<'a> From<SelectorErrorKind<'a>> for ScrapeError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        ScrapeError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
