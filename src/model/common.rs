use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// A competition whose pages we know how to scrape.
///
/// The kebab-case slug (`premier-league`, ...) is what appears in API route
/// paths; parsing an unknown slug fails and the route answers 404.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Competition {
    Conmebol,
    LaLiga,
    PremierLeague,
}

impl Competition {
    /// Results page carrying the journey sections and match cards.
    pub fn results_url(self) -> &'static str {
        match self {
            Competition::Conmebol => {
                "https://onefootball.com/en/competition/conmebol-world-cup-qualifiers-1059/results"
            }
            Competition::LaLiga => "https://onefootball.com/en/competition/laliga-10/results",
            Competition::PremierLeague => {
                "https://onefootball.com/en/competition/premier-league-9/results"
            }
        }
    }

    /// Standings table page.
    pub fn standings_url(self) -> &'static str {
        match self {
            Competition::Conmebol => {
                "https://onefootball.com/en/competition/conmebol-world-cup-qualifiers-1059/table"
            }
            Competition::LaLiga => "https://onefootball.com/en/competition/laliga-10/table",
            Competition::PremierLeague => {
                "https://onefootball.com/en/competition/premier-league-9/table"
            }
        }
    }

    /// Upcoming fixtures page (same card template as results, no scores).
    pub fn fixtures_url(self) -> &'static str {
        match self {
            Competition::Conmebol => {
                "https://onefootball.com/en/competition/conmebol-world-cup-qualifiers-1059/fixtures"
            }
            Competition::LaLiga => "https://onefootball.com/en/competition/laliga-10/fixtures",
            Competition::PremierLeague => {
                "https://onefootball.com/en/competition/premier-league-9/fixtures"
            }
        }
    }
}
