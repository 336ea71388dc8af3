use serde::Serialize;

/// An upcoming fixture: same card template as a result, before kickoff there
/// are no scores and therefore no winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingMatch {
    pub first_team: String,
    pub second_team: String,
    /// Raw ISO-8601 timestamp from the card's `datetime` attribute.
    pub date: String,
}
