use serde::Serialize;

/// One row of a competition's standings table.
///
/// Numeric cells are parsed tolerantly: a cell that fails to parse becomes
/// `None` instead of failing the whole table. `goal_difference` stays text
/// because the page renders it signed ("+12").
#[derive(Debug, Clone, Serialize)]
pub struct StandingsRow {
    pub position: Option<u8>,
    pub team: String,
    pub played: Option<u8>,
    pub won: Option<u8>,
    pub drawn: Option<u8>,
    pub lost: Option<u8>,
    pub goal_difference: String,
    pub points: Option<u8>,
}

/// Full position table, top to bottom.
pub type Classification = Vec<StandingsRow>;
