use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::model::{Classification, Competition, StandingsRow};
use crate::scraper::{self, element_text, select_text};

const STANDINGS_ROW_SELECTOR: &str = "li.Standing_standings__row__5sdZG";
const STANDINGS_TEAM_SELECTOR: &str = "p.Standing_standings__teamName__psv61";
const STANDINGS_CELL_SELECTOR: &str = "div.Standing_standings__cell__5Kd0W";

#[instrument(skip(client), fields(competition = %competition))]
pub(crate) async fn get_classification(
    client: &reqwest::Client,
    competition: Competition,
) -> Result<Classification> {
    let url = competition.standings_url();
    let document = scraper::get_document(client, url).await?;
    let table = parse_classification(&document)?;
    debug!(rows = table.len(), "parsed standings page");
    Ok(table)
}

fn parse_classification(document: &scraper::Html) -> Result<Classification> {
    let row_selector = Selector::parse(STANDINGS_ROW_SELECTOR)?;
    let team_selector = Selector::parse(STANDINGS_TEAM_SELECTOR)?;
    let cell_selector = Selector::parse(STANDINGS_CELL_SELECTOR)?;

    let mut table = vec![];
    for row in document.select(&row_selector) {
        match parse_row(&row, &team_selector, &cell_selector) {
            Some(parsed) => table.push(parsed),
            None => warn!("skipping standings row without a team name"),
        }
    }
    Ok(table)
}

/// Cells in document order: position, played, won, drawn, lost, goal
/// difference, points. Numeric cells that fail to parse become `None` rather
/// than discarding the row.
fn parse_row(
    row: &ElementRef,
    team_selector: &Selector,
    cell_selector: &Selector,
) -> Option<StandingsRow> {
    let team = select_text(row, team_selector);
    if team.is_empty() {
        return None;
    }

    let cells = row
        .select(cell_selector)
        .map(|cell| element_text(&cell))
        .collect_vec();
    let number = |index: usize| cells.get(index).and_then(|text| text.parse().ok());

    Some(StandingsRow {
        position: number(0),
        team,
        played: number(1),
        won: number(2),
        drawn: number(3),
        lost: number(4),
        goal_difference: cells.get(5).cloned().unwrap_or_default(),
        points: number(6),
    })
}
