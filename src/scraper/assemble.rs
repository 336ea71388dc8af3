//! Positional assembly of flat extraction sequences into journeys.
//!
//! The results page yields three parallel flat sequences (team names, score
//! strings, match timestamps) plus an ordered list of journey labels. Nothing
//! on the page links them structurally; the pairing is positional, with
//! bounds-checked truncation where the sequences disagree in length.

use crate::error::{Result, ScrapeError};
use crate::model::{JourneyMap, MatchResult, TeamSide, TIE};

/// The source templates lay out ten team rows (five match cards) under each
/// journey header. This is an assumption about the page, not something
/// derivable from the extracted sequences, so it is an explicit input.
pub(crate) const MATCHES_PER_JOURNEY: usize = 5;

/// Pair consecutive team names into matches, attach one date per match, and
/// bucket each match into its journey.
///
/// Truncation rules, in order of severity:
/// - a trailing unpaired team name stops assembly (no half-match is emitted);
/// - running out of dates stops assembly (a match without a timestamp is
///   unusable);
/// - a missing score defaults to `"0"` (short score sequences are common on
///   cards that have not fully rendered);
/// - running out of journey labels while matches remain is a layout mismatch
///   and fails the whole page.
pub(crate) fn assemble_journeys(
    journeys: &[String],
    team_names: &[String],
    goals: &[String],
    dates: &[String],
    matches_per_journey: usize,
) -> Result<JourneyMap> {
    let teams_per_journey = matches_per_journey * 2;
    let mut results = JourneyMap::new();
    let mut date_cursor = 0;
    let mut journey_cursor = 0;

    for i in (0..team_names.len()).step_by(2) {
        if i + 1 >= team_names.len() || date_cursor >= dates.len() {
            break;
        }

        let Some(journey) = journeys.get(journey_cursor) else {
            return Err(ScrapeError::JourneyOverflow {
                journeys: journeys.len(),
                match_index: date_cursor,
            });
        };

        let first_team = TeamSide {
            country: team_names[i].clone(),
            goals: goal_at(goals, i),
        };
        let second_team = TeamSide {
            country: team_names[i + 1].clone(),
            goals: goal_at(goals, i + 1),
        };
        let winner = winner_of(&first_team, &second_team);

        results.push(
            journey,
            MatchResult {
                first_team,
                second_team,
                winner,
                date: dates[date_cursor].clone(),
            },
        );
        date_cursor += 1;

        if (i + 2) % teams_per_journey == 0 {
            journey_cursor += 1;
        }
    }

    Ok(results)
}

fn goal_at(goals: &[String], index: usize) -> String {
    goals.get(index).cloned().unwrap_or_else(|| "0".to_owned())
}

/// Winner of a match, decided on the raw score text.
///
/// The comparison is lexicographic, not numeric: `"9"` beats `"10"`. Known
/// quirk, kept because downstream consumers of the JSON already depend on the
/// existing winner labels; changing it to a numeric comparison is a breaking
/// behavior change.
fn winner_of(first: &TeamSide, second: &TeamSide) -> String {
    if first.goals == second.goals {
        TIE.to_owned()
    } else if first.goals > second.goals {
        first.country.clone()
    } else {
        second.country.clone()
    }
}
