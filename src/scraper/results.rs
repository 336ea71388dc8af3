use ::scraper::Selector;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Competition, JourneyMap};
use crate::scraper::{self, assemble, element_text};

// Template-specific hooks into the results page. The class suffixes are CSS
// module hashes, so a frontend redeploy can invalidate them wholesale; every
// parse below tolerates partial matches.
const JOURNEY_CONTAINER_SELECTOR: &str = "div.MatchCardsListsAppender_container__y5ame";
const JOURNEY_HEADER_SELECTOR: &str = "div.SectionHeader_container__iVfZ9";
const MATCH_CARD_SELECTOR: &str = "div.SimpleMatchCard_simpleMatchCard__content__ZWt2p";
const TEAM_NAME_SELECTOR: &str = "span.SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D";
const TEAM_SCORE_SELECTOR: &str = "span.SimpleMatchCardTeam_simpleMatchCardTeam__score__UYMc_";
const MATCH_TIME_SELECTOR: &str = "div.SimpleMatchCard_simpleMatchCard__matchContent__prwTf time";

#[instrument(skip(client), fields(competition = %competition))]
pub(crate) async fn get_results(
    client: &reqwest::Client,
    competition: Competition,
) -> Result<JourneyMap> {
    let url = competition.results_url();
    let document = scraper::get_document(client, url).await?;
    let results = parse_results(&document)?;
    debug!(journeys = results.len(), "parsed results page");
    Ok(results)
}

fn parse_results(document: &scraper::Html) -> Result<JourneyMap> {
    let container_selector = Selector::parse(JOURNEY_CONTAINER_SELECTOR)?;
    let Some(container) = document.select(&container_selector).next() else {
        // Between matchdays the page ships its shell without the card list.
        // Normal no-data condition, not a parse failure.
        debug!("match list container missing, no results yet");
        return Ok(JourneyMap::new());
    };

    let journey_selector = Selector::parse(JOURNEY_HEADER_SELECTOR)?;
    let journeys = container
        .select(&journey_selector)
        .map(|header| element_text(&header))
        .collect_vec();

    let card_selector = Selector::parse(MATCH_CARD_SELECTOR)?;
    let cards = container.select(&card_selector).collect_vec();

    // Three parallel flat sequences in document order; the assembler re-pairs
    // them positionally.
    let name_selector = Selector::parse(TEAM_NAME_SELECTOR)?;
    let team_names = cards
        .iter()
        .flat_map(|card| card.select(&name_selector))
        .map(|name| element_text(&name))
        .collect_vec();

    let score_selector = Selector::parse(TEAM_SCORE_SELECTOR)?;
    let goals = cards
        .iter()
        .flat_map(|card| card.select(&score_selector))
        .map(|score| element_text(&score))
        .collect_vec();

    let time_selector = Selector::parse(MATCH_TIME_SELECTOR)?;
    let dates = cards
        .iter()
        .flat_map(|card| card.select(&time_selector))
        .filter_map(|time| time.value().attr("datetime"))
        .map(str::to_owned)
        .collect_vec();

    assemble::assemble_journeys(
        &journeys,
        &team_names,
        &goals,
        &dates,
        assemble::MATCHES_PER_JOURNEY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::Html;

    fn card(first: &str, first_goals: &str, second: &str, second_goals: &str, date: &str) -> String {
        format!(
            r#"<div class="SimpleMatchCard_simpleMatchCard__content__ZWt2p">
                 <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">{first}</span>
                 <span class="SimpleMatchCardTeam_simpleMatchCardTeam__score__UYMc_">{first_goals}</span>
                 <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">{second}</span>
                 <span class="SimpleMatchCardTeam_simpleMatchCardTeam__score__UYMc_">{second_goals}</span>
                 <div class="SimpleMatchCard_simpleMatchCard__matchContent__prwTf">
                   <time datetime="{date}">yesterday</time>
                 </div>
               </div>"#
        )
    }

    fn results_page(journey: &str, cards: &[String]) -> Html {
        let html = format!(
            r#"<html><body>
                 <div class="MatchCardsListsAppender_container__y5ame">
                   <div class="SectionHeader_container__iVfZ9">{journey}</div>
                   {}
                 </div>
               </body></html>"#,
            cards.join("\n")
        );
        Html::parse_document(&html)
    }

    #[test]
    fn test_parse_results_pairs_teams_and_dates() {
        let document = results_page(
            "Matchday 5",
            &[
                card("Brazil", "2", "Chile", "0", "2024-03-21T20:00:00Z"),
                card("Peru", "1", "Bolivia", "1", "2024-03-22T20:00:00Z"),
            ],
        );

        let results = parse_results(&document).unwrap();

        assert_eq!(results.len(), 1);
        let matchday = results.get("Matchday 5").unwrap();
        assert_eq!(matchday.len(), 2);
        assert_eq!(matchday[0].first_team.country, "Brazil");
        assert_eq!(matchday[0].first_team.goals, "2");
        assert_eq!(matchday[0].winner, "Brazil");
        assert_eq!(matchday[0].date, "2024-03-21T20:00:00Z");
        assert_eq!(matchday[1].winner, "Tie");
    }

    #[test]
    fn test_missing_container_yields_empty_map() {
        let document = Html::parse_document("<html><body><p>offseason</p></body></html>");
        let results = parse_results(&document).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_card_without_scores_defaults_to_zero() {
        let html = r#"<html><body>
            <div class="MatchCardsListsAppender_container__y5ame">
              <div class="SectionHeader_container__iVfZ9">Matchday 1</div>
              <div class="SimpleMatchCard_simpleMatchCard__content__ZWt2p">
                <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Brazil</span>
                <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Chile</span>
                <div class="SimpleMatchCard_simpleMatchCard__matchContent__prwTf">
                  <time datetime="2024-03-21T20:00:00Z">today</time>
                </div>
              </div>
            </div>
          </body></html>"#;
        let document = Html::parse_document(html);

        let results = parse_results(&document).unwrap();
        let matches = results.get("Matchday 1").unwrap();
        assert_eq!(matches[0].first_team.goals, "0");
        assert_eq!(matches[0].winner, "Tie");
    }
}
