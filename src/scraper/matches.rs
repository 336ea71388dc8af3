use ::scraper::Selector;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::Result;
use crate::model::{Competition, UpcomingMatch};
use crate::scraper::{self, element_text};

// Upcoming fixtures reuse the results card template, minus the score spans.
const CARD_CONTAINER_SELECTOR: &str = "div.MatchCardsListsAppender_container__y5ame";
const MATCH_CARD_SELECTOR: &str = "div.SimpleMatchCard_simpleMatchCard__content__ZWt2p";
const TEAM_NAME_SELECTOR: &str = "span.SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D";
const MATCH_TIME_SELECTOR: &str = "div.SimpleMatchCard_simpleMatchCard__matchContent__prwTf time";

#[instrument(skip(client), fields(competition = %competition))]
pub(crate) async fn get_matches(
    client: &reqwest::Client,
    competition: Competition,
) -> Result<Vec<UpcomingMatch>> {
    let url = competition.fixtures_url();
    let document = scraper::get_document(client, url).await?;
    let matches = parse_matches(&document)?;
    debug!(count = matches.len(), "parsed fixtures page");
    Ok(matches)
}

fn parse_matches(document: &scraper::Html) -> Result<Vec<UpcomingMatch>> {
    let container_selector = Selector::parse(CARD_CONTAINER_SELECTOR)?;
    let Some(container) = document.select(&container_selector).next() else {
        return Ok(vec![]);
    };

    let card_selector = Selector::parse(MATCH_CARD_SELECTOR)?;
    let cards = container.select(&card_selector).collect_vec();

    let name_selector = Selector::parse(TEAM_NAME_SELECTOR)?;
    let team_names = cards
        .iter()
        .flat_map(|card| card.select(&name_selector))
        .map(|name| element_text(&name));

    let time_selector = Selector::parse(MATCH_TIME_SELECTOR)?;
    let dates = cards
        .iter()
        .flat_map(|card| card.select(&time_selector))
        .filter_map(|time| time.value().attr("datetime"));

    // A trailing unpaired name is dropped by `tuples`; zipping trims to the
    // shorter of pairs vs dates. Same truncation posture as the assembler.
    let matches = team_names
        .tuples()
        .zip(dates)
        .map(|((first_team, second_team), date)| UpcomingMatch {
            first_team,
            second_team,
            date: date.to_owned(),
        })
        .collect_vec();

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::Html;

    #[test]
    fn test_parse_matches_pairs_names_with_dates() {
        let html = r#"<html><body>
            <div class="MatchCardsListsAppender_container__y5ame">
              <div class="SimpleMatchCard_simpleMatchCard__content__ZWt2p">
                <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Argentina</span>
                <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Uruguay</span>
                <div class="SimpleMatchCard_simpleMatchCard__matchContent__prwTf">
                  <time datetime="2024-09-05T00:00:00Z">Thu</time>
                </div>
              </div>
              <div class="SimpleMatchCard_simpleMatchCard__content__ZWt2p">
                <span class="SimpleMatchCardTeam_simpleMatchCardTeam__name__7Ud8D">Colombia</span>
              </div>
            </div>
          </body></html>"#;
        let document = Html::parse_document(html);

        let matches = parse_matches(&document).unwrap();

        // The lone trailing name has no partner and is dropped.
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0],
            UpcomingMatch {
                first_team: "Argentina".to_owned(),
                second_team: "Uruguay".to_owned(),
                date: "2024-09-05T00:00:00Z".to_owned(),
            }
        );
    }

    #[test]
    fn test_missing_container_yields_empty_list() {
        let document = Html::parse_document("<html><body></body></html>");
        assert!(parse_matches(&document).unwrap().is_empty());
    }
}
