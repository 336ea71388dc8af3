use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Winner label used when both sides scored the same.
pub const TIE: &str = "Tie";

/// One side of a finished match.
///
/// `goals` is the raw score text as it appeared on the page. It is normally a
/// small integer, but the source template is not contractually stable, so it
/// is not parsed here; consumers comparing scores must tolerate non-numeric
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSide {
    pub country: String,
    pub goals: String,
}

/// A finished head-to-head result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub first_team: TeamSide,
    pub second_team: TeamSide,
    /// `"Tie"` or the winning side's country name.
    pub winner: String,
    /// Raw ISO-8601 timestamp from the card's `datetime` attribute.
    pub date: String,
}

/// Journey (round) label mapped to its matches, in first-seen order.
///
/// Serializes as a JSON object whose field order is the insertion order;
/// that order is part of the API contract, which rules out `HashMap`/`BTreeMap`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JourneyMap {
    entries: Vec<(String, Vec<MatchResult>)>,
}

impl JourneyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of journey buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a match to `journey`'s bucket, creating the bucket at the end
    /// of the map on first use.
    pub fn push(&mut self, journey: &str, result: MatchResult) {
        match self.entries.iter_mut().find(|(label, _)| label == journey) {
            Some((_, matches)) => matches.push(result),
            None => self.entries.push((journey.to_owned(), vec![result])),
        }
    }

    pub fn get(&self, journey: &str) -> Option<&[MatchResult]> {
        self.entries
            .iter()
            .find(|(label, _)| label == journey)
            .map(|(_, matches)| matches.as_slice())
    }

    /// Union `other` into `self` by journey label. A label present in both
    /// maps keeps one bucket with `other`'s matches appended after the
    /// existing ones; labels are not namespaced by competition.
    pub fn merge(&mut self, other: JourneyMap) {
        for (label, matches) in other.entries {
            match self.entries.iter_mut().find(|(l, _)| *l == label) {
                Some((_, existing)) => existing.extend(matches),
                None => self.entries.push((label, matches)),
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchResult])> {
        self.entries
            .iter()
            .map(|(label, matches)| (label.as_str(), matches.as_slice()))
    }
}

impl Serialize for JourneyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, matches) in &self.entries {
            map.serialize_entry(label, matches)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(country: &str) -> MatchResult {
        MatchResult {
            first_team: TeamSide {
                country: country.to_owned(),
                goals: "1".to_owned(),
            },
            second_team: TeamSide {
                country: "Other".to_owned(),
                goals: "0".to_owned(),
            },
            winner: country.to_owned(),
            date: "2024-03-21T20:00:00Z".to_owned(),
        }
    }

    #[test]
    fn test_push_preserves_first_seen_order() {
        let mut map = JourneyMap::new();
        map.push("Matchday 2", result("Brazil"));
        map.push("Matchday 1", result("Chile"));
        map.push("Matchday 2", result("Peru"));

        let labels: Vec<&str> = map.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, ["Matchday 2", "Matchday 1"]);
        assert_eq!(map.get("Matchday 2").unwrap().len(), 2);
    }

    #[test]
    fn test_merge_appends_shared_labels() {
        let mut first = JourneyMap::new();
        first.push("Round 1", result("Brazil"));
        first.push("Round 1", result("Chile"));

        let mut second = JourneyMap::new();
        second.push("Round 1", result("Spain"));
        second.push("Round 1", result("Getafe"));
        second.push("Round 2", result("Sevilla"));

        first.merge(second);

        let round_one = first.get("Round 1").unwrap();
        assert_eq!(round_one.len(), 4);
        assert_eq!(round_one[0].winner, "Brazil");
        assert_eq!(round_one[2].winner, "Spain");
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut map = JourneyMap::new();
        map.push("Matchday 10", result("Brazil"));
        map.push("Matchday 9", result("Chile"));

        let json = serde_json::to_string(&map).unwrap();
        let day_ten = json.find("Matchday 10").unwrap();
        let day_nine = json.find("Matchday 9").unwrap();
        assert!(day_ten < day_nine);
    }
}
