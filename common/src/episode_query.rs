//! Faceted episode query model: the selection state for the three facet groups
//! and its translation into catalog service query parameters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::episode::Episode;


/// How multiple selected facet groups combine. Values inside one group are
/// always alternatives (intra-group OR); the combinator only governs how the
/// per-group conditions are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Combinator {
    /// Every non-empty group must be satisfied (inter-group AND).
    #[default]
    All,
    /// At least one non-empty group must be satisfied.
    Any,
}

impl Combinator {
    /// Wire token for the `filter_type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::All => "AND",
            Combinator::Any => "OR",
        }
    }
}

/// The complete selection state: one set per facet group plus the combinator.
/// An empty group imposes no constraint; with all three groups empty the query
/// is still valid and asks for the unfiltered episode set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EpisodeQuery {
    pub colors: BTreeSet<String>,
    pub subjects: BTreeSet<String>,
    pub months: BTreeSet<u8>,
    pub combinator: Combinator,
}

fn toggle_value<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl EpisodeQuery {
    pub fn toggle_color(&mut self, name: String) {
        toggle_value(&mut self.colors, name);
    }

    pub fn toggle_subject(&mut self, name: String) {
        toggle_value(&mut self.subjects, name);
    }

    pub fn toggle_month(&mut self, month_num: u8) {
        toggle_value(&mut self.months, month_num);
    }

    pub fn set_combinator(&mut self, combinator: Combinator) {
        self.combinator = combinator;
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.subjects.is_empty() && self.months.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.colors.len() + self.subjects.len() + self.months.len()
    }

    /// Serialize the selection into `/api/episodes` query parameters: one
    /// repeated `color` / `subject` / `month` pair per selected value, empty
    /// groups omitted entirely, and `filter_type` always present.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.selected_count() + 1);
        for color in self.colors.iter() {
            pairs.push(("color", color.clone()));
        }
        for subject in self.subjects.iter() {
            pairs.push(("subject", subject.clone()));
        }
        for month in self.months.iter() {
            pairs.push(("month", month.to_string()));
        }
        pairs.push(("filter_type", self.combinator.as_str().to_string()));
        pairs
    }

    /// The matching contract the catalog service evaluates for this query:
    /// within a group, selected values are alternatives; across non-empty
    /// groups, `All` requires every group condition and `Any` requires at
    /// least one. Empty groups are never evaluated, so an all-empty query
    /// matches every episode.
    pub fn matches(&self, episode: &Episode) -> bool {
        let mut group_hits = Vec::with_capacity(3);
        if !self.colors.is_empty() {
            group_hits.push(episode.colors.iter().any(|c| self.colors.contains(c)));
        }
        if !self.subjects.is_empty() {
            group_hits.push(episode.subjects.iter().any(|s| self.subjects.contains(s)));
        }
        if !self.months.is_empty() {
            group_hits.push(episode.air_month().is_some_and(|m| self.months.contains(&m)));
        }
        if group_hits.is_empty() {
            return true;
        }
        match self.combinator {
            Combinator::All => group_hits.iter().all(|hit| *hit),
            Combinator::Any => group_hits.iter().any(|hit| *hit),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn episode(colors: &[&str], air_date: &str) -> Episode {
        Episode {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            air_date: air_date.to_string(),
            ..Episode::default()
        }
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("Bright Red".to_string());
        assert!(query.colors.contains("Bright Red"));
        query.toggle_color("Bright Red".to_string());
        assert!(query.colors.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_state() {
        let mut query = EpisodeQuery::default();
        query.toggle_subject("TREE".to_string());
        query.toggle_month(3);
        let before = query.clone();
        query.toggle_month(7);
        query.toggle_month(7);
        assert_eq!(query, before);
    }

    #[test]
    fn groups_are_independent() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("Bright Red".to_string());
        query.toggle_subject("Bright Red".to_string());
        query.toggle_color("Bright Red".to_string());
        assert!(query.colors.is_empty());
        assert!(query.subjects.contains("Bright Red"));
    }

    #[test]
    fn is_empty_requires_all_three_groups_empty() {
        let mut query = EpisodeQuery::default();
        assert!(query.is_empty());
        query.toggle_month(4);
        assert!(!query.is_empty());
        query.toggle_month(4);
        assert!(query.is_empty());
        query.set_combinator(Combinator::Any);
        assert!(query.is_empty());
    }

    #[test]
    fn set_combinator_keeps_selections() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("Bright Red".to_string());
        query.set_combinator(Combinator::Any);
        assert_eq!(query.combinator, Combinator::Any);
        assert!(query.colors.contains("Bright Red"));
    }

    #[test]
    fn empty_query_serializes_to_filter_type_only() {
        let pairs = EpisodeQuery::default().to_query_pairs();
        assert_eq!(pairs, vec![("filter_type", "AND".to_string())]);
    }

    #[test]
    fn query_pairs_omit_empty_groups() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("A".to_string());
        query.toggle_color("B".to_string());
        query.toggle_month(4);
        query.toggle_month(5);
        query.set_combinator(Combinator::Any);

        let pairs = query.to_query_pairs();
        let colors: Vec<&str> = pairs.iter().filter(|(k, _)| *k == "color").map(|(_, v)| v.as_str()).collect();
        let months: Vec<&str> = pairs.iter().filter(|(k, _)| *k == "month").map(|(_, v)| v.as_str()).collect();
        assert_eq!(colors, vec!["A", "B"]);
        assert_eq!(months, vec!["4", "5"]);
        assert!(!pairs.iter().any(|(k, _)| *k == "subject"));
        assert_eq!(pairs.last(), Some(&("filter_type", "OR".to_string())));
    }

    #[test]
    fn all_mode_requires_every_selected_group() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("Red".to_string());
        query.toggle_color("Blue".to_string());
        query.toggle_month(3);

        assert!(query.matches(&episode(&["Red"], "1984-03-10")));
        assert!(!query.matches(&episode(&["Green"], "1984-03-10")));
        assert!(!query.matches(&episode(&["Red"], "1984-05-10")));
    }

    #[test]
    fn any_mode_accepts_a_single_satisfied_group() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("Red".to_string());
        query.toggle_color("Blue".to_string());
        query.toggle_month(3);
        query.set_combinator(Combinator::Any);

        assert!(query.matches(&episode(&["Red"], "1984-05-10")));
        assert!(!query.matches(&episode(&["Green"], "1984-06-10")));
    }

    #[test]
    fn empty_selection_matches_everything() {
        let query = EpisodeQuery::default();
        assert!(query.matches(&episode(&["Green"], "1984-06-10")));
        let mut any = query.clone();
        any.set_combinator(Combinator::Any);
        assert!(any.matches(&episode(&[], "")));
    }

    #[test]
    fn subject_group_matches_multivalued_episodes() {
        let mut query = EpisodeQuery::default();
        query.toggle_subject("TREE".to_string());
        query.toggle_subject("MOUNTAIN".to_string());

        let mut with_tree = episode(&[], "1984-01-01");
        with_tree.subjects = vec!["CABIN".to_string(), "TREE".to_string()];
        assert!(query.matches(&with_tree));

        let mut without = episode(&[], "1984-01-01");
        without.subjects = vec!["CABIN".to_string()];
        assert!(!query.matches(&without));
    }

    #[test]
    fn unparseable_air_date_never_matches_a_month_filter() {
        let mut query = EpisodeQuery::default();
        query.toggle_month(3);
        assert!(!query.matches(&episode(&[], "unknown")));
    }
}
