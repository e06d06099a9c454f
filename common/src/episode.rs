//! Episode models as returned by `/api/episodes`.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Episode {
    pub episode_id: u64,
    pub title: String,
    pub season: String,
    pub episode: String,
    /// `YYYY-MM-DD`.
    pub air_date: String,
    pub youtube_src: Option<String>,
    pub colors: Vec<String>,
    pub subjects: Vec<String>,
}

impl Episode {
    /// Month (1-12) extracted from `air_date`, if the date is well-formed.
    pub fn air_month(&self) -> Option<u8> {
        let month: u8 = self.air_date.get(5..7)?.parse().ok()?;
        if (1..=12).contains(&month) { Some(month) } else { None }
    }
}

/// One complete search response. Each new search replaces the previous result
/// wholesale, there is no merge or append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EpisodeSearchResult {
    pub episodes: Vec<Episode>,
    pub total_episodes: u64,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_month_parses_well_formed_dates() {
        let episode = Episode { air_date: "1983-03-19".to_string(), ..Episode::default() };
        assert_eq!(episode.air_month(), Some(3));
    }

    #[test]
    fn air_month_rejects_garbage() {
        for bad in ["", "19-03-1983", "1983-99-01", "soon"] {
            let episode = Episode { air_date: bad.to_string(), ..Episode::default() };
            assert_eq!(episode.air_month(), None, "air_date: {bad:?}");
        }
    }

    #[test]
    fn episodes_endpoint_shape_deserializes() {
        // youtube_src and subjects are optional on the wire.
        let body = r#"{
            "episodes": [{
                "episode_id": 1,
                "title": "A Walk in the Woods",
                "season": "S01",
                "episode": "E01",
                "air_date": "1983-01-11",
                "colors": ["Bright Red", "Titanium White"]
            }]
        }"#;
        let result: EpisodeSearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.episodes.len(), 1);
        assert_eq!(result.episodes[0].youtube_src, None);
        assert!(result.episodes[0].subjects.is_empty());
        assert_eq!(result.episodes[0].air_month(), Some(1));
    }
}
