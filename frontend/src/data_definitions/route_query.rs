//! Route path-segment codec for structured query state.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


/// Wraps a serde value so it can live in a route path segment: CBOR-encoded,
/// then URL-safe base64. Router segment types only need Display + FromStr.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RouteQuery<T>(pub T);

impl<T> From<T> for RouteQuery<T> {
    fn from(value: T) -> Self {
        RouteQuery(value)
    }
}

impl<T: Serialize> Display for RouteQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut bytes = Vec::new();
        if ciborium::into_writer(&self.0, &mut bytes).is_ok() {
            write!(f, "{}", URL_SAFE.encode(bytes))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum RouteQueryParseError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for RouteQueryParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "invalid base64 in route segment: {}", err),
            Self::Cbor(err) => write!(f, "invalid query encoding in route segment: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for RouteQuery<T> {
    type Err = RouteQueryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE
            .decode(s.as_bytes())
            .map_err(RouteQueryParseError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes))
            .map_err(RouteQueryParseError::Cbor)?;
        Ok(RouteQuery(value))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::episode_query::{Combinator, EpisodeQuery};

    #[test]
    fn episode_query_round_trips_through_a_path_segment() {
        let mut query = EpisodeQuery::default();
        query.toggle_color("Bright Red".to_string());
        query.toggle_month(4);
        query.set_combinator(Combinator::Any);

        let segment = RouteQuery(query.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: RouteQuery<EpisodeQuery> = segment.parse().unwrap();
        assert_eq!(parsed.0, query);
    }

    #[test]
    fn garbage_segment_is_rejected() {
        let parsed = "not base64!".parse::<RouteQuery<EpisodeQuery>>();
        assert!(parsed.is_err());
    }
}
