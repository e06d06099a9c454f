//! Shared constants for the catalog service API.

/// Base URL of the episode catalog service. The web build has no runtime
/// environment, so the override is compile-time.
pub const API_BASE_URL: &'static str = match option_env!("EPISODE_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};

pub const FILTERS_PATH: &'static str = "/api/filters";
pub const EPISODES_PATH: &'static str = "/api/episodes";

/// Neutral swatch shown for episode colors the facet catalog does not know about.
pub const DEFAULT_SWATCH_HEX: &'static str = "#9CA3AF";
