pub mod error_boundary;
pub mod suspend_boundary;
pub mod navbar;
pub mod facet_catalog_cache;
pub mod filter_components;
pub mod episode_components;
