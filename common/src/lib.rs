//! Common library exports shared between the frontend and the catalog wire format.

extern crate serde;


pub mod api_const;
pub mod episode;
pub mod episode_query;
pub mod facet_catalog;
