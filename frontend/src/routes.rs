use dioxus::prelude::*;

use common::episode_query::EpisodeQuery;

use crate::components::navbar::Navbar;
use crate::data_definitions::route_query::RouteQuery;
use crate::pages::finder_page::FinderPage;
use crate::pages::home_page::HomePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/find/:query")]
    FinderPage {
        query: RouteQuery<EpisodeQuery>,
    },

}

impl Route {
    pub fn finder_from_query(query: EpisodeQuery) -> Self {
        Self::FinderPage {
            query: RouteQuery::from(query),
        }
    }
}
