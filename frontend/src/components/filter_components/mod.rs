pub mod combinator_select;
pub mod facet_tab_strip;
