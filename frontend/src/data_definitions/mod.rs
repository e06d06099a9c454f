pub mod route_query;
