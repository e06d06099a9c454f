pub mod home_page;
pub mod finder_page;
