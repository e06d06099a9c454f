pub mod episode_card;
pub mod episode_result_list;
