pub mod animation;
pub mod obstacle_query;
