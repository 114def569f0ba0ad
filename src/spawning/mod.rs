pub mod helpers;
pub mod obstacle_spawning;
