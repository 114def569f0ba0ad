pub mod components;
pub mod crab;
pub mod dolphin;
pub mod easing;
pub mod obstacle_error;
pub mod obstacle_plugin;
pub mod pose;
