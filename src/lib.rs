pub mod core;
pub mod management;
pub mod spawning;
pub mod systems;

pub mod prelude {
    pub use crate::core::components::{Obstacle, ObstacleKind, ObstacleTag};
    pub use crate::core::obstacle_plugin::ObstaclePlugin;
    pub use crate::management::config::{ObstacleConfig, SeededOrNot};
    pub use crate::management::model_registry::{ObstacleModels, ObstacleState};
    pub use crate::systems::obstacle_query::{ObstacleQuery, ObstacleSnapshot};
}
