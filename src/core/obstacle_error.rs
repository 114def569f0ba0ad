use thiserror::Error;
use crate::core::components::ObstacleTag;

#[derive(Debug, Error)]
pub enum ObstacleError {
    #[error("could not load {tag:?} model from '{path}': {reason}")]
    ModelLoadFailed {
        tag: ObstacleTag,
        path: String,
        reason: String,
    },
    #[error("{tag:?} model '{path}' contains no scene to instance")]
    EmptyModel {
        tag: ObstacleTag,
        path: String,
    },
    #[error("could not read obstacle config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse obstacle config '{path}': {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}
