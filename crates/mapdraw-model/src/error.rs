use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown drawing tool: {0}")]
    UnknownTool(String),
    #[error("invalid shape id {value}: {source}")]
    InvalidShapeId {
        value: String,
        #[source]
        source: uuid::Error,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
