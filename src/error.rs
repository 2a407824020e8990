use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{0}")]
    Message(String),
    #[error("corpus {0} is not loaded")]
    UnknownCorpus(Uuid),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
