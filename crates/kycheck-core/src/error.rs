use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("negative phrase at index {index} is empty")]
    EmptyPhrase { index: usize },
}
