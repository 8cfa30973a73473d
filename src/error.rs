#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    #[error("Approval chain has no handlers")]
    Empty,
}
