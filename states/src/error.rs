use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("State not registered: {0}")]
    StateNotFound(&'static str),
    #[error("Compute not registered: {0}")]
    ComputeNotFound(&'static str),
    #[error("Command not registered: {0}")]
    CommandNotFound(&'static str),
    #[error("Snapshot has no value for {0}, is `State::snapshot` implemented?")]
    SnapshotMissing(&'static str),
}
