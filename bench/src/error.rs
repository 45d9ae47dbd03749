use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid benchmark config:\n{0}")]
    InvalidConfig(feed_bench_core::Error),
    #[error("a worker thread panicked")]
    WorkerPanic,
}

pub type Result<T> = StdResult<T, Error>;
