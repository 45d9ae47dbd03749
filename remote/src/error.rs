use std::io;
use std::path::PathBuf;
use std::result::Result as StdResult;
use std::string::FromUtf8Error;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to read manifest file {0}:\n{1}")]
    ReadManifestFile(PathBuf, io::Error),
    #[error("failed to run marketplace agent:\n{0}")]
    RunAgent(io::Error),
    #[error("marketplace agent exited with status {0:?}. stderr:\n{1}")]
    AgentFailed(Option<i32>, String),
    #[error("agent output is not valid utf-8:\n{0}")]
    OutputNotUtf8(FromUtf8Error),
}

pub type Result<T> = StdResult<T, Error>;
