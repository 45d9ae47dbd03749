use std::result::Result as StdResult;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("failed to build http client:\n{0}")]
    BuildHttpClient(reqwest::Error),
    #[error("failed to execute http request:\n{0}")]
    HttpRequest(reqwest::Error),
    #[error("error: response status is {0}")]
    ResponseStatus(u16),
    #[error("failed to download response body:\n{0}")]
    Download(reqwest::Error),
    #[error("failed to run the job remotely:\n{0}")]
    Remote(feed_bench_remote::Error),
}

pub type Result<T> = StdResult<T, Error>;
