use std::time::{Duration, Instant};

use futures::StreamExt;

use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(600);

pub fn build_client() -> Result<reqwest::Client> {
    reqwest::ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(Error::BuildHttpClient)
}

/// Wall-clock seconds from issuing the request to draining the whole body.
pub async fn download_time(client: &reqwest::Client, url: &url::Url) -> Result<f64> {
    let start = Instant::now();

    let resp = client
        .get(url.clone())
        .send()
        .await
        .map_err(Error::HttpRequest)?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::ResponseStatus(status.as_u16()));
    }

    let mut body = resp.bytes_stream();
    while let Some(chunk) = body.next().await {
        chunk.map_err(Error::Download)?;
    }

    Ok(start.elapsed().as_secs_f64())
}
