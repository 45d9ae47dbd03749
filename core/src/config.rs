use std::num::{NonZeroU64, NonZeroUsize};
use std::thread::available_parallelism;

use clap::Args;

use crate::deserialize::Address;
use crate::error::{Error, Result};

/// Parameters of one benchmark run. Shared between the local and the
/// remote-submission binaries so both accept the same flags.
#[derive(Clone, Debug, Args)]
pub struct BenchConfig {
    /// Calls to issue per round
    #[clap(short, long, default_value_t = 100)]
    pub batch: usize,
    /// Number of rounds
    #[clap(short, long, default_value_t = 5)]
    pub iterations: usize,
    /// Worker pool size. Defaults to the number of host cpu cores
    #[clap(short, long)]
    pub threads: Option<NonZeroUsize>,
    /// Comma separated list of rpc endpoint urls
    #[clap(
        short,
        long,
        value_delimiter = ',',
        default_value = "https://rpc.ankr.com/eth"
    )]
    pub rpc: Vec<url::Url>,
    /// Price feed contract address
    #[clap(
        short,
        long,
        default_value = "0x83441C3A10F4D05de6e0f2E849A850Ccf27E6fa7"
    )]
    pub contract: Address,
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.rpc.is_empty() {
            return Err(Error::NoEndpoints);
        }

        Ok(())
    }

    /// Endpoint used by the i-th call of a round. A single endpoint is just
    /// a list of length one.
    pub fn endpoint_for(&self, call_index: usize) -> &url::Url {
        &self.rpc[call_index % self.rpc.len()]
    }

    pub fn threads(&self) -> usize {
        match self.threads {
            Some(threads) => threads.get(),
            None => available_parallelism().map(usize::from).unwrap_or(1),
        }
    }
}

#[derive(Clone, Copy, Debug, Args)]
pub struct HttpConfig {
    /// Http request timeout in seconds
    #[clap(long, default_value = "30")]
    pub request_timeout_secs: NonZeroU64,
    /// Http connect timeout in milliseconds
    #[clap(long, default_value = "5000")]
    pub connect_timeout_ms: NonZeroU64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config_with_endpoints(urls: &[&str]) -> BenchConfig {
        BenchConfig {
            batch: 3,
            iterations: 1,
            threads: None,
            rpc: urls.iter().map(|u| url::Url::parse(u).unwrap()).collect(),
            contract: Address::from_str("0x83441C3A10F4D05de6e0f2E849A850Ccf27E6fa7").unwrap(),
        }
    }

    #[test]
    fn round_robin_endpoints() {
        let cfg = config_with_endpoints(&["http://a.example/", "http://b.example/"]);

        let used = (0..cfg.batch)
            .map(|i| cfg.endpoint_for(i).as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            used,
            vec!["http://a.example/", "http://b.example/", "http://a.example/"]
        );
    }

    #[test]
    fn single_endpoint_serves_every_call() {
        let cfg = config_with_endpoints(&["http://a.example/"]);

        for i in 0..7 {
            assert_eq!(cfg.endpoint_for(i).as_str(), "http://a.example/");
        }
    }

    #[test]
    fn empty_endpoint_list_is_rejected() {
        let cfg = config_with_endpoints(&[]);
        assert!(cfg.validate().is_err());
    }
}
