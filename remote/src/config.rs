use std::path::PathBuf;

use clap::Parser;
use feed_bench_core::config::BenchConfig;

use crate::executor::{MarketConfig, ResourceRequirements};

#[derive(Clone, Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub bench: BenchConfig,

    #[command(flatten)]
    pub market: MarketConfig,

    /// Requestor agent executable that talks to the marketplace
    #[clap(long, default_value = "requestor-agent")]
    pub agent: String,

    /// Benchmark executable to run on the provider image
    #[clap(long, default_value = "feed-bench")]
    pub script: String,

    /// Directory holding the payload manifest files
    #[clap(long, default_value = ".")]
    pub manifest_dir: PathBuf,

    /// Minimum provider memory, GiB
    #[clap(long, default_value_t = 0.5)]
    pub min_mem_gib: f64,

    /// Minimum provider cpu threads
    #[clap(long, default_value_t = 0.5)]
    pub min_cpu_threads: f64,

    /// Provider capability requirements
    #[clap(
        long = "capability",
        default_values_t = ["inet".to_owned(), "manifest-support".to_owned()]
    )]
    pub capabilities: Vec<String>,
}

impl Config {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn requirements(&self) -> ResourceRequirements {
        ResourceRequirements {
            min_mem_gib: self.min_mem_gib,
            min_cpu_threads: self.min_cpu_threads,
            capabilities: self.capabilities.clone(),
        }
    }
}

/// Serialize a benchmark config back into the flags the benchmark binary
/// accepts, so the provider-side run matches a local one.
pub fn bench_args(cfg: &BenchConfig) -> Vec<String> {
    let rpc = cfg
        .rpc
        .iter()
        .map(|url| url.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut args = vec![
        "--batch".to_owned(),
        cfg.batch.to_string(),
        "--iterations".to_owned(),
        cfg.iterations.to_string(),
        "--rpc".to_owned(),
        rpc,
        "--contract".to_owned(),
        cfg.contract.to_string(),
    ];

    if let Some(threads) = cfg.threads {
        args.push("--threads".to_owned());
        args.push(threads.to_string());
    }

    args
}
