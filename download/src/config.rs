use std::path::PathBuf;

use clap::Parser;
use feed_bench_remote::executor::{MarketConfig, ResourceRequirements};

#[derive(Clone, Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Url with the file to download
    #[clap(long)]
    pub url: url::Url,

    /// Measure directly from this machine instead of going through the
    /// marketplace
    #[clap(long)]
    pub local: bool,

    #[command(flatten)]
    pub market: MarketConfig,

    /// Requestor agent executable that talks to the marketplace
    #[clap(long, default_value = "requestor-agent")]
    pub agent: String,

    /// Download entrypoint on the provider image
    #[clap(long, default_value = "/entrypoints/download.sh")]
    pub entrypoint: String,

    /// Directory holding the payload manifest files
    #[clap(long, default_value = ".")]
    pub manifest_dir: PathBuf,
}

impl Config {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn requirements(&self) -> ResourceRequirements {
        ResourceRequirements {
            min_cpu_threads: 1.0,
            ..ResourceRequirements::default()
        }
    }
}
