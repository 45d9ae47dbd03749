use feed_bench_download::config::Config;
use feed_bench_download::{measure, Error, Result};
use feed_bench_remote::executor::{AgentExecutor, RemoteExecutor, RemoteJob};
use feed_bench_remote::manifest::ManifestBundle;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::parse();

    if let Err(e) = run(config).await {
        log::error!("failed to measure download time:\n{}", e);
    }
}

async fn run(config: Config) -> Result<()> {
    if config.local {
        let client = measure::build_client()?;
        let secs = measure::download_time(&client, &config.url).await?;

        println!("download took {:.2} seconds from {}", secs, config.url);

        return Ok(());
    }

    let manifest = ManifestBundle::load(&config.manifest_dir)
        .await
        .map_err(Error::Remote)?;

    let job = RemoteJob {
        script: config.entrypoint.clone(),
        args: vec![config.url.to_string()],
        requirements: config.requirements(),
        manifest,
    };

    let executor = AgentExecutor::new(config.agent.clone(), config.market.clone());

    log::info!("submitting download job to the marketplace");

    let output = executor.submit(&job).await.map_err(Error::Remote)?;

    println!(
        "remote provider took {} seconds to download a file from {}",
        output.stdout.trim(),
        config.url,
    );

    Ok(())
}
