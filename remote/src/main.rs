use feed_bench_remote::config::{bench_args, Config};
use feed_bench_remote::executor::{AgentExecutor, RemoteExecutor, RemoteJob};
use feed_bench_remote::manifest::ManifestBundle;
use feed_bench_remote::Result;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::parse();

    if let Err(e) = run(config).await {
        log::error!("failed to run remote benchmark:\n{}", e);
    }
}

async fn run(config: Config) -> Result<()> {
    let manifest = ManifestBundle::load(&config.manifest_dir).await?;

    let job = RemoteJob {
        script: config.script.clone(),
        args: bench_args(&config.bench),
        requirements: config.requirements(),
        manifest,
    };

    let executor = AgentExecutor::new(config.agent.clone(), config.market.clone());

    log::info!("submitting benchmark job to the marketplace");

    let output = executor.submit(&job).await?;

    println!("Stdout:");
    println!("{}", output.stdout.trim());

    Ok(())
}
