use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};
use crate::manifest::{ManifestBundle, SIGNATURE_ALGORITHM};

#[derive(Debug, Clone)]
pub struct ResourceRequirements {
    pub min_mem_gib: f64,
    pub min_cpu_threads: f64,
    pub capabilities: Vec<String>,
}

impl Default for ResourceRequirements {
    fn default() -> Self {
        Self {
            min_mem_gib: 0.5,
            min_cpu_threads: 0.5,
            capabilities: vec!["inet".to_owned(), "manifest-support".to_owned()],
        }
    }
}

/// A job for a marketplace provider: run `script` with `args` on a worker
/// meeting the requirements and capture what it prints.
#[derive(Debug, Clone)]
pub struct RemoteJob {
    pub script: String,
    pub args: Vec<String>,
    pub requirements: ResourceRequirements,
    pub manifest: ManifestBundle,
}

#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Seam to the compute marketplace. Provider negotiation, provisioning,
/// payment and billing all live behind this boundary; the only contract is
/// "run the job, hand back its captured output".
#[async_trait]
pub trait RemoteExecutor {
    async fn submit(&self, job: &RemoteJob) -> Result<CapturedOutput>;
}

/// Market-side knobs, forwarded to the requestor agent untouched.
#[derive(Clone, Debug, clap::Args)]
pub struct MarketConfig {
    /// Maximum spend for the run, in the payment token
    #[clap(long, default_value_t = 1.0)]
    pub budget: f64,
    /// Subnet to look for providers on
    #[clap(long, default_value = "public")]
    pub subnet_tag: String,
    /// Payment driver to settle with
    #[clap(long, default_value = "erc20")]
    pub payment_driver: String,
    /// Payment network to settle on
    #[clap(long, default_value = "holesky")]
    pub payment_network: String,
}

/// Delegates the whole negotiation/provisioning/payment pipeline to an
/// external requestor agent executable and relays the remote output.
pub struct AgentExecutor {
    agent: String,
    market: MarketConfig,
}

impl AgentExecutor {
    pub fn new(agent: String, market: MarketConfig) -> AgentExecutor {
        AgentExecutor { agent, market }
    }

    fn command(&self, job: &RemoteJob) -> Command {
        let mut cmd = Command::new(&self.agent);

        cmd.arg("run")
            .args(["--budget", &self.market.budget.to_string()])
            .args(["--subnet-tag", &self.market.subnet_tag])
            .args(["--payment-driver", &self.market.payment_driver])
            .args(["--payment-network", &self.market.payment_network])
            .args(["--manifest", &job.manifest.payload])
            .args(["--manifest-sig", &job.manifest.signature])
            .args(["--manifest-sig-algorithm", SIGNATURE_ALGORITHM])
            .args(["--manifest-cert", &job.manifest.certificate])
            .args(["--min-mem-gib", &job.requirements.min_mem_gib.to_string()])
            .args([
                "--min-cpu-threads",
                &job.requirements.min_cpu_threads.to_string(),
            ]);

        for capability in &job.requirements.capabilities {
            cmd.args(["--capability", capability]);
        }

        cmd.arg("--").arg(&job.script).args(&job.args);

        cmd
    }
}

#[async_trait]
impl RemoteExecutor for AgentExecutor {
    async fn submit(&self, job: &RemoteJob) -> Result<CapturedOutput> {
        let output = self.command(job).output().await.map_err(Error::RunAgent)?;

        let stdout = String::from_utf8(output.stdout).map_err(Error::OutputNotUtf8)?;
        let stderr = String::from_utf8(output.stderr).map_err(Error::OutputNotUtf8)?;

        if !output.status.success() {
            return Err(Error::AgentFailed(output.status.code(), stderr));
        }

        Ok(CapturedOutput { stdout, stderr })
    }
}
