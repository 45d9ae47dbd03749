pub mod config;
pub mod error;
pub mod executor;
pub mod manifest;

pub use error::{Error, Result};
pub use executor::{AgentExecutor, CapturedOutput, RemoteExecutor, RemoteJob};
pub use manifest::ManifestBundle;
