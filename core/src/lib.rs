pub mod config;
pub mod deserialize;
pub mod error;
pub mod eth_client;
pub mod eth_request;
pub mod feed;

pub use error::{Error, Result};
