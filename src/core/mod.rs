pub mod config;
pub mod constants;
pub mod error;

pub use config::{PoolConfig, SdkConfig, TokenConfig};
pub use error::{SdkError, SdkResult};
