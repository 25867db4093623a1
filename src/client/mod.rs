pub mod base;
pub mod manager;
pub mod position;
pub mod vault;

use std::sync::Arc;

use crate::core::{SdkConfig, SdkResult};

pub use base::{AccountFetcher, BaseClient};
pub use manager::{ManagerService, PreparedOperation, SwapRouteProvider};
pub use position::PositionService;
pub use vault::{StrategyRegistry, VaultClient};

/// Main client with service-based architecture.
pub struct ManagerClient {
    /// Base RPC client
    pub base: Arc<BaseClient>,
    /// Strategy registry of the configured vault program
    pub vault: Arc<VaultClient>,
    /// Position resolution service
    pub positions: PositionService<BaseClient, VaultClient>,
    /// Operation orchestration service
    pub manager: ManagerService<BaseClient, VaultClient>,
    /// The configuration everything above was built from
    pub config: SdkConfig,
}

impl ManagerClient {
    pub fn new(config: SdkConfig) -> SdkResult<Self> {
        config.validate()?;

        let base = Arc::new(BaseClient::new(&config.rpc_url));
        let vault = Arc::new(VaultClient::new(base.clone(), config.vault_program_id));
        let positions = PositionService::new(
            base.clone(),
            vault.clone(),
            config.vault_program_id,
            config.pool.program_id,
        );
        let manager = ManagerService::new(base.clone(), vault.clone(), &config);

        Ok(Self {
            base,
            vault,
            positions,
            manager,
            config,
        })
    }

    /// Load the configuration file at `path` and build a client from it.
    pub fn from_config_file(path: &str) -> SdkResult<Self> {
        Self::new(SdkConfig::load(path)?)
    }
}
