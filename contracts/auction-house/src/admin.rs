use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::MarketplaceConfig;

/// Persist the configuration. Callable exactly once.
pub fn initialize(e: &Env, admin: &Address, config: &MarketplaceConfig) -> Result<(), Error> {
    if storage::has_config(e) {
        return Err(Error::AlreadyInitialized);
    }
    admin.require_auth();

    if config.reserve_price < 0 || config.beneficiary_share_percentage > 100 {
        return Err(Error::InvalidConfig);
    }

    let now = e.ledger().timestamp();
    let fits = |secs: u64| now.checked_add(secs).is_some();
    if !fits(config.duration) || !fits(config.time_buffer) {
        return Err(Error::InvalidConfig);
    }

    storage::set_admin(e, admin);
    storage::set_config(e, config);
    storage::extend_instance_ttl(e);
    Ok(())
}

pub fn require_config(e: &Env) -> Result<MarketplaceConfig, Error> {
    storage::get_config(e).ok_or(Error::NotInitialized)
}
