use std::env;

use rich_vault_types::{network, Address, TxHash};
#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::{VaultError, VaultResult};

pub const CHAIN_ID_ENV: &str = "RICH_VAULT_CHAIN_ID";
pub const FACTORY_ADDRESS_ENV: &str = "RICH_VAULT_FACTORY_ADDRESS";
pub const EXPLORER_URL_ENV: &str = "RICH_VAULT_EXPLORER_URL";

/// Where the client reads and writes. Defaults to the network selected at build time.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClientConfig {
    pub chain_id: u64,
    pub factory: Address,
    pub explorer_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            chain_id: network::CHAIN_ID,
            factory: network::FACTORY_ADDRESS,
            explorer_url: network::EXPLORER_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Build-time defaults, overridden by the `RICH_VAULT_*` environment variables that are set
    pub fn from_env() -> VaultResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> VaultResult<Self> {
        let mut config = Self::default();
        if let Some(raw) = lookup(CHAIN_ID_ENV) {
            config.chain_id = raw.trim().parse().map_err(|_| {
                VaultError::InvalidConfig(format!("{CHAIN_ID_ENV}={raw:?} is not a chain id"))
            })?;
        }
        if let Some(raw) = lookup(FACTORY_ADDRESS_ENV) {
            config.factory = raw.trim().parse().map_err(|err| {
                VaultError::InvalidConfig(format!("{FACTORY_ADDRESS_ENV}={raw:?}: {err}"))
            })?;
        }
        if let Some(raw) = lookup(EXPLORER_URL_ENV) {
            config.explorer_url = raw.trim().trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    pub fn tx_url(&self, hash: &TxHash) -> String {
        format!("{}/tx/{}", self.explorer_url, hash)
    }
}
