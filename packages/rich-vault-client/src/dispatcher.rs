use std::sync::Arc;

use rich_vault_types::{Address, TxHash};
use tracing::{debug, info, warn};

use crate::{
    calls::WriteCall,
    clients::{ContractWriter, WealthEncryptor},
    config::ClientConfig,
    errors::classify_write_failure,
    VaultResult,
};

/// Write side of the client.
///
/// Every operation returns as soon as the transaction is broadcast. Refreshing what is displayed
/// afterwards is up to the caller (see [`crate::VaultWatch::refresh`]).
pub struct VaultDispatcher<W, E> {
    writer: Arc<W>,
    encryptor: Arc<E>,
    config: ClientConfig,
}

impl<W, E> Clone for VaultDispatcher<W, E> {
    fn clone(&self) -> Self {
        Self {
            writer: Arc::clone(&self.writer),
            encryptor: Arc::clone(&self.encryptor),
            config: self.config.clone(),
        }
    }
}

impl<W: ContractWriter, E: WealthEncryptor> VaultDispatcher<W, E> {
    pub fn new(writer: Arc<W>, encryptor: Arc<E>, config: ClientConfig) -> Self {
        Self {
            writer,
            encryptor,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn encryptor(&self) -> &E {
        &self.encryptor
    }

    pub(crate) async fn send(
        &self,
        contract: Address,
        call: WriteCall,
        account: Address,
    ) -> VaultResult<TxHash> {
        let function = call.function_name();
        debug!(%contract, %account, function, "Dispatching");
        match self
            .writer
            .write(contract, call, account, self.config.chain_id)
            .await
        {
            Ok(hash) => {
                info!(%contract, function, %hash, "Transaction broadcast");
                Ok(hash)
            }
            Err(err) => {
                let error = classify_write_failure(function, err.reason());
                warn!(%contract, %account, function, reason = err.reason(), "Dispatch failed");
                Err(error)
            }
        }
    }
}
