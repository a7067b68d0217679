use std::sync::Arc;

use rich_vault_types::{Address, ParticipantStatus};
use tracing::trace;

use crate::{
    calls::{ReadCall, ReadValue},
    clients::ContractReader,
    config::ClientConfig,
    VaultError, VaultResult,
};

/// Read side of the client: single vault aggregation, vault lists and live vault views.
///
/// Cheap to clone, clones share the same contract reader.
pub struct VaultReader<R> {
    reader: Arc<R>,
    config: ClientConfig,
}

impl<R> Clone for VaultReader<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            config: self.config.clone(),
        }
    }
}

impl<R: ContractReader> VaultReader<R> {
    pub fn new(reader: Arc<R>, config: ClientConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn contract_reader(&self) -> &R {
        &self.reader
    }

    pub(crate) async fn read(&self, contract: Address, call: ReadCall) -> VaultResult<ReadValue> {
        trace!(%contract, function = call.function_name(), "Reading");
        self.reader
            .read(contract, call, self.config.chain_id)
            .await
            .map_err(|err| VaultError::ReadFailed {
                function: call.function_name(),
                reason: err.0,
            })
    }

    pub(crate) async fn read_string(&self, contract: Address, call: ReadCall) -> VaultResult<String> {
        self.read(contract, call).await?.into_string(&call)
    }

    pub(crate) async fn read_address(
        &self,
        contract: Address,
        call: ReadCall,
    ) -> VaultResult<Address> {
        self.read(contract, call).await?.into_address(&call)
    }

    pub(crate) async fn read_addresses(
        &self,
        contract: Address,
        call: ReadCall,
    ) -> VaultResult<Vec<Address>> {
        self.read(contract, call).await?.into_addresses(&call)
    }

    pub(crate) async fn read_bool(&self, contract: Address, call: ReadCall) -> VaultResult<bool> {
        self.read(contract, call).await?.into_bool(&call)
    }

    pub(crate) async fn read_status(
        &self,
        vault: Address,
        account: Address,
    ) -> VaultResult<ParticipantStatus> {
        let call = ReadCall::Status(account);
        let code = self.read(vault, call).await?.into_u8(&call)?;
        Ok(ParticipantStatus::try_from(code)?)
    }
}
