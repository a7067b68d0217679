use rich_vault_types::{Address, TxHash};

use crate::{
    calls::WriteCall,
    clients::{ContractWriter, WealthEncryptor},
    utils::{validate_participants, validate_vault_name},
    VaultDispatcher, VaultResult,
};

impl<W: ContractWriter, E: WealthEncryptor> VaultDispatcher<W, E> {
    /// Deploy a new vault through the factory.
    ///
    /// `participants` are the raw form entries: blank ones are ignored, the others must be
    /// distinct valid addresses.
    pub async fn create_vault<S: AsRef<str>>(
        &self,
        account: Address,
        name: &str,
        participants: &[S],
    ) -> VaultResult<TxHash> {
        let name = validate_vault_name(name)?;
        let participants = validate_participants(participants)?;
        let factory = self.config().factory;
        self.send(
            factory,
            WriteCall::CreateVault { name, participants },
            account,
        )
        .await
    }
}
