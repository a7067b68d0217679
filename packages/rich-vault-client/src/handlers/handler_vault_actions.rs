use rich_vault_types::{Address, TxHash};
use tracing::debug;

use crate::{
    calls::WriteCall,
    clients::{ContractWriter, WealthEncryptor},
    utils::parse_wealth,
    VaultDispatcher, VaultError, VaultResult,
};

impl<W: ContractWriter, E: WealthEncryptor> VaultDispatcher<W, E> {
    /// Fails with [`VaultError::NotInvited`] if `account` is no longer invited when the
    /// transaction executes
    pub async fn accept_invitation(&self, vault: Address, account: Address) -> VaultResult<TxHash> {
        self.send(vault, WriteCall::AcceptInvitation, account).await
    }

    /// Same failure shape as [`Self::accept_invitation`]
    pub async fn reject_invitation(&self, vault: Address, account: Address) -> VaultResult<TxHash> {
        self.send(vault, WriteCall::RejectInvitation, account).await
    }

    /// Encrypt `raw_value` for `vault` and submit it.
    ///
    /// `raw_value` is checked first: nothing is encrypted nor sent if it is not a non-negative
    /// integer.
    pub async fn submit_wealth(
        &self,
        vault: Address,
        account: Address,
        raw_value: &str,
    ) -> VaultResult<TxHash> {
        let value = parse_wealth(raw_value)?;
        debug!(%vault, %account, "Encrypting wealth");
        let ciphertext = self
            .encryptor()
            .encrypt(value, account, vault)
            .await
            .map_err(|err| VaultError::Encryption(err.0))?;
        self.send(vault, WriteCall::SubmitEncryptedWealth(ciphertext), account)
            .await
    }

    /// Ask the vault to compute the richest accepted participant.
    ///
    /// The vault checks that every invitation is resolved and every accepted participant
    /// submitted, and fails with [`VaultError::InvitationsPending`] otherwise. The winner is
    /// written later by the vault, read it back with [`crate::VaultReader::read_vault`].
    pub async fn declare_richest(&self, vault: Address, account: Address) -> VaultResult<TxHash> {
        self.send(vault, WriteCall::DeclareRichest, account).await
    }
}
