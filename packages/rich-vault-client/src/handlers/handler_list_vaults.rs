use std::collections::HashSet;

use rich_vault_types::Address;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::{
    calls::ReadCall, clients::ContractReader, states::VaultSummary, VaultReader, VaultResult,
};

impl<R: ContractReader + 'static> VaultReader<R> {
    /// List the vaults `user` created or is invited to.
    ///
    /// A failed discovery read fails the list. A vault that cannot be read is left out of the
    /// list and logged, the others are still returned.
    pub async fn list_vaults(&self, user: Address) -> VaultResult<Vec<VaultSummary>> {
        let factory = self.config().factory;
        let (created, invited) = tokio::try_join!(
            self.read_addresses(factory, ReadCall::GetCreatedVaults(user)),
            self.read_addresses(factory, ReadCall::GetUserVaults(user)),
        )?;

        let vaults = unique_vaults(created, invited);
        debug!(%user, count = vaults.len(), "Found vaults");

        let mut reads = JoinSet::new();
        for (index, vault) in vaults.into_iter().enumerate() {
            let this = self.clone();
            reads.spawn(async move { (index, vault, this.read_vault(vault, Some(user)).await) });
        }

        let mut summaries = Vec::with_capacity(reads.len());
        while let Some(joined) = reads.join_next().await {
            match joined {
                Ok((index, _, Ok(view))) => summaries.push((index, VaultSummary::from(view))),
                Ok((_, vault, Err(err))) => {
                    warn!(%vault, %user, %err, "Skipping unreadable vault");
                }
                Err(err) => warn!(%user, %err, "Vault read task failed"),
            }
        }
        summaries.sort_by_key(|(index, _)| *index);
        Ok(summaries.into_iter().map(|(_, summary)| summary).collect())
    }
}

/// Created vaults then invited vaults, each address once, in first seen order
pub fn unique_vaults(created: Vec<Address>, invited: Vec<Address>) -> Vec<Address> {
    let mut seen = HashSet::new();
    created
        .into_iter()
        .chain(invited)
        .filter(|vault| seen.insert(*vault))
        .collect()
}
