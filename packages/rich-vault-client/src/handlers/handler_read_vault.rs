use rich_vault_types::Address;
use tokio::task::JoinSet;
use tracing::debug;

use crate::{
    calls::ReadCall,
    clients::ContractReader,
    states::{ParticipantRecord, VaultView},
    VaultError, VaultReader, VaultResult,
};

impl<R: ContractReader + 'static> VaultReader<R> {
    /// Read everything about `vault`, and the status of `caller` on it when given.
    ///
    /// All reads are issued concurrently. The first failing read fails the whole aggregation and
    /// cancels the reads still in flight: a view is either complete or not returned at all.
    pub async fn read_vault(
        &self,
        vault: Address,
        caller: Option<Address>,
    ) -> VaultResult<VaultView> {
        debug!(%vault, ?caller, "Reading vault");

        let caller_status = async {
            match caller {
                Some(caller) => self.read_status(vault, caller).await.map(Some),
                None => Ok(None),
            }
        };

        let (name, creator, participants, accepted, rejected, winner, caller_status) = tokio::try_join!(
            self.read_string(vault, ReadCall::VaultName),
            self.read_address(vault, ReadCall::VaultCreator),
            self.read_addresses(vault, ReadCall::GetParticipants),
            self.read_addresses(vault, ReadCall::GetAccepted),
            self.read_addresses(vault, ReadCall::GetRejected),
            self.read_address(vault, ReadCall::WinnerAddress),
            caller_status,
        )?;

        let records = self.read_records(vault, &participants).await?;

        Ok(VaultView {
            address: vault,
            name,
            creator,
            participants,
            accepted,
            rejected,
            records,
            winner: (!winner.is_zero()).then_some(winner),
            caller_status,
        })
    }

    async fn read_records(
        &self,
        vault: Address,
        participants: &[Address],
    ) -> VaultResult<Vec<ParticipantRecord>> {
        let mut reads = JoinSet::new();
        for (index, participant) in participants.iter().copied().enumerate() {
            let this = self.clone();
            reads.spawn(async move {
                let (status, has_submitted_wealth) = tokio::try_join!(
                    this.read_status(vault, participant),
                    this.read_bool(vault, ReadCall::HasSubmittedWealth(participant)),
                )?;
                Ok::<_, VaultError>((
                    index,
                    ParticipantRecord {
                        address: participant,
                        status,
                        has_submitted_wealth,
                    },
                ))
            });
        }

        let mut records = vec![None; participants.len()];
        // Returning early drops `reads`, which aborts the remaining tasks
        while let Some(joined) = reads.join_next().await {
            let (index, record) = joined??;
            records[index] = Some(record);
        }
        Ok(records.into_iter().flatten().collect())
    }
}
