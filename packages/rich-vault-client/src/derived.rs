//! UI state derived from an already fetched [`VaultView`].
//!
//! Nothing here performs I/O: every function is a pure computation over the view model, whatever
//! produced it.

use rich_vault_types::{Address, ParticipantStatus};

use crate::states::{ParticipantRecord, VaultView};

/// Every participant has either accepted or rejected
pub fn all_invitations_resolved(vault: &VaultView) -> bool {
    vault.accepted.len() + vault.rejected.len() == vault.participants.len()
}

/// Every accepted participant has submitted. True when nobody has accepted.
pub fn all_accepted_submitted(records: &[ParticipantRecord]) -> bool {
    records
        .iter()
        .filter(|record| record.status == ParticipantStatus::Accepted)
        .all(|record| record.has_submitted_wealth)
}

pub fn current_participant<'a>(
    records: &'a [ParticipantRecord],
    address: &Address,
) -> Option<&'a ParticipantRecord> {
    records.iter().find(|record| record.address == *address)
}

pub fn reveal_eligible(
    vault: &VaultView,
    records: &[ParticipantRecord],
    caller_status: Option<ParticipantStatus>,
) -> bool {
    all_invitations_resolved(vault)
        && all_accepted_submitted(records)
        && caller_status == Some(ParticipantStatus::Accepted)
}

pub fn winner_declared(vault: &VaultView) -> bool {
    vault.winner.is_some()
}

/// Where a vault stands on its way to the reveal
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealPhase {
    AwaitingInvitations,
    AwaitingSubmissions,
    ReadyToReveal,
    Revealed(Address),
}

pub fn reveal_phase(vault: &VaultView) -> RevealPhase {
    if let Some(winner) = vault.winner {
        RevealPhase::Revealed(winner)
    } else if !all_invitations_resolved(vault) {
        RevealPhase::AwaitingInvitations
    } else if !all_accepted_submitted(&vault.records) {
        RevealPhase::AwaitingSubmissions
    } else {
        RevealPhase::ReadyToReveal
    }
}

/// What a participant can do next on the vault
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticipantAction {
    /// Accept or reject the invitation
    Respond,
    SubmitWealth,
    None,
}

pub fn participant_action(record: &ParticipantRecord) -> ParticipantAction {
    match record.status {
        ParticipantStatus::Invited => ParticipantAction::Respond,
        ParticipantStatus::Accepted if !record.has_submitted_wealth => {
            ParticipantAction::SubmitWealth
        }
        ParticipantStatus::Accepted
        | ParticipantStatus::Rejected
        | ParticipantStatus::NotInvited => ParticipantAction::None,
    }
}
