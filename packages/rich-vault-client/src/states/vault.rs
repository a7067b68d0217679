use rich_vault_types::{Address, ParticipantStatus};
#[cfg(feature = "serde")]
use serde::Serialize;
use strum::IntoStaticStr;

use super::ParticipantRecord;
use crate::derived;

/// Everything read from one vault in a single aggregation
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VaultView {
    pub address: Address,
    pub name: String,
    pub creator: Address,
    /// In the order the vault was created with
    pub participants: Vec<Address>,
    pub accepted: Vec<Address>,
    pub rejected: Vec<Address>,
    /// One record per entry of `participants`, same order
    pub records: Vec<ParticipantRecord>,
    /// `None` while the vault still holds the zero address
    pub winner: Option<Address>,
    /// Status of the address the view was read for, if any
    pub caller_status: Option<ParticipantStatus>,
}

/// How a vault is shown in the list of vaults of a user
#[derive(IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum VaultDisplayStatus {
    Active,
    Pending,
    Rejected,
}

impl VaultDisplayStatus {
    pub fn classify(caller_status: ParticipantStatus) -> Self {
        match caller_status {
            ParticipantStatus::Rejected => VaultDisplayStatus::Rejected,
            ParticipantStatus::Invited => VaultDisplayStatus::Pending,
            ParticipantStatus::Accepted | ParticipantStatus::NotInvited => {
                VaultDisplayStatus::Active
            }
        }
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// One entry of the list of vaults of a user
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VaultSummary {
    pub address: Address,
    pub name: String,
    pub creator: Address,
    pub participants: Vec<Address>,
    pub accepted: Vec<Address>,
    pub rejected: Vec<Address>,
    pub caller_status: ParticipantStatus,
    pub display_status: VaultDisplayStatus,
    pub all_invitations_resolved: bool,
}

/// A view read without a caller counts as not invited
impl From<VaultView> for VaultSummary {
    fn from(view: VaultView) -> Self {
        let all_invitations_resolved = derived::all_invitations_resolved(&view);
        let caller_status = view.caller_status.unwrap_or(ParticipantStatus::NotInvited);
        Self {
            address: view.address,
            name: view.name,
            creator: view.creator,
            participants: view.participants,
            accepted: view.accepted,
            rejected: view.rejected,
            caller_status,
            display_status: VaultDisplayStatus::classify(caller_status),
            all_invitations_resolved,
        }
    }
}
