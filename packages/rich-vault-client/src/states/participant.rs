use rich_vault_types::{Address, ParticipantStatus};
#[cfg(feature = "serde")]
use serde::Serialize;

/// What a vault knows about one of its participants
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParticipantRecord {
    pub address: Address,
    pub status: ParticipantStatus,
    pub has_submitted_wealth: bool,
}
