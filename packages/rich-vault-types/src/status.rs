use num_enum::{IntoPrimitive, TryFromPrimitive};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Invitation status of an address on a vault, as returned by `status(address)`.
///
/// The status only moves forward: an invited participant accepts or rejects once and stays there.
/// `NotInvited` is what the vault answers for addresses outside its participant list.
#[derive(
    IntoPrimitive, TryFromPrimitive, IntoStaticStr, EnumIter, Clone, Copy, PartialEq, Eq, Hash, Debug,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ParticipantStatus {
    #[strum(serialize = "Not Invited")]
    NotInvited = 0,
    Invited = 1,
    Accepted = 2,
    Rejected = 3,
}

impl ParticipantStatus {
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Accepted and rejected are terminal
    pub fn is_resolved(self) -> bool {
        match self {
            ParticipantStatus::Accepted | ParticipantStatus::Rejected => true,
            ParticipantStatus::NotInvited | ParticipantStatus::Invited => false,
        }
    }

    pub fn can_transition_to(self, next: ParticipantStatus) -> bool {
        match (self, next) {
            (ParticipantStatus::Invited, ParticipantStatus::Accepted)
            | (ParticipantStatus::Invited, ParticipantStatus::Rejected) => true,
            (ParticipantStatus::NotInvited, _)
            | (ParticipantStatus::Invited, _)
            | (ParticipantStatus::Accepted, _)
            | (ParticipantStatus::Rejected, _) => false,
        }
    }
}
