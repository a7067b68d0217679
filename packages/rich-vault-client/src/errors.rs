use std::fmt;

use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use rich_vault_types::{Address, AddressParseError, ParticipantStatus};

/// How an error should be surfaced to the person using the client
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    /// Bad input, caught before any network call
    Validation,
    /// The vault refused the operation in its current state
    Precondition,
    /// The account holder declined to sign
    UserDeclined,
    /// Any other read, write or encryption failure
    Network,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum VaultError {
    EmptyVaultName,
    NoParticipants,
    InvalidAddress { input: String, reason: AddressParseError },
    DuplicateParticipant(Address),
    InvalidInput(String),
    InvalidConfig(String),

    NotInvited,
    InvitationsPending,

    UserRejectedSignature,

    ReadFailed { function: &'static str, reason: String },
    WriteFailed { function: &'static str, reason: String },
    UnexpectedReturn { function: &'static str },
    UnknownStatus(u8),
    Encryption(String),
    TaskFailed(String),
}

pub type VaultResult<T = ()> = std::result::Result<T, VaultError>;

impl VaultError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VaultError::EmptyVaultName
            | VaultError::NoParticipants
            | VaultError::InvalidAddress { .. }
            | VaultError::DuplicateParticipant(_)
            | VaultError::InvalidInput(_)
            | VaultError::InvalidConfig(_) => ErrorKind::Validation,
            VaultError::NotInvited | VaultError::InvitationsPending => ErrorKind::Precondition,
            VaultError::UserRejectedSignature => ErrorKind::UserDeclined,
            VaultError::ReadFailed { .. }
            | VaultError::WriteFailed { .. }
            | VaultError::UnexpectedReturn { .. }
            | VaultError::UnknownStatus(_)
            | VaultError::Encryption(_)
            | VaultError::TaskFailed(_) => ErrorKind::Network,
        }
    }

    /// Short text meant to be shown as is next to the control that triggered the operation
    pub fn user_message(&self) -> &'static str {
        match self {
            VaultError::EmptyVaultName => "Vault name is required",
            VaultError::NoParticipants => "Add at least one participant",
            VaultError::InvalidAddress { .. } => "Invalid address format",
            VaultError::DuplicateParticipant(_) => "Participant listed more than once",
            VaultError::InvalidInput(_) => "Please enter a valid wealth amount",
            VaultError::InvalidConfig(_) => "Invalid client configuration",
            VaultError::NotInvited => "Not invited or already responded.",
            VaultError::InvitationsPending => "Invitations pending.",
            VaultError::UserRejectedSignature => "Transaction not completed.",
            VaultError::ReadFailed { .. }
            | VaultError::UnexpectedReturn { .. }
            | VaultError::UnknownStatus(_)
            | VaultError::TaskFailed(_) => "Failed to load vault data. Please try again later.",
            VaultError::WriteFailed { .. } | VaultError::Encryption(_) => "Transaction failed",
        }
    }
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::EmptyVaultName => write!(f, "Vault name is empty"),
            VaultError::NoParticipants => write!(f, "No participant given"),
            VaultError::InvalidAddress { input, reason } => {
                write!(f, "Invalid address {input:?}: {reason}")
            }
            VaultError::DuplicateParticipant(address) => {
                write!(f, "Participant {address} is listed more than once")
            }
            VaultError::InvalidInput(input) => {
                write!(f, "Wealth {input:?} is not a non-negative integer")
            }
            VaultError::InvalidConfig(reason) => write!(f, "Invalid configuration: {reason}"),
            VaultError::NotInvited => write!(f, "Account is not invited or already responded"),
            VaultError::InvitationsPending => write!(f, "Some invitations are still pending"),
            VaultError::UserRejectedSignature => write!(f, "Signature request was declined"),
            VaultError::ReadFailed { function, reason } => {
                write!(f, "Read of {function} failed: {reason}")
            }
            VaultError::WriteFailed { function, reason } => {
                write!(f, "Call to {function} failed: {reason}")
            }
            VaultError::UnexpectedReturn { function } => {
                write!(f, "Unexpected value returned by {function}")
            }
            VaultError::UnknownStatus(code) => write!(f, "Unknown participant status {code}"),
            VaultError::Encryption(reason) => write!(f, "Wealth encryption failed: {reason}"),
            VaultError::TaskFailed(reason) => write!(f, "Background read failed: {reason}"),
        }
    }
}

impl std::error::Error for VaultError {}

impl From<TryFromPrimitiveError<ParticipantStatus>> for VaultError {
    fn from(err: TryFromPrimitiveError<ParticipantStatus>) -> Self {
        VaultError::UnknownStatus(err.number)
    }
}

impl From<tokio::task::JoinError> for VaultError {
    fn from(err: tokio::task::JoinError) -> Self {
        VaultError::TaskFailed(err.to_string())
    }
}

/// Classify the failure reason reported by a contract write.
///
/// The vault only reports reverts as free text, so the known revert strings and the wallet
/// refusal messages are matched by substring.
pub fn classify_write_failure(function: &'static str, reason: &str) -> VaultError {
    const NOT_INVITED: &str = "Not invited";
    const INVITATIONS_PENDING: &str = "Some invitations still pending";
    const USER_DECLINED: [&str; 2] = ["user rejected", "user denied"];

    let lowered = reason.to_lowercase();
    if USER_DECLINED.iter().any(|needle| lowered.contains(needle)) {
        VaultError::UserRejectedSignature
    } else if reason.contains(NOT_INVITED) {
        VaultError::NotInvited
    } else if reason.contains(INVITATIONS_PENDING) {
        VaultError::InvitationsPending
    } else {
        VaultError::WriteFailed {
            function,
            reason: reason.to_string(),
        }
    }
}

/// Decode the `uint8` returned by `status(address)`
pub fn decode_status(code: u8) -> VaultResult<ParticipantStatus> {
    Ok(ParticipantStatus::try_from_primitive(code)?)
}
