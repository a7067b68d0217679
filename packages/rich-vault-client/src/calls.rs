//! The contract surface the client talks to.
//!
//! Reads and writes are described as values so that any transport (JSON-RPC, a wallet bridge, an
//! in-memory chain in tests) can execute them. Function names are the ones exposed by the vault
//! and vault factory contracts.

use std::fmt;

use rich_vault_types::Address;
use strum::IntoStaticStr;

use crate::{VaultError, VaultResult};

/// A view call against a vault or the vault factory
#[derive(IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ReadCall {
    #[strum(serialize = "vaultName")]
    VaultName,
    #[strum(serialize = "vaultCreator")]
    VaultCreator,
    #[strum(serialize = "getParticipants")]
    GetParticipants,
    #[strum(serialize = "getAccepted")]
    GetAccepted,
    #[strum(serialize = "getRejected")]
    GetRejected,
    #[strum(serialize = "winnerAddress")]
    WinnerAddress,
    #[strum(serialize = "status")]
    Status(Address),
    #[strum(serialize = "hasSubmittedWealth")]
    HasSubmittedWealth(Address),
    /// Factory: vaults created by the given address
    #[strum(serialize = "getCreatedVaults")]
    GetCreatedVaults(Address),
    /// Factory: vaults the given address is invited to
    #[strum(serialize = "getUserVaults")]
    GetUserVaults(Address),
}

impl ReadCall {
    pub fn function_name(&self) -> &'static str {
        self.into()
    }

    pub fn args(&self) -> Vec<Address> {
        match self {
            ReadCall::Status(address)
            | ReadCall::HasSubmittedWealth(address)
            | ReadCall::GetCreatedVaults(address)
            | ReadCall::GetUserVaults(address) => vec![*address],
            ReadCall::VaultName
            | ReadCall::VaultCreator
            | ReadCall::GetParticipants
            | ReadCall::GetAccepted
            | ReadCall::GetRejected
            | ReadCall::WinnerAddress => vec![],
        }
    }
}

/// Decoded return value of a [`ReadCall`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ReadValue {
    String(String),
    Address(Address),
    Addresses(Vec<Address>),
    Uint8(u8),
    Bool(bool),
}

impl ReadValue {
    pub fn into_string(self, call: &ReadCall) -> VaultResult<String> {
        match self {
            ReadValue::String(value) => Ok(value),
            _ => Err(unexpected(call)),
        }
    }

    pub fn into_address(self, call: &ReadCall) -> VaultResult<Address> {
        match self {
            ReadValue::Address(value) => Ok(value),
            _ => Err(unexpected(call)),
        }
    }

    pub fn into_addresses(self, call: &ReadCall) -> VaultResult<Vec<Address>> {
        match self {
            ReadValue::Addresses(value) => Ok(value),
            _ => Err(unexpected(call)),
        }
    }

    pub fn into_u8(self, call: &ReadCall) -> VaultResult<u8> {
        match self {
            ReadValue::Uint8(value) => Ok(value),
            _ => Err(unexpected(call)),
        }
    }

    pub fn into_bool(self, call: &ReadCall) -> VaultResult<bool> {
        match self {
            ReadValue::Bool(value) => Ok(value),
            _ => Err(unexpected(call)),
        }
    }
}

fn unexpected(call: &ReadCall) -> VaultError {
    VaultError::UnexpectedReturn {
        function: call.function_name(),
    }
}

/// Opaque encrypted wealth, bound to one account and one vault by the encryptor
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext(0x{})", hex::encode(&self.0))
    }
}

/// A state changing call against a vault or the vault factory
#[derive(IntoStaticStr, Clone, PartialEq, Eq, Debug)]
pub enum WriteCall {
    #[strum(serialize = "acceptInvitation")]
    AcceptInvitation,
    #[strum(serialize = "rejectInvitation")]
    RejectInvitation,
    #[strum(serialize = "submitEncryptedWealth")]
    SubmitEncryptedWealth(Ciphertext),
    #[strum(serialize = "declareRichest")]
    DeclareRichest,
    /// Factory: deploy a new vault
    #[strum(serialize = "createVault")]
    CreateVault {
        name: String,
        participants: Vec<Address>,
    },
}

impl WriteCall {
    pub fn function_name(&self) -> &'static str {
        self.into()
    }
}

/// Events emitted by a vault that change what a vault view shows
#[derive(IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum VaultEvent {
    WealthSubmitted,
    RichestDeclared,
}

impl VaultEvent {
    pub fn event_name(&self) -> &'static str {
        self.into()
    }
}
