//! Collaborators the client delegates to: a contract reader, a contract writer (signing through
//! the connected wallet) and the confidential encryption service.

use std::{fmt, future::Future, sync::Arc};

use rich_vault_types::{Address, TxHash};

use crate::calls::{Ciphertext, ReadCall, ReadValue, VaultEvent, WriteCall};

/// Failure reported by a collaborator, carrying its raw reason text
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for TransportError {}

pub type TransportResult<T> = std::result::Result<T, TransportError>;

pub type EventCallback = Arc<dyn Fn(VaultEvent) + Send + Sync>;

/// Handle returned by [`ContractReader::watch_event`]. The subscription ends when it is dropped.
pub struct Unsubscribe(Option<Box<dyn FnOnce() + Send>>);

impl Unsubscribe {
    pub fn new(on_drop: impl FnOnce() + Send + 'static) -> Self {
        Self(Some(Box::new(on_drop)))
    }

    /// A subscription with nothing to tear down
    pub fn noop() -> Self {
        Self(None)
    }
}

impl Drop for Unsubscribe {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.0.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unsubscribe")
            .field(&self.0.is_some())
            .finish()
    }
}

pub trait ContractReader: Send + Sync {
    fn read(
        &self,
        contract: Address,
        call: ReadCall,
        chain_id: u64,
    ) -> impl Future<Output = TransportResult<ReadValue>> + Send;

    /// Call `on_event` every time `contract` emits `event`, until the handle is dropped
    fn watch_event(
        &self,
        contract: Address,
        event: VaultEvent,
        chain_id: u64,
        on_event: EventCallback,
    ) -> Unsubscribe;
}

pub trait ContractWriter: Send + Sync {
    /// Sign and broadcast `call` from `account`. Resolves once the transaction is broadcast, not
    /// once it is final.
    fn write(
        &self,
        contract: Address,
        call: WriteCall,
        account: Address,
        chain_id: u64,
    ) -> impl Future<Output = TransportResult<TxHash>> + Send;
}

pub trait WealthEncryptor: Send + Sync {
    /// Encrypt `value` so that only `vault` can use it, on behalf of `account`
    fn encrypt(
        &self,
        value: u128,
        account: Address,
        vault: Address,
    ) -> impl Future<Output = TransportResult<Ciphertext>> + Send;
}
