use std::sync::Arc;

use rich_vault_types::Address;
use tokio::{
    sync::{watch, Notify},
    task::JoinHandle,
};
use tracing::{debug, warn};

use crate::{
    calls::VaultEvent,
    clients::{ContractReader, Unsubscribe},
    states::VaultView,
    VaultReader, VaultResult,
};

const WATCHED_EVENTS: [VaultEvent; 2] = [VaultEvent::WealthSubmitted, VaultEvent::RichestDeclared];

/// A live view of one vault.
///
/// The vault is read once when the watch starts, then again after every `WealthSubmitted` or
/// `RichestDeclared` event and every [`VaultWatch::refresh`]. Requests made while a read is already
/// pending are merged into that read. Dropping the watch stops the reads and the subscriptions.
pub struct VaultWatch {
    vault: Address,
    refresh: Arc<Notify>,
    updates: watch::Receiver<Option<VaultResult<VaultView>>>,
    task: JoinHandle<()>,
    _subscriptions: Vec<Unsubscribe>,
}

impl VaultWatch {
    pub fn vault(&self) -> Address {
        self.vault
    }

    /// Ask for a new read, typically after a dispatched transaction
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    /// Result of the last completed read, `None` before the first one completes
    pub fn latest(&self) -> Option<VaultResult<VaultView>> {
        self.updates.borrow().clone()
    }

    /// Wait for the next completed read
    pub async fn changed(&mut self) -> Option<VaultResult<VaultView>> {
        self.updates.changed().await.ok()?;
        self.updates.borrow_and_update().clone()
    }
}

impl Drop for VaultWatch {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl<R: ContractReader + 'static> VaultReader<R> {
    /// Start a [`VaultWatch`] on `vault`. Must be called from within a tokio runtime.
    pub fn watch(&self, vault: Address, caller: Option<Address>) -> VaultWatch {
        let refresh = Arc::new(Notify::new());
        let (publisher, updates) = watch::channel(None);

        let subscriptions: Vec<Unsubscribe> = WATCHED_EVENTS
            .into_iter()
            .map(|event| {
                let refresh = Arc::clone(&refresh);
                self.contract_reader().watch_event(
                    vault,
                    event,
                    self.config().chain_id,
                    Arc::new(move |event: VaultEvent| {
                        debug!(%vault, event = event.event_name(), "Vault event received");
                        refresh.notify_one();
                    }),
                )
            })
            .collect();

        // initial read
        refresh.notify_one();

        let this = self.clone();
        let pending = Arc::clone(&refresh);
        let task = tokio::spawn(async move {
            loop {
                pending.notified().await;
                let result = this.read_vault(vault, caller).await;
                if let Err(err) = &result {
                    warn!(%vault, %err, "Vault refresh failed");
                }
                if publisher.send(Some(result)).is_err() {
                    break;
                }
            }
        });

        VaultWatch {
            vault,
            refresh,
            updates,
            task,
            _subscriptions: subscriptions,
        }
    }
}
