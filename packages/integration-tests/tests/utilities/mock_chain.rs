#![allow(dead_code)]

//! In-memory stand-in for the vault factory, the vaults and the encryption service.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicU64, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use rich_vault::{
    calls::{Ciphertext, ReadCall, ReadValue, VaultEvent, WriteCall},
    clients::{
        ContractReader, ContractWriter, EventCallback, TransportError, TransportResult,
        Unsubscribe, WealthEncryptor,
    },
    Address, ParticipantStatus, TxHash,
};

use super::helper::*;

#[derive(Default)]
struct MockVault {
    name: String,
    creator: Address,
    participants: Vec<Address>,
    status: HashMap<Address, ParticipantStatus>,
    accepted: Vec<Address>,
    rejected: Vec<Address>,
    wealth: HashMap<Address, u128>,
    winner: Address,
}

#[derive(Default)]
struct ChainState {
    nonce: u64,
    vaults: HashMap<Address, MockVault>,
    created_by: HashMap<Address, Vec<Address>>,
    invited: HashMap<Address, Vec<Address>>,
    broken_vaults: HashSet<Address>,
    failing_reads: HashSet<(Address, &'static str)>,
    failing_writes: HashMap<&'static str, String>,
    declining_signers: HashSet<Address>,
    raw_status_overrides: HashMap<(Address, Address), u8>,
}

type Subscribers = Arc<Mutex<HashMap<u64, (Address, VaultEvent, EventCallback)>>>;

#[derive(Default)]
pub struct MockChain {
    state: Mutex<ChainState>,
    subscribers: Subscribers,
    next_subscription: AtomicU64,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }

    /// Every read against `vault` reverts
    pub fn break_vault(&self, vault: Address) {
        self.state.lock().unwrap().broken_vaults.insert(vault);
    }

    pub fn fail_read(&self, contract: Address, function: &'static str) {
        self.state
            .lock()
            .unwrap()
            .failing_reads
            .insert((contract, function));
    }

    pub fn fail_write(&self, function: &'static str, reason: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_writes
            .insert(function, reason.to_string());
    }

    pub fn decline_signatures(&self, account: Address) {
        self.state
            .lock()
            .unwrap()
            .declining_signers
            .insert(account);
    }

    /// Make `status(account)` on `vault` return a raw code, even one the vault does not define
    pub fn override_status_code(&self, vault: Address, account: Address, code: u8) {
        self.state
            .lock()
            .unwrap()
            .raw_status_overrides
            .insert((vault, account), code);
    }

    pub fn last_created_vault(&self, creator: Address) -> Option<Address> {
        let state = self.state.lock().unwrap();
        state.created_by.get(&creator)?.last().copied()
    }

    pub fn wealth_of(&self, vault: Address, account: Address) -> Option<u128> {
        let state = self.state.lock().unwrap();
        state.vaults.get(&vault)?.wealth.get(&account).copied()
    }

    /// Notify subscribers as the chain would when `vault` emits `event`
    pub fn emit(&self, vault: Address, event: VaultEvent) {
        let callbacks: Vec<EventCallback> = self
            .subscribers
            .lock()
            .unwrap()
            .values()
            .filter(|(contract, watched, _)| *contract == vault && *watched == event)
            .map(|(_, _, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    fn read_sync(&self, contract: Address, call: ReadCall) -> TransportResult<ReadValue> {
        let state = self.state.lock().unwrap();
        if state.broken_vaults.contains(&contract)
            || state
                .failing_reads
                .contains(&(contract, call.function_name()))
        {
            return Err(TransportError::new("execution reverted"));
        }

        if contract == FACTORY {
            return match call {
                ReadCall::GetCreatedVaults(user) => Ok(ReadValue::Addresses(
                    state.created_by.get(&user).cloned().unwrap_or_default(),
                )),
                ReadCall::GetUserVaults(user) => Ok(ReadValue::Addresses(
                    state.invited.get(&user).cloned().unwrap_or_default(),
                )),
                _ => Err(TransportError::new("function not found on factory")),
            };
        }

        let vault = state
            .vaults
            .get(&contract)
            .ok_or_else(|| TransportError::new("returned no data (\"0x\")"))?;
        let value = match call {
            ReadCall::VaultName => ReadValue::String(vault.name.clone()),
            ReadCall::VaultCreator => ReadValue::Address(vault.creator),
            ReadCall::GetParticipants => ReadValue::Addresses(vault.participants.clone()),
            ReadCall::GetAccepted => ReadValue::Addresses(vault.accepted.clone()),
            ReadCall::GetRejected => ReadValue::Addresses(vault.rejected.clone()),
            ReadCall::WinnerAddress => ReadValue::Address(vault.winner),
            ReadCall::Status(account) => {
                let code = match state.raw_status_overrides.get(&(contract, account)) {
                    Some(code) => *code,
                    None => vault
                        .status
                        .get(&account)
                        .copied()
                        .unwrap_or(ParticipantStatus::NotInvited)
                        .into(),
                };
                ReadValue::Uint8(code)
            }
            ReadCall::HasSubmittedWealth(account) => {
                ReadValue::Bool(vault.wealth.contains_key(&account))
            }
            ReadCall::GetCreatedVaults(_) | ReadCall::GetUserVaults(_) => {
                return Err(TransportError::new("function not found on vault"))
            }
        };
        Ok(value)
    }

    fn write_sync(
        &self,
        contract: Address,
        call: WriteCall,
        account: Address,
    ) -> TransportResult<(TxHash, Option<VaultEvent>)> {
        let mut state = self.state.lock().unwrap();
        if state.declining_signers.contains(&account) {
            return Err(TransportError::new(USER_REJECTED));
        }
        if let Some(reason) = state.failing_writes.get(call.function_name()) {
            return Err(TransportError::new(reason.clone()));
        }

        state.nonce += 1;
        let nonce = state.nonce;
        let hash = tx_hash(nonce, &account);

        if let WriteCall::CreateVault { name, participants } = call {
            if contract != FACTORY {
                return Err(TransportError::new("function not found on vault"));
            }
            let vault = vault_address(&account, nonce);
            state.created_by.entry(account).or_default().push(vault);
            for participant in &participants {
                state.invited.entry(*participant).or_default().push(vault);
            }
            state.vaults.insert(
                vault,
                MockVault {
                    name,
                    creator: account,
                    status: participants
                        .iter()
                        .map(|p| (*p, ParticipantStatus::Invited))
                        .collect(),
                    participants,
                    ..Default::default()
                },
            );
            return Ok((hash, None));
        }

        let vault = state
            .vaults
            .get_mut(&contract)
            .ok_or_else(|| TransportError::new("execution reverted"))?;
        let status = vault
            .status
            .get(&account)
            .copied()
            .unwrap_or(ParticipantStatus::NotInvited);

        let event = match call {
            WriteCall::AcceptInvitation => {
                respond(vault, account, status, ParticipantStatus::Accepted)?;
                None
            }
            WriteCall::RejectInvitation => {
                respond(vault, account, status, ParticipantStatus::Rejected)?;
                None
            }
            WriteCall::SubmitEncryptedWealth(ciphertext) => {
                if status != ParticipantStatus::Accepted {
                    return Err(TransportError::new(REVERT_NOT_ACCEPTED));
                }
                if vault.wealth.contains_key(&account) {
                    return Err(TransportError::new(REVERT_ALREADY_SUBMITTED));
                }
                let value = MockEncryptor::open(&ciphertext, account, contract)
                    .ok_or_else(|| TransportError::new("execution reverted: bad ciphertext"))?;
                vault.wealth.insert(account, value);
                Some(VaultEvent::WealthSubmitted)
            }
            WriteCall::DeclareRichest => {
                if vault.accepted.len() + vault.rejected.len() != vault.participants.len() {
                    return Err(TransportError::new(REVERT_INVITATIONS_PENDING));
                }
                if vault
                    .accepted
                    .iter()
                    .any(|p| !vault.wealth.contains_key(p))
                {
                    return Err(TransportError::new(REVERT_NOT_ALL_SUBMITTED));
                }
                vault.winner = vault
                    .accepted
                    .iter()
                    .max_by_key(|p| vault.wealth.get(*p).copied().unwrap_or_default())
                    .copied()
                    .unwrap_or(Address::ZERO);
                Some(VaultEvent::RichestDeclared)
            }
            WriteCall::CreateVault { .. } => unreachable!("handled above"),
        };
        Ok((hash, event))
    }
}

fn respond(
    vault: &mut MockVault,
    account: Address,
    status: ParticipantStatus,
    answer: ParticipantStatus,
) -> TransportResult<()> {
    if !status.can_transition_to(answer) {
        return Err(TransportError::new(REVERT_NOT_INVITED));
    }
    vault.status.insert(account, answer);
    match answer {
        ParticipantStatus::Accepted => vault.accepted.push(account),
        _ => vault.rejected.push(account),
    }
    Ok(())
}

impl ContractReader for MockChain {
    async fn read(
        &self,
        contract: Address,
        call: ReadCall,
        chain_id: u64,
    ) -> TransportResult<ReadValue> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if chain_id != CHAIN_ID {
            return Err(TransportError::new("chain mismatch"));
        }
        self.read_sync(contract, call)
    }

    fn watch_event(
        &self,
        contract: Address,
        event: VaultEvent,
        _chain_id: u64,
        on_event: EventCallback,
    ) -> Unsubscribe {
        let id = self.next_subscription.fetch_add(1, Ordering::SeqCst);
        self.subscribers
            .lock()
            .unwrap()
            .insert(id, (contract, event, on_event));
        let subscribers = Arc::clone(&self.subscribers);
        Unsubscribe::new(move || {
            subscribers.lock().unwrap().remove(&id);
        })
    }
}

impl ContractWriter for MockChain {
    async fn write(
        &self,
        contract: Address,
        call: WriteCall,
        account: Address,
        chain_id: u64,
    ) -> TransportResult<TxHash> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if chain_id != CHAIN_ID {
            return Err(TransportError::new("chain mismatch"));
        }
        let (hash, event) = self.write_sync(contract, call, account)?;
        if let Some(event) = event {
            self.emit(contract, event);
        }
        Ok(hash)
    }
}

/// Fake encryption: the "ciphertext" is the value followed by the addresses it is bound to
#[derive(Default)]
pub struct MockEncryptor {
    calls: AtomicUsize,
    failure: Mutex<Option<String>>,
}

impl MockEncryptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }

    pub fn seal(value: u128, account: Address, vault: Address) -> Ciphertext {
        let mut bytes = value.to_be_bytes().to_vec();
        bytes.extend_from_slice(account.as_bytes());
        bytes.extend_from_slice(vault.as_bytes());
        Ciphertext::new(bytes)
    }

    pub fn open(ciphertext: &Ciphertext, account: Address, vault: Address) -> Option<u128> {
        let bytes = ciphertext.as_bytes();
        if bytes.len() != 16 + 20 + 20
            || bytes[16..36] != account.as_bytes()[..]
            || bytes[36..] != vault.as_bytes()[..]
        {
            return None;
        }
        let mut value = [0_u8; 16];
        value.copy_from_slice(&bytes[..16]);
        Some(u128::from_be_bytes(value))
    }
}

impl WealthEncryptor for MockEncryptor {
    async fn encrypt(
        &self,
        value: u128,
        account: Address,
        vault: Address,
    ) -> TransportResult<Ciphertext> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(TransportError::new(reason));
        }
        Ok(Self::seal(value, account, vault))
    }
}
