//! Client for the rich vault contracts.
//!
//! A vault is a named group of invited addresses. Invited participants accept or reject, the
//! ones who accepted submit an encrypted wealth, and the vault eventually reveals who holds the
//! largest one. The comparison itself happens on chain under encryption; this crate reads vault
//! state, dispatches the participant actions and derives what a front end needs to display.
//!
//! - [`VaultReader`]: read one vault ([`VaultReader::read_vault`]), list the vaults of a user
//!   ([`VaultReader::list_vaults`]) and keep a view fresh ([`VaultReader::watch`]).
//! - [`VaultDispatcher`]: accept, reject, submit wealth, declare richest and create vaults.
//! - [`derived`]: pure functions over a fetched [`VaultView`].

pub mod calls;
pub mod clients;
pub mod config;
pub mod derived;
pub mod dispatcher;
pub mod errors;
pub mod reader;
pub mod states;
pub mod utils;

mod handlers;

pub use rich_vault_types;
pub use rich_vault_types::{Address, ParticipantStatus, TxHash};

pub use crate::{
    config::ClientConfig,
    dispatcher::VaultDispatcher,
    errors::*,
    handlers::{handler_list_vaults::unique_vaults, handler_watch_vault::VaultWatch},
    reader::VaultReader,
    states::{ParticipantRecord, VaultDisplayStatus, VaultSummary, VaultView},
};
