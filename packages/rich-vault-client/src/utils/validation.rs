//! Input checks run before anything is sent to the chain or the encryptor.

use std::collections::HashSet;

use rich_vault_types::Address;

use crate::{VaultError, VaultResult};

pub fn validate_vault_name(name: &str) -> VaultResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VaultError::EmptyVaultName);
    }
    Ok(name.to_string())
}

/// Parse participant entries as typed in a form. Blank entries are skipped; at least one address
/// must remain and no address may appear twice.
pub fn validate_participants<S: AsRef<str>>(entries: &[S]) -> VaultResult<Vec<Address>> {
    let mut seen = HashSet::new();
    let mut participants = Vec::with_capacity(entries.len());
    for entry in entries.iter().map(AsRef::as_ref) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let address: Address = entry.parse().map_err(|reason| VaultError::InvalidAddress {
            input: entry.to_string(),
            reason,
        })?;
        if !seen.insert(address) {
            return Err(VaultError::DuplicateParticipant(address));
        }
        participants.push(address);
    }
    if participants.is_empty() {
        return Err(VaultError::NoParticipants);
    }
    Ok(participants)
}

/// Parse a raw wealth amount: decimal digits only, surrounding whitespace ignored
pub fn parse_wealth(raw: &str) -> VaultResult<u128> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VaultError::InvalidInput(raw.to_string()));
    }
    digits
        .parse()
        .map_err(|_| VaultError::InvalidInput(raw.to_string()))
}
