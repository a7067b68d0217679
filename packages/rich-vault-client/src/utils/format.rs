use rich_vault_types::{Address, ParticipantStatus};

/// `0x1234...abcd`
pub fn short_address(address: &Address) -> String {
    let full = address.to_string();
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

/// Label of a raw `status(address)` code, `"Unknown"` for codes the vault does not define
pub fn status_label(code: u8) -> &'static str {
    ParticipantStatus::try_from(code)
        .map(ParticipantStatus::label)
        .unwrap_or("Unknown")
}
